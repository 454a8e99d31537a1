use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

// --- Operator ---

/// Binary addition: `x + y`, partials `(1, 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddOp;

impl Operator for AddOp {
    fn name(&self) -> &'static str {
        "add"
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0] + inputs[1]
    }

    fn backward(&self, _inputs: &[f64]) -> Vec<f64> {
        vec![1.0, 1.0]
    }
}

// --- Forward Operation ---

/// Adds two nodes.
pub fn add_op(a: &Node, b: &Node) -> Node {
    record_op(AddOp, &[a.clone(), b.clone()])
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
