use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

// --- Operator ---

/// Binary multiplication: `x * y`, partials `(y, x)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MulOp;

impl Operator for MulOp {
    fn name(&self) -> &'static str {
        "mul"
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0] * inputs[1]
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        // grad_a = b, grad_b = a
        vec![inputs[1], inputs[0]]
    }
}

// --- Forward Operation ---

/// Multiplies two nodes.
pub fn mul_op(a: &Node, b: &Node) -> Node {
    record_op(MulOp, &[a.clone(), b.clone()])
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
