use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

/// `eˣ`, partial `eˣ`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpOp;

impl Operator for ExpOp {
    fn name(&self) -> &'static str {
        "exp"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0].exp()
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        vec![inputs[0].exp()]
    }
}

pub fn exp_op(a: &Node) -> Node {
    record_op(ExpOp, &[a.clone()])
}

#[cfg(test)]
#[path = "exp_log_test.rs"]
mod tests;
