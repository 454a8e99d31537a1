use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

/// `sin x`, partial `cos x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinOp;

impl Operator for SinOp {
    fn name(&self) -> &'static str {
        "sin"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0].sin()
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        vec![inputs[0].cos()]
    }
}

pub fn sin_op(a: &Node) -> Node {
    record_op(SinOp, &[a.clone()])
}

#[cfg(test)]
#[path = "trig_test.rs"]
mod tests;
