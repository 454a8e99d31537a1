use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

/// `max(0, x)`. The partial is `1` for `x >= 0` and `0` otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReluOp;

impl Operator for ReluOp {
    fn name(&self) -> &'static str {
        "relu"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0].max(0.0)
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        vec![if inputs[0] >= 0.0 { 1.0 } else { 0.0 }]
    }
}

pub fn relu_op(a: &Node) -> Node {
    record_op(ReluOp, &[a.clone()])
}
