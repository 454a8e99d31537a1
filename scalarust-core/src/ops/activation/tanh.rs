use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

/// Hyperbolic tangent, partial `1 - tanh² x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TanhOp;

impl Operator for TanhOp {
    fn name(&self) -> &'static str {
        "tanh"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0].tanh()
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        let t = inputs[0].tanh();
        vec![1.0 - t * t]
    }
}

pub fn tanh_op(a: &Node) -> Node {
    record_op(TanhOp, &[a.clone()])
}
