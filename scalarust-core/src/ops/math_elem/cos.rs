use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

/// `cos x`, partial `-sin x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosOp;

impl Operator for CosOp {
    fn name(&self) -> &'static str {
        "cos"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0].cos()
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        vec![-inputs[0].sin()]
    }
}

pub fn cos_op(a: &Node) -> Node {
    record_op(CosOp, &[a.clone()])
}
