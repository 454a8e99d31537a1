use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

/// Logistic sigmoid `1 / (1 + e⁻ˣ)`, partial `σ(x)(1 - σ(x))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SigmoidOp;

pub(crate) fn sigmoid(x: f64) -> f64 {
    // Split on sign so `exp` never overflows.
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

impl Operator for SigmoidOp {
    fn name(&self) -> &'static str {
        "sigmoid"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        sigmoid(inputs[0])
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        let s = sigmoid(inputs[0]);
        vec![s * (1.0 - s)]
    }
}

pub fn sigmoid_op(a: &Node) -> Node {
    record_op(SigmoidOp, &[a.clone()])
}
