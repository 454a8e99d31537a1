use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

/// Binary subtraction: `x - y`, partials `(1, -1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubOp;

impl Operator for SubOp {
    fn name(&self) -> &'static str {
        "sub"
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0] - inputs[1]
    }

    fn backward(&self, _inputs: &[f64]) -> Vec<f64> {
        vec![1.0, -1.0]
    }
}

/// Subtracts `b` from `a`.
pub fn sub_op(a: &Node, b: &Node) -> Node {
    record_op(SubOp, &[a.clone(), b.clone()])
}
