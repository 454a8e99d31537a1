use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

/// Negation: `-x`, partial `(-1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NegOp;

impl Operator for NegOp {
    fn name(&self) -> &'static str {
        "neg"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        -inputs[0]
    }

    fn backward(&self, _inputs: &[f64]) -> Vec<f64> {
        vec![-1.0]
    }
}

pub fn neg_op(a: &Node) -> Node {
    record_op(NegOp, &[a.clone()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScalarustError;

    #[test]
    fn test_neg_forward_backward() -> Result<(), ScalarustError> {
        let a = Node::new(2.0);
        let c = neg_op(&a);
        assert_eq!(c.value(), -2.0);
        c.backward()?;
        assert_eq!(a.grad(), -1.0);
        Ok(())
    }

    #[test]
    fn test_double_negation() -> Result<(), ScalarustError> {
        let a = Node::new(-3.5);
        let c = neg_op(&neg_op(&a));
        assert_eq!(c.value(), -3.5);
        c.backward()?;
        assert_eq!(a.grad(), 1.0);
        Ok(())
    }
}
