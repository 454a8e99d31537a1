use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

/// `x²`, partial `2x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareOp;

impl Operator for SquareOp {
    fn name(&self) -> &'static str {
        "square"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0] * inputs[0]
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        vec![2.0 * inputs[0]]
    }
}

pub fn square_op(a: &Node) -> Node {
    record_op(SquareOp, &[a.clone()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScalarustError;

    #[test]
    fn test_square() -> Result<(), ScalarustError> {
        let a = Node::new(-3.0);
        let c = square_op(&a);
        assert_eq!(c.value(), 9.0);
        c.backward()?;
        assert_eq!(a.grad(), -6.0);
        Ok(())
    }
}
