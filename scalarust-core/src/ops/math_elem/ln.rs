use crate::autograd::Operator;
use crate::error::ScalarustError;
use crate::node::Node;
use crate::ops::apply_op;

/// Natural logarithm `ln x`, partial `1/x`. Defined for `x > 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOp;

impl Operator for LogOp {
    fn name(&self) -> &'static str {
        "log"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn validate(&self, inputs: &[f64]) -> Result<(), ScalarustError> {
        if inputs[0].is_nan() || inputs[0] <= 0.0 {
            return Err(ScalarustError::DomainError {
                operation: self.name().to_string(),
                value: inputs[0],
            });
        }
        Ok(())
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0].ln()
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        vec![1.0 / inputs[0]]
    }
}

/// Natural logarithm of `a`.
///
/// # Errors
/// `DomainError` if `a <= 0`.
pub fn log_op(a: &Node) -> Result<Node, ScalarustError> {
    apply_op(LogOp, &[a.clone()])
}
