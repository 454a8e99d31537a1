use crate::autograd::Operator;
use crate::error::ScalarustError;
use crate::node::Node;
use crate::ops::apply_op;

/// Below this `|cos x|` the tangent is treated as undefined.
pub(crate) const TAN_POLE_TOLERANCE: f64 = 1e-12;

/// `tan x`, partial `1 / cos² x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TanOp;

impl Operator for TanOp {
    fn name(&self) -> &'static str {
        "tan"
    }

    fn arity(&self) -> Option<usize> {
        Some(1)
    }

    fn validate(&self, inputs: &[f64]) -> Result<(), ScalarustError> {
        if inputs[0].is_nan() || inputs[0].cos().abs() < TAN_POLE_TOLERANCE {
            return Err(ScalarustError::DomainError {
                operation: self.name().to_string(),
                value: inputs[0],
            });
        }
        Ok(())
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0].tan()
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        let c = inputs[0].cos();
        vec![1.0 / (c * c)]
    }
}

/// Tangent of `a`.
///
/// # Errors
/// `DomainError` when `a` is NaN or `cos a` is within `1e-12` of zero.
pub fn tan_op(a: &Node) -> Result<Node, ScalarustError> {
    apply_op(TanOp, &[a.clone()])
}
