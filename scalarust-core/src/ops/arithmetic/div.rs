use crate::autograd::Operator;
use crate::error::ScalarustError;
use crate::node::Node;
use crate::ops::apply_op;

// --- Operator ---

/// Binary division: `x / y`, partials `(1/y, -x/y²)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DivOp;

impl Operator for DivOp {
    fn name(&self) -> &'static str {
        "div"
    }

    fn arity(&self) -> Option<usize> {
        Some(2)
    }

    fn validate(&self, inputs: &[f64]) -> Result<(), ScalarustError> {
        if inputs[1] == 0.0 {
            return Err(ScalarustError::DivideByZero {
                operation: self.name().to_string(),
            });
        }
        Ok(())
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs[0] / inputs[1]
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        let (a, b) = (inputs[0], inputs[1]);
        vec![1.0 / b, -a / (b * b)]
    }
}

// --- Forward Operation ---

/// Divides `a` by `b`.
///
/// # Errors
/// `DivideByZero` if `b` is zero; no node is created in that case.
pub fn div_op(a: &Node, b: &Node) -> Result<Node, ScalarustError> {
    apply_op(DivOp, &[a.clone(), b.clone()])
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
