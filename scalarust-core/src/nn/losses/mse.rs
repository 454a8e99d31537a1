use std::str::FromStr;

use crate::error::ScalarustError;
use crate::linalg::Vector;
use crate::node::Node;
use crate::ops::arithmetic::mul_op;
use crate::ops::math_elem::square_op;

/// Specifies the reduction to apply to the squared errors: `mean` or `sum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

impl FromStr for Reduction {
    type Err = ScalarustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mean" => Ok(Reduction::Mean),
            "sum" => Ok(Reduction::Sum),
            _ => Err(ScalarustError::ConfigurationError(format!(
                "Unsupported reduction type: {}",
                s
            ))),
        }
    }
}

/// Mean squared error between `prediction` and `target`.
///
/// # Errors
/// `IncompatibleShape` if the lengths differ.
pub fn mse_loss(prediction: &Vector, target: &Vector) -> Result<Node, ScalarustError> {
    MSELoss::new(Reduction::Mean).calculate(prediction, target)
}

/// Squared-error loss with a configurable reduction.
#[derive(Debug, Clone, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds the loss node. Every step goes through catalogue operators, so
    /// the result backpropagates into both `input` and `target`.
    pub fn calculate(&self, input: &Vector, target: &Vector) -> Result<Node, ScalarustError> {
        let diff = input.sub(target).map_err(|e| match e {
            ScalarustError::IncompatibleShape {
                expected, actual, ..
            } => ScalarustError::IncompatibleShape {
                expected,
                actual,
                operation: "mse_loss".to_string(),
            },
            other => other,
        })?;
        let total = diff.map(square_op).sum();
        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => mul_op(&total, &Node::new(1.0 / diff.len() as f64)),
        })
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
