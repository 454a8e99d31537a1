//! Optimizers for training modules built from nodes.
//!
//! This module provides the `Optimizer` trait, the per-parameter state tree
//! (`StateTree`) and five update rules: SGD, SGD with momentum, AdaGrad,
//! RMSProp and Adam. Every optimizer owns a [`ParamTree`](crate::nn::ParamTree)
//! and a `StateTree` of the same shape, walked in lock-step on each step.

pub mod adagrad;
pub mod adam;
pub mod momentum;
pub mod optimizer_state;
pub mod optimizer_trait;
pub mod rmsprop;
pub mod sgd;

pub use adagrad::AdaGradOptimizer;
pub use adam::AdamOptimizer;
pub use momentum::MomentumOptimizer;
pub use optimizer_state::{ParamState, StateTree};
pub use optimizer_trait::Optimizer;
pub use rmsprop::RmsPropOptimizer;
pub use sgd::SgdOptimizer;

use crate::error::ScalarustError;

pub const DEFAULT_LR: f64 = 0.01;
pub const DEFAULT_MOMENTUM: f64 = 0.9;
pub const DEFAULT_RMSPROP_BETA: f64 = 0.9;
pub const DEFAULT_BETA1: f64 = 0.9;
pub const DEFAULT_BETA2: f64 = 0.999;
pub const DEFAULT_EPS: f64 = 1e-8;

pub(crate) fn validate_lr(lr: f64) -> Result<(), ScalarustError> {
    if lr.is_nan() || lr <= 0.0 {
        return Err(ScalarustError::ConfigurationError(
            "Learning rate must be positive".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_eps(eps: f64) -> Result<(), ScalarustError> {
    if eps.is_nan() || eps <= 0.0 {
        return Err(ScalarustError::ConfigurationError(
            "Epsilon must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Decay rates and momentum coefficients live in `[0, 1)`.
pub(crate) fn validate_rate(name: &str, value: f64) -> Result<(), ScalarustError> {
    if !(0.0..1.0).contains(&value) {
        return Err(ScalarustError::ConfigurationError(format!(
            "{} must be in [0, 1), got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_helpers() {
        assert!(validate_lr(0.1).is_ok());
        assert!(validate_lr(0.0).is_err());
        assert!(validate_lr(f64::NAN).is_err());
        assert!(validate_eps(1e-8).is_ok());
        assert!(validate_eps(-1.0).is_err());
        assert!(validate_rate("beta", 0.0).is_ok());
        assert!(validate_rate("beta", 0.999).is_ok());
        assert!(validate_rate("beta", 1.0).is_err());
        assert!(validate_rate("beta", -0.1).is_err());
        assert!(validate_rate("beta", f64::NAN).is_err());
    }
}
