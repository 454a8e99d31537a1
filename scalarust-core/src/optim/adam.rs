use log::debug;

use crate::error::ScalarustError;
use crate::nn::parameter::ParamTree;
use crate::optim::optimizer_state::{unexpected_state, ParamState, StateTree};
use crate::optim::{
    validate_eps, validate_lr, validate_rate, Optimizer, DEFAULT_BETA1, DEFAULT_BETA2,
    DEFAULT_EPS, DEFAULT_LR,
};

/// Adam optimizer with bias-corrected moment estimates.
///
/// ```text
/// m1 = beta1 * m1 + (1 - beta1) * grad
/// m2 = beta2 * m2 + (1 - beta2) * grad²
/// value -= lr * (m1 / (1 - beta1^t)) / (√(m2 / (1 - beta2^t)) + eps)
/// ```
///
/// `t` counts calls to [`Optimizer::step`] and is shared by every parameter.
#[derive(Debug)]
pub struct AdamOptimizer {
    params: ParamTree,
    state: StateTree,
    lr: f64,
    beta1: f64,
    beta2: f64,
    eps: f64,
    iterations: u64,
}

const INITIAL: ParamState = ParamState::Moments {
    moment_1: 0.0,
    moment_2: 0.0,
};

impl AdamOptimizer {
    /// # Errors
    /// `ConfigurationError` if `lr` or `eps` is not positive, or either beta
    /// is outside `[0, 1)`.
    pub fn new(
        params: ParamTree,
        lr: f64,
        beta1: f64,
        beta2: f64,
        eps: f64,
    ) -> Result<Self, ScalarustError> {
        validate_lr(lr)?;
        validate_rate("Beta1", beta1)?;
        validate_rate("Beta2", beta2)?;
        validate_eps(eps)?;
        let state = StateTree::mirror(&params, &INITIAL);
        Ok(AdamOptimizer {
            params,
            state,
            lr,
            beta1,
            beta2,
            eps,
            iterations: 0,
        })
    }

    /// `lr = 0.01`, `beta1 = 0.9`, `beta2 = 0.999`, `eps = 1e-8`.
    pub fn with_defaults(params: ParamTree) -> Self {
        let state = StateTree::mirror(&params, &INITIAL);
        AdamOptimizer {
            params,
            state,
            lr: DEFAULT_LR,
            beta1: DEFAULT_BETA1,
            beta2: DEFAULT_BETA2,
            eps: DEFAULT_EPS,
            iterations: 0,
        }
    }

    /// Number of completed steps (`t`).
    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}

impl Optimizer for AdamOptimizer {
    fn step(&mut self) -> Result<(), ScalarustError> {
        let t = self.iterations + 1;
        let (lr, beta1, beta2, eps) = (self.lr, self.beta1, self.beta2, self.eps);
        let exponent = i32::try_from(t).unwrap_or(i32::MAX);
        let bias_correction1 = 1.0 - beta1.powi(exponent);
        let bias_correction2 = 1.0 - beta2.powi(exponent);
        debug!(
            "Adam step {} (lr={}, betas=({}, {}), eps={})",
            t, lr, beta1, beta2, eps
        );

        self.state.walk_mut(&self.params, INITIAL.kind(), &mut |node, state| {
            let ParamState::Moments { moment_1, moment_2 } = state else {
                return Err(unexpected_state("Moments", state));
            };
            let grad = node.grad();
            *moment_1 = beta1 * *moment_1 + (1.0 - beta1) * grad;
            *moment_2 = beta2 * *moment_2 + (1.0 - beta2) * grad * grad;
            let m1_hat = *moment_1 / bias_correction1;
            let m2_hat = *moment_2 / bias_correction2;
            node.set_value(node.value() - lr * m1_hat / (m2_hat.sqrt() + eps));
            Ok(())
        })?;

        self.iterations = t;
        Ok(())
    }

    fn params(&self) -> &ParamTree {
        &self.params
    }

    fn state(&self) -> &StateTree {
        &self.state
    }

    /// Loads the moment estimates. The step counter `t` is kept.
    fn load_state(&mut self, state: StateTree) -> Result<(), ScalarustError> {
        state.check_matches(&self.params, INITIAL.kind())?;
        self.state = state;
        Ok(())
    }

    fn init_state(&self) -> StateTree {
        StateTree::mirror(&self.params, &INITIAL)
    }
}

#[cfg(test)]
#[path = "adam_test.rs"]
mod tests;
