use log::debug;

use crate::error::ScalarustError;
use crate::nn::parameter::ParamTree;
use crate::optim::optimizer_state::{unexpected_state, ParamState, StateTree};
use crate::optim::{
    validate_eps, validate_lr, validate_rate, Optimizer, DEFAULT_EPS, DEFAULT_LR,
    DEFAULT_RMSPROP_BETA,
};

/// RMSProp: AdaGrad with an exponentially decaying squared-gradient average.
///
/// ```text
/// scale = beta * scale + (1 - beta) * grad²
/// value -= lr * grad / (√scale + eps)
/// ```
#[derive(Debug)]
pub struct RmsPropOptimizer {
    params: ParamTree,
    state: StateTree,
    lr: f64,
    beta: f64,
    eps: f64,
    iterations: u64,
}

const INITIAL: ParamState = ParamState::Scale { scale: 0.0 };

impl RmsPropOptimizer {
    /// # Errors
    /// `ConfigurationError` if `lr` or `eps` is not positive or `beta` is
    /// outside `[0, 1)`.
    pub fn new(params: ParamTree, lr: f64, beta: f64, eps: f64) -> Result<Self, ScalarustError> {
        validate_lr(lr)?;
        validate_rate("Beta", beta)?;
        validate_eps(eps)?;
        let state = StateTree::mirror(&params, &INITIAL);
        Ok(RmsPropOptimizer {
            params,
            state,
            lr,
            beta,
            eps,
            iterations: 0,
        })
    }

    /// `lr = 0.01`, `beta = 0.9`, `eps = 1e-8`.
    pub fn with_defaults(params: ParamTree) -> Self {
        let state = StateTree::mirror(&params, &INITIAL);
        RmsPropOptimizer {
            params,
            state,
            lr: DEFAULT_LR,
            beta: DEFAULT_RMSPROP_BETA,
            eps: DEFAULT_EPS,
            iterations: 0,
        }
    }
}

impl Optimizer for RmsPropOptimizer {
    fn step(&mut self) -> Result<(), ScalarustError> {
        self.iterations += 1;
        let (lr, beta, eps) = (self.lr, self.beta, self.eps);
        debug!(
            "RMSProp step {} (lr={}, beta={}, eps={})",
            self.iterations, lr, beta, eps
        );

        self.state.walk_mut(&self.params, INITIAL.kind(), &mut |node, state| {
            let ParamState::Scale { scale } = state else {
                return Err(unexpected_state("Scale", state));
            };
            let grad = node.grad();
            *scale = beta * *scale + (1.0 - beta) * grad * grad;
            node.set_value(node.value() - lr * grad / (scale.sqrt() + eps));
            Ok(())
        })
    }

    fn params(&self) -> &ParamTree {
        &self.params
    }

    fn state(&self) -> &StateTree {
        &self.state
    }

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
#[path = "rmsprop_test.rs"]
mod tests;
