use log::debug;

use crate::error::ScalarustError;
use crate::nn::parameter::ParamTree;
use crate::optim::optimizer_state::{unexpected_state, ParamState, StateTree};
use crate::optim::{validate_eps, validate_lr, Optimizer, DEFAULT_EPS, DEFAULT_LR};

/// AdaGrad: per-parameter step sizes shrinking with the accumulated squared
/// gradient.
///
/// ```text
/// scale += grad²
/// value -= lr * grad / (√scale + eps)
/// ```
#[derive(Debug)]
pub struct AdaGradOptimizer {
    params: ParamTree,
    state: StateTree,
    lr: f64,
    eps: f64,
    iterations: u64,
}

const INITIAL: ParamState = ParamState::Scale { scale: 0.0 };

impl AdaGradOptimizer {
    /// # Errors
    /// `ConfigurationError` if `lr` or `eps` is not positive.
    pub fn new(params: ParamTree, lr: f64, eps: f64) -> Result<Self, ScalarustError> {
        validate_lr(lr)?;
        validate_eps(eps)?;
        let state = StateTree::mirror(&params, &INITIAL);
        Ok(AdaGradOptimizer {
            params,
            state,
            lr,
            eps,
            iterations: 0,
        })
    }

    /// `lr = 0.01`, `eps = 1e-8`.
    pub fn with_defaults(params: ParamTree) -> Self {
        let state = StateTree::mirror(&params, &INITIAL);
        AdaGradOptimizer {
            params,
            state,
            lr: DEFAULT_LR,
            eps: DEFAULT_EPS,
            iterations: 0,
        }
    }
}

impl Optimizer for AdaGradOptimizer {
    fn step(&mut self) -> Result<(), ScalarustError> {
        self.iterations += 1;
        let (lr, eps) = (self.lr, self.eps);
        debug!("AdaGrad step {} (lr={}, eps={})", self.iterations, lr, eps);

        self.state.walk_mut(&self.params, INITIAL.kind(), &mut |node, state| {
            let ParamState::Scale { scale } = state else {
                return Err(unexpected_state("Scale", state));
            };
            let grad = node.grad();
            *scale += grad * grad;
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
#[path = "adagrad_test.rs"]
mod tests;
