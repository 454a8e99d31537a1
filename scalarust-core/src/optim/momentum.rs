use log::debug;

use crate::error::ScalarustError;
use crate::nn::parameter::ParamTree;
use crate::optim::optimizer_state::{unexpected_state, ParamState, StateTree};
use crate::optim::{validate_lr, validate_rate, Optimizer, DEFAULT_LR, DEFAULT_MOMENTUM};

/// SGD with momentum:
///
/// ```text
/// Δ = momentum * Δ_prev - lr * grad
/// value += Δ
/// ```
#[derive(Debug)]
pub struct MomentumOptimizer {
    params: ParamTree,
    state: StateTree,
    lr: f64,
    momentum: f64,
    iterations: u64,
}

const INITIAL: ParamState = ParamState::Momentum { momentum: 0.0 };

impl MomentumOptimizer {
    /// # Errors
    /// `ConfigurationError` if `lr <= 0` or `momentum` is outside `[0, 1)`.
    pub fn new(params: ParamTree, lr: f64, momentum: f64) -> Result<Self, ScalarustError> {
        validate_lr(lr)?;
        validate_rate("Momentum", momentum)?;
        let state = StateTree::mirror(&params, &INITIAL);
        Ok(MomentumOptimizer {
            params,
            state,
            lr,
            momentum,
            iterations: 0,
        })
    }

    /// `lr = 0.01`, `momentum = 0.9`.
    pub fn with_defaults(params: ParamTree) -> Self {
        let state = StateTree::mirror(&params, &INITIAL);
        MomentumOptimizer {
            params,
            state,
            lr: DEFAULT_LR,
            momentum: DEFAULT_MOMENTUM,
            iterations: 0,
        }
    }
}

impl Optimizer for MomentumOptimizer {
    fn step(&mut self) -> Result<(), ScalarustError> {
        self.iterations += 1;
        let (lr, mu) = (self.lr, self.momentum);
        debug!("Momentum step {} (lr={}, momentum={})", self.iterations, lr, mu);

        self.state.walk_mut(&self.params, INITIAL.kind(), &mut |node, state| {
            let ParamState::Momentum { momentum: prev } = state else {
                return Err(unexpected_state("Momentum", state));
            };
            let delta = mu * *prev - lr * node.grad();
            node.set_value(node.value() + delta);
            *prev = delta;
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
#[path = "momentum_test.rs"]
mod tests;
