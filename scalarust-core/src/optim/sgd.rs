use log::debug;

use crate::error::ScalarustError;
use crate::nn::parameter::ParamTree;
use crate::optim::optimizer_state::{unexpected_state, ParamState, StateTree};
use crate::optim::{validate_lr, Optimizer, DEFAULT_LR};

/// Plain stochastic gradient descent: `value -= lr * grad`.
#[derive(Debug)]
pub struct SgdOptimizer {
    params: ParamTree,
    state: StateTree,
    lr: f64,
    iterations: u64,
}

impl SgdOptimizer {
    /// # Errors
    /// `ConfigurationError` if `lr` is not positive.
    pub fn new(params: ParamTree, lr: f64) -> Result<Self, ScalarustError> {
        validate_lr(lr)?;
        let state = StateTree::mirror(&params, &ParamState::Empty);
        Ok(SgdOptimizer {
            params,
            state,
            lr,
            iterations: 0,
        })
    }

    /// `lr = 0.01`.
    pub fn with_defaults(params: ParamTree) -> Self {
        let state = StateTree::mirror(&params, &ParamState::Empty);
        SgdOptimizer {
            params,
            state,
            lr: DEFAULT_LR,
            iterations: 0,
        }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self) -> Result<(), ScalarustError> {
        self.iterations += 1;
        let lr = self.lr;
        debug!("SGD step {} (lr={})", self.iterations, lr);

        self.state.walk_mut(&self.params, "Empty", &mut |node, state| {
            if *state != ParamState::Empty {
                return Err(unexpected_state("Empty", state));
            }
            node.set_value(node.value() - lr * node.grad());
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
        state.check_matches(&self.params, "Empty")?;
        self.state = state;
        Ok(())
    }

    fn init_state(&self) -> StateTree {
        StateTree::mirror(&self.params, &ParamState::Empty)
    }
}

#[cfg(test)]
#[path = "sgd_test.rs"]
mod tests;
