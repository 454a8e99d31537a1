use crate::error::ScalarustError;
use crate::nn::parameter::ParamTree;
use crate::optim::optimizer_state::StateTree;

/// Trait defining the common interface for all optimizers.
///
/// Optimizers update the values of the leaves in their parameter tree from
/// the gradients accumulated by [`Node::backward`](crate::Node::backward).
/// The phase order (forward, backward, `step`, `zero_grad`) is up to the
/// caller.
pub trait Optimizer {
    /// Performs a single optimization step, mutating every parameter's value.
    ///
    /// # Errors
    /// `StructureMismatch` if the state tree no longer matches the parameter
    /// tree. No parameter is updated in that case.
    fn step(&mut self) -> Result<(), ScalarustError>;

    /// The parameter tree this optimizer updates.
    fn params(&self) -> &ParamTree;

    /// Current per-parameter state.
    fn state(&self) -> &StateTree;

    /// Replaces the per-parameter state.
    ///
    /// # Errors
    /// `StructureMismatch` if `state` is not shaped like [`Optimizer::params`]
    /// or holds a state variant this optimizer does not use.
    fn load_state(&mut self, state: StateTree) -> Result<(), ScalarustError>;

    /// A fresh state tree mirroring the parameter tree.
    fn init_state(&self) -> StateTree;

    /// Clears the gradients of all parameters managed by the optimizer.
    fn zero_grad(&mut self) {
        self.params().zero_grad();
    }
}
