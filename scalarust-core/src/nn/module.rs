use std::fmt::Debug;

use crate::error::ScalarustError;
use crate::linalg::Vector;
use crate::nn::parameter::ParamTree;

/// The base trait for all neural network modules (layers, activations,
/// containers).
pub trait Module: Debug {
    /// Performs a forward pass, building new graph nodes on top of `input`.
    ///
    /// # Errors
    /// Returns a `ScalarustError` if `input` has the wrong length or an
    /// operator fails.
    fn forward(&self, input: &Vector) -> Result<Vector, ScalarustError>;

    /// Returns the trainable leaves of the module, including those of
    /// sub-modules. Modules without parameters return an empty `List`.
    fn parameters(&self) -> ParamTree;
}
