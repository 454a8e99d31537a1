//! Scalar activation functions used by the network blocks.

pub mod relu;
pub mod sigmoid;
pub mod tanh;

pub use relu::{relu_op, ReluOp};
pub use sigmoid::{sigmoid_op, SigmoidOp};
pub use tanh::{tanh_op, TanhOp};

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
