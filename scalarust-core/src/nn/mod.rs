//! # Neural-network building blocks (`nn`)
//!
//! Modules map a [`Vector`](crate::Vector) of nodes to another and expose
//! their trainable leaves as a [`ParamTree`], which is what the optimizers in
//! [`crate::optim`] consume.

pub mod activation;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

pub use activation::Activation;
pub use init::Initializer;
pub use layers::Linear;
pub use losses::{mse_loss, MSELoss, Reduction};
pub use module::Module;
pub use parameter::ParamTree;
