//! # scalarust-core
//!
//! Scalar reverse-mode automatic differentiation.
//!
//! Every value in a computation is a [`Node`]: a scalar with an accumulated
//! gradient and the provenance (parents + local derivative rule) recorded by
//! the operator that produced it. Calling [`Node::backward`] on an output sweeps
//! the graph once, in reverse topological order, and accumulates the exact
//! partial derivative of that output into `.grad` of every ancestor.
//!
//! ```
//! use scalarust_core::Node;
//!
//! let x = Node::new(2.0);
//! let y = Node::new(3.0);
//! let z = &x * &y;
//! let w = &z + &x;
//! assert_eq!(w.value(), 8.0);
//!
//! w.backward().unwrap();
//! assert_eq!(x.grad(), 4.0); // y + 1
//! assert_eq!(y.grad(), 2.0); // x
//!
//! w.zero_grad();
//! assert_eq!(x.grad(), 0.0);
//! ```
//!
//! On top of the core sit [`linalg`] (Vector/Matrix), [`nn`] (modules built
//! from nodes), [`model`] (containers) and [`optim`] (optimizers that walk a
//! parameter tree and consume `.grad`).

// Core graph
pub mod autograd;
pub mod node;
pub mod node_data;
pub mod ops;

// Collaborators built on the core
pub mod linalg;
pub mod model;
pub mod nn;
pub mod optim;

pub mod error;

#[cfg(test)]
pub(crate) mod utils;

pub use autograd::{NodeId, Operator};
pub use error::ScalarustError;
pub use linalg::{Matrix, Vector};
pub use node::Node;
