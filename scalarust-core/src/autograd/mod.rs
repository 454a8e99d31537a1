//! Graph machinery shared by every node: the [`Operator`] trait that defines a
//! differentiable primitive, node identity and traversal, and finite-difference
//! gradient checking.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Operator;
pub use grad_check::{check_grad, GradCheckError};
pub use graph::NodeId;
