//! # Vector and matrix wrappers (`linalg`)
//!
//! Fixed-shape containers of [`Node`]s. Every operation here is composed from
//! the operator catalogue in [`crate::ops`]; no new derivative rules are
//! introduced. Shapes are checked before any operator is invoked, so a shape
//! error never leaves partial graph fragments behind.

pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

use crate::error::ScalarustError;
use crate::node::Node;
use crate::ops::arithmetic::mul_op;
use crate::ops::reduction::sum_op;

/// Dot product of two equally long node slices: variadic add over per-index
/// products.
pub(crate) fn dot_nodes(a: &[Node], b: &[Node], operation: &str) -> Result<Node, ScalarustError> {
    if a.len() != b.len() {
        return Err(ScalarustError::IncompatibleShape {
            expected: vec![a.len()],
            actual: vec![b.len()],
            operation: operation.to_string(),
        });
    }
    let products: Vec<Node> = a.iter().zip(b).map(|(x, y)| mul_op(x, y)).collect();
    Ok(sum_op(&products))
}
