use std::ops::Index;

use crate::error::ScalarustError;
use crate::linalg::dot_nodes;
use crate::node::Node;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::ops::reduction::sum_op;

/// A fixed-length, non-empty sequence of nodes.
#[derive(Debug, Clone)]
pub struct Vector {
    nodes: Vec<Node>,
}

impl Vector {
    /// Wraps existing nodes. The nodes are shared, not copied.
    ///
    /// # Errors
    /// `EmptyNodeList` if `nodes` is empty.
    pub fn new(nodes: Vec<Node>) -> Result<Self, ScalarustError> {
        if nodes.is_empty() {
            return Err(ScalarustError::EmptyNodeList {
                operation: "Vector::new".to_string(),
            });
        }
        Ok(Vector { nodes })
    }

    /// Builds a vector of fresh leaves.
    pub fn from_values(values: &[f64]) -> Result<Self, ScalarustError> {
        Vector::new(Node::leaves(values))
    }

    /// `len` fresh leaves set to zero.
    pub fn zeros(len: usize) -> Result<Self, ScalarustError> {
        Vector::from_values(&vec![0.0; len])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: empty vectors cannot be built.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Snapshot of the element values.
    pub fn values(&self) -> Vec<f64> {
        self.nodes.iter().map(Node::value).collect()
    }

    /// Snapshot of the element gradients.
    pub fn grads(&self) -> Vec<f64> {
        self.nodes.iter().map(Node::grad).collect()
    }

    fn check_same_len(&self, other: &Vector, operation: &str) -> Result<(), ScalarustError> {
        if self.len() != other.len() {
            return Err(ScalarustError::IncompatibleShape {
                expected: vec![self.len()],
                actual: vec![other.len()],
                operation: operation.to_string(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Vector, operation: &str, f: F) -> Result<Vector, ScalarustError>
    where
        F: Fn(&Node, &Node) -> Result<Node, ScalarustError>,
    {
        self.check_same_len(other, operation)?;
        let nodes = self
            .nodes
            .iter()
            .zip(&other.nodes)
            .map(|(a, b)| f(a, b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Vector { nodes })
    }

    /// Element-wise `self + other`.
    pub fn add(&self, other: &Vector) -> Result<Vector, ScalarustError> {
        self.zip_with(other, "vector add", |a, b| Ok(add_op(a, b)))
    }

    /// Element-wise `self - other`.
    pub fn sub(&self, other: &Vector) -> Result<Vector, ScalarustError> {
        self.zip_with(other, "vector sub", |a, b| Ok(sub_op(a, b)))
    }

    /// Element-wise `self * other`.
    pub fn mul(&self, other: &Vector) -> Result<Vector, ScalarustError> {
        self.zip_with(other, "vector mul", |a, b| Ok(mul_op(a, b)))
    }

    /// Element-wise `self / other`.
    ///
    /// # Errors
    /// `IncompatibleShape` on a length mismatch, `DivideByZero` if any divisor
    /// is zero. Divisors are checked before any element is divided.
    pub fn div(&self, other: &Vector) -> Result<Vector, ScalarustError> {
        self.check_same_len(other, "vector div")?;
        if other.nodes.iter().any(|n| n.value() == 0.0) {
            return Err(ScalarustError::DivideByZero {
                operation: "vector div".to_string(),
            });
        }
        self.zip_with(other, "vector div", div_op)
    }

    /// Adds `scalar` to every element. The scalar is one shared constant leaf.
    pub fn add_scalar(&self, scalar: f64) -> Vector {
        let s = Node::new(scalar);
        self.map(|n| add_op(n, &s))
    }

    /// Multiplies every element by `scalar`. The scalar is one shared constant
    /// leaf.
    pub fn mul_scalar(&self, scalar: f64) -> Vector {
        let s = Node::new(scalar);
        self.map(|n| mul_op(n, &s))
    }

    /// Subtracts `scalar` from every element.
    pub fn sub_scalar(&self, scalar: f64) -> Vector {
        let s = Node::new(scalar);
        self.map(|n| sub_op(n, &s))
    }

    /// `scalar - v` element-wise.
    pub fn rsub_scalar(&self, scalar: f64) -> Vector {
        let s = Node::new(scalar);
        self.map(|n| sub_op(&s, n))
    }

    /// Divides every element by `scalar`.
    ///
    /// # Errors
    /// `DivideByZero` if `scalar` is zero; no node is created.
    pub fn div_scalar(&self, scalar: f64) -> Result<Vector, ScalarustError> {
        if scalar == 0.0 {
            return Err(ScalarustError::DivideByZero {
                operation: "vector div_scalar".to_string(),
            });
        }
        let s = Node::new(scalar);
        self.try_map(|n| div_op(n, &s))
    }

    /// `scalar / v` element-wise.
    ///
    /// # Errors
    /// `DivideByZero` if any element is zero, checked before any division.
    pub fn rdiv_scalar(&self, scalar: f64) -> Result<Vector, ScalarustError> {
        if self.nodes.iter().any(|n| n.value() == 0.0) {
            return Err(ScalarustError::DivideByZero {
                operation: "vector rdiv_scalar".to_string(),
            });
        }
        let s = Node::new(scalar);
        self.try_map(|n| div_op(&s, n))
    }

    pub fn neg(&self) -> Vector {
        self.map(neg_op)
    }

    /// Applies a unary operator element-wise.
    pub fn map<F>(&self, f: F) -> Vector
    where
        F: Fn(&Node) -> Node,
    {
        Vector {
            nodes: self.nodes.iter().map(f).collect(),
        }
    }

    /// Fallible form of [`Vector::map`], for operators with a domain check.
    pub fn try_map<F>(&self, f: F) -> Result<Vector, ScalarustError>
    where
        F: Fn(&Node) -> Result<Node, ScalarustError>,
    {
        let nodes = self.nodes.iter().map(f).collect::<Result<Vec<_>, _>>()?;
        Ok(Vector { nodes })
    }

    pub fn dot(&self, other: &Vector) -> Result<Node, ScalarustError> {
        dot_nodes(&self.nodes, &other.nodes, "vector dot")
    }

    /// Sum of all elements as a single node.
    pub fn sum(&self) -> Node {
        sum_op(&self.nodes)
    }
}

impl Index<usize> for Vector {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

#[cfg(test)]
#[path = "vector_test.rs"]
mod tests;
