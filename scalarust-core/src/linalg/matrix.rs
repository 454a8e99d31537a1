use crate::error::ScalarustError;
use crate::linalg::{dot_nodes, Vector};
use crate::node::Node;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::ops::reduction::sum_op;

/// A non-empty, rectangular, row-major grid of nodes.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: Vec<Vec<Node>>,
    n_cols: usize,
}

impl Matrix {
    /// Wraps existing rows of nodes. The nodes are shared, not copied.
    ///
    /// # Errors
    /// `EmptyNodeList` if there are no rows or the rows are empty,
    /// `IncompatibleShape` if the rows differ in length.
    pub fn new(rows: Vec<Vec<Node>>) -> Result<Self, ScalarustError> {
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_cols == 0 {
            return Err(ScalarustError::EmptyNodeList {
                operation: "Matrix::new".to_string(),
            });
        }
        if let Some(ragged) = rows.iter().find(|row| row.len() != n_cols) {
            return Err(ScalarustError::IncompatibleShape {
                expected: vec![n_cols],
                actual: vec![ragged.len()],
                operation: "Matrix::new".to_string(),
            });
        }
        Ok(Matrix { rows, n_cols })
    }

    /// Builds a matrix of fresh leaves.
    pub fn from_values(values: &[Vec<f64>]) -> Result<Self, ScalarustError> {
        Matrix::new(values.iter().map(|row| Node::leaves(row)).collect())
    }

    pub fn zeros(n_rows: usize, n_cols: usize) -> Result<Self, ScalarustError> {
        Matrix::from_values(&vec![vec![0.0; n_cols]; n_rows])
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.n_cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Node> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn row(&self, index: usize) -> Option<&[Node]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn col(&self, index: usize) -> Option<Vec<Node>> {
        if index >= self.n_cols {
            return None;
        }
        Some(self.rows.iter().map(|r| r[index].clone()).collect())
    }

    pub fn rows(&self) -> &[Vec<Node>] {
        &self.rows
    }

    /// Iterates over every node, row by row.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.rows.iter().flatten()
    }

    /// Returns a matrix sharing the same nodes with rows and columns swapped.
    pub fn transpose(&self) -> Matrix {
        let rows = (0..self.n_cols)
            .map(|c| self.rows.iter().map(|r| r[c].clone()).collect())
            .collect();
        Matrix {
            rows,
            n_cols: self.rows.len(),
        }
    }

    pub fn values(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(Node::value).collect())
            .collect()
    }

    pub fn grads(&self) -> Vec<Vec<f64>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(Node::grad).collect())
            .collect()
    }

    fn shape_vec(&self) -> Vec<usize> {
        vec![self.rows.len(), self.n_cols]
    }

    fn zip_with<F>(&self, other: &Matrix, operation: &str, f: F) -> Result<Matrix, ScalarustError>
    where
        F: Fn(&Node, &Node) -> Result<Node, ScalarustError>,
    {
        if self.shape() != other.shape() {
            return Err(ScalarustError::IncompatibleShape {
                expected: self.shape_vec(),
                actual: other.shape_vec(),
                operation: operation.to_string(),
            });
        }
        let rows = self
            .rows
            .iter()
            .zip(&other.rows)
            .map(|(ra, rb)| ra.iter().zip(rb).map(|(a, b)| f(a, b)).collect())
            .collect::<Result<Vec<Vec<Node>>, _>>()?;
        Ok(Matrix {
            rows,
            n_cols: self.n_cols,
        })
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, ScalarustError> {
        self.zip_with(other, "matrix add", |a, b| Ok(add_op(a, b)))
    }

    pub fn sub(&self, other: &Matrix) -> Result<Matrix, ScalarustError> {
        self.zip_with(other, "matrix sub", |a, b| Ok(sub_op(a, b)))
    }

    /// Element-wise (Hadamard) product.
    pub fn mul(&self, other: &Matrix) -> Result<Matrix, ScalarustError> {
        self.zip_with(other, "matrix mul", |a, b| Ok(mul_op(a, b)))
    }

    /// Element-wise division. Divisors are checked before any element is divided.
    pub fn div(&self, other: &Matrix) -> Result<Matrix, ScalarustError> {
        if self.shape() == other.shape() && other.iter().any(|n| n.value() == 0.0) {
            return Err(ScalarustError::DivideByZero {
                operation: "matrix div".to_string(),
            });
        }
        self.zip_with(other, "matrix div", div_op)
    }

    pub fn neg(&self) -> Matrix {
        self.map(neg_op)
    }

    /// Multiplies every element by `scalar`, one shared constant leaf.
    pub fn mul_scalar(&self, scalar: f64) -> Matrix {
        let s = Node::new(scalar);
        self.map(|n| mul_op(n, &s))
    }

    /// Adds `scalar` to every element, one shared constant leaf.
    pub fn add_scalar(&self, scalar: f64) -> Matrix {
        let s = Node::new(scalar);
        self.map(|n| add_op(n, &s))
    }

    pub fn sub_scalar(&self, scalar: f64) -> Matrix {
        let s = Node::new(scalar);
        self.map(|n| sub_op(n, &s))
    }

    /// `scalar - m` element-wise.
    pub fn rsub_scalar(&self, scalar: f64) -> Matrix {
        let s = Node::new(scalar);
        self.map(|n| sub_op(&s, n))
    }

    /// # Errors
    /// `DivideByZero` if `scalar` is zero; no node is created.
    pub fn div_scalar(&self, scalar: f64) -> Result<Matrix, ScalarustError> {
        if scalar == 0.0 {
            return Err(ScalarustError::DivideByZero {
                operation: "matrix div_scalar".to_string(),
            });
        }
        let s = Node::new(scalar);
        self.try_map(|n| div_op(n, &s))
    }

    /// `scalar / m` element-wise. Every element is checked before any division.
    pub fn rdiv_scalar(&self, scalar: f64) -> Result<Matrix, ScalarustError> {
        if self.iter().any(|n| n.value() == 0.0) {
            return Err(ScalarustError::DivideByZero {
                operation: "matrix rdiv_scalar".to_string(),
            });
        }
        let s = Node::new(scalar);
        self.try_map(|n| div_op(&s, n))
    }

    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(&Node) -> Node,
    {
        Matrix {
            rows: self.rows.iter().map(|r| r.iter().map(&f).collect()).collect(),
            n_cols: self.n_cols,
        }
    }

    /// Fallible form of [`Matrix::map`], for operators with a domain check.
    pub fn try_map<F>(&self, f: F) -> Result<Matrix, ScalarustError>
    where
        F: Fn(&Node) -> Result<Node, ScalarustError>,
    {
        let rows = self
            .rows
            .iter()
            .map(|r| r.iter().map(&f).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix {
            rows,
            n_cols: self.n_cols,
        })
    }

    pub fn sum(&self) -> Node {
        let all: Vec<Node> = self.iter().cloned().collect();
        sum_op(&all)
    }

    /// Matrix product `self · other`, one dot product per output cell.
    ///
    /// # Errors
    /// `IncompatibleShape` if `self.cols != other.rows`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, ScalarustError> {
        let (m, k) = self.shape();
        let (k2, n) = other.shape();
        if k != k2 {
            return Err(ScalarustError::IncompatibleShape {
                expected: vec![k],
                actual: vec![k2],
                operation: "matmul".to_string(),
            });
        }
        let other_t = other.transpose();
        let mut rows = Vec::with_capacity(m);
        for row in &self.rows {
            let out_row = other_t
                .rows
                .iter()
                .map(|col| dot_nodes(row, col, "matmul"))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(out_row);
        }
        Ok(Matrix { rows, n_cols: n })
    }

    /// Matrix–vector product `self · v`.
    ///
    /// # Errors
    /// `IncompatibleShape` if `v.len() != self.cols`; no node is created.
    pub fn matvec(&self, v: &Vector) -> Result<Vector, ScalarustError> {
        if v.len() != self.n_cols {
            return Err(ScalarustError::IncompatibleShape {
                expected: vec![self.n_cols],
                actual: vec![v.len()],
                operation: "matvec".to_string(),
            });
        }
        let out = self
            .rows
            .iter()
            .map(|row| dot_nodes(row, v.nodes(), "matvec"))
            .collect::<Result<Vec<_>, _>>()?;
        Vector::new(out)
    }
}

#[cfg(test)]
#[path = "matrix_test.rs"]
mod tests;
