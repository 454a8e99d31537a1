// Method forms of the operator catalogue, so graphs can be written as
// `x.sin().exp()` instead of nested `*_op` calls.

use crate::error::ScalarustError;
use crate::node::Node;
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};
use crate::ops::arithmetic::div_op;
use crate::ops::math_elem::{cos_op, exp_op, log_op, sin_op, square_op, tan_op};

impl Node {
    /// `self / rhs`. Fails with `DivideByZero` when `rhs` is zero.
    pub fn try_div(&self, rhs: &Node) -> Result<Node, ScalarustError> {
        div_op(self, rhs)
    }

    pub fn square(&self) -> Node {
        square_op(self)
    }

    pub fn sin(&self) -> Node {
        sin_op(self)
    }

    pub fn cos(&self) -> Node {
        cos_op(self)
    }

    /// Fails with `DomainError` at odd multiples of π/2.
    pub fn tan(&self) -> Result<Node, ScalarustError> {
        tan_op(self)
    }

    pub fn exp(&self) -> Node {
        exp_op(self)
    }

    /// Natural logarithm. Fails with `DomainError` for non-positive values.
    pub fn log(&self) -> Result<Node, ScalarustError> {
        log_op(self)
    }

    pub fn sigmoid(&self) -> Node {
        sigmoid_op(self)
    }

    pub fn tanh(&self) -> Node {
        tanh_op(self)
    }

    pub fn relu(&self) -> Node {
        relu_op(self)
    }
}
