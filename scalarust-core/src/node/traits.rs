use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::node::Node;
use crate::ops::arithmetic::{add_op, mul_op, neg_op, sub_op};

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.read_data();
        write!(f, "Node(value={:?}, grad={:?}", data.value, data.grad)?;
        if let Some(op) = data.grad_fn.as_ref() {
            write!(f, ", op={}", op.name())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// --- Operator overloads ---
//
// Only the infallible binary operators are overloaded; division has a domain
// error and goes through `div_op` / `Node::try_div`. A bare `f64` operand
// becomes a fresh constant leaf.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl $trait<&Node> for &Node {
            type Output = Node;

            fn $method(self, rhs: &Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl $trait<Node> for &Node {
            type Output = Node;

            fn $method(self, rhs: Node) -> Node {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<&Node> for Node {
            type Output = Node;

            fn $method(self, rhs: &Node) -> Node {
                $op_fn(&self, rhs)
            }
        }

        impl $trait<Node> for Node {
            type Output = Node;

            fn $method(self, rhs: Node) -> Node {
                $op_fn(&self, &rhs)
            }
        }

        impl $trait<f64> for &Node {
            type Output = Node;

            fn $method(self, rhs: f64) -> Node {
                $op_fn(self, &Node::new(rhs))
            }
        }

        impl $trait<f64> for Node {
            type Output = Node;

            fn $method(self, rhs: f64) -> Node {
                $op_fn(&self, &Node::new(rhs))
            }
        }

        impl $trait<&Node> for f64 {
            type Output = Node;

            fn $method(self, rhs: &Node) -> Node {
                $op_fn(&Node::new(self), rhs)
            }
        }

        impl $trait<Node> for f64 {
            type Output = Node;

            fn $method(self, rhs: Node) -> Node {
                $op_fn(&Node::new(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);

impl Neg for &Node {
    type Output = Node;

    fn neg(self) -> Node {
        neg_op(self)
    }
}

impl Neg for Node {
    type Output = Node;

    fn neg(self) -> Node {
        neg_op(&self)
    }
}
