// src/node_data.rs
use std::fmt::Debug;
use std::rc::Rc;

use crate::autograd::Operator;
use crate::node::Node;

/// Internal storage for a [`Node`].
///
/// Wrapped in `Rc<RefCell<NodeData>>` by `Node`, so every child that used a
/// node as an operand keeps it alive and `grad`/`value` can be updated through
/// a shared handle.
#[derive(Debug)]
pub struct NodeData {
    /// The scalar carried by the node.
    pub(crate) value: f64,
    /// Gradient accumulated by backward passes, reset by `zero_grad`.
    pub(crate) grad: f64,

    // --- Provenance --- fixed at construction
    /// Operands of the operator that produced this node, in operand order.
    pub(crate) parents: Vec<Node>,
    /// Local derivative rule. `None` means all-zero partials.
    pub(crate) grad_fn: Option<Rc<dyn Operator>>,
}

impl NodeData {
    pub(crate) fn new(value: f64, parents: Vec<Node>, grad_fn: Option<Rc<dyn Operator>>) -> Self {
        NodeData {
            value,
            grad: 0.0,
            parents,
            grad_fn,
        }
    }
}

impl Drop for NodeData {
    /// Releases the ancestry iteratively: dropping the head of a long chain
    /// would otherwise recurse once per link.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.parents);
        while let Some(parent) = pending.pop() {
            if let Ok(cell) = Rc::try_unwrap(parent.data) {
                let mut data = cell.into_inner();
                pending.append(&mut data.parents);
            }
        }
    }
}
