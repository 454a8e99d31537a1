// src/node/mod.rs

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::autograd::{NodeId, Operator};
use crate::node_data::NodeData;

mod accessors;
mod autograd_methods;
mod op_methods;
mod traits;

/// A scalar vertex of the computation graph.
///
/// `Node` uses `Rc<RefCell<NodeData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node used as an operand by several operators is
///     referenced by each resulting child; it lives as long as any child or
///     external handle does. Cloning a `Node` is cheap and yields another
///     handle to the *same* graph participant.
/// 2.  **Interior Mutability:** `grad` (backward / zero-grad sweeps) and
///     `value` (optimizers) are updated through shared handles.
///
/// Graphs are single-threaded: `Node` is neither `Send` nor `Sync`.
pub struct Node {
    pub(crate) data: Rc<RefCell<NodeData>>,
}

impl Node {
    /// Creates a leaf node (a constant or a trainable parameter).
    ///
    /// Leaves have no parents and no backward rule.
    pub fn new(value: f64) -> Self {
        Node::from_parts(value, Vec::new(), None)
    }

    /// Creates a node with explicit provenance.
    ///
    /// This is the general constructor; operators call it with their operands
    /// and themselves as the backward rule. When `grad_fn` is `None` the node
    /// reports an all-zero partial for each parent, so no gradient flows past it.
    ///
    /// Never fails. A rule whose `backward` returns a partial count different
    /// from `parents.len()` is reported by [`Node::backward`] as an
    /// `ArityMismatch`.
    pub fn from_parts(value: f64, parents: Vec<Node>, grad_fn: Option<Rc<dyn Operator>>) -> Self {
        Node {
            data: Rc::new(RefCell::new(NodeData::new(value, parents, grad_fn))),
        }
    }

    /// Builds one leaf per value.
    pub fn leaves(values: &[f64]) -> Vec<Node> {
        values.iter().map(|&v| Node::new(v)).collect()
    }

    /// Stable identity of this graph participant.
    pub fn id(&self) -> NodeId {
        NodeId(Rc::as_ptr(&self.data))
    }

    /// Returns `true` if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }

    pub(crate) fn read_data(&self) -> Ref<'_, NodeData> {
        self.data.borrow()
    }

    pub(crate) fn write_data(&self) -> RefMut<'_, NodeData> {
        self.data.borrow_mut()
    }
}

impl Clone for Node {
    /// Cloning a Node clones the handle (shallow clone via Rc).
    fn clone(&self) -> Self {
        Node {
            data: Rc::clone(&self.data),
        }
    }
}
