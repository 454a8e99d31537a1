use std::cell::RefCell;
use std::collections::HashSet;

use log::trace;

use crate::node::Node;
use crate::node_data::NodeData;

/// Identity of a node in the computation graph.
///
/// Wraps the address of the node's shared allocation: two nodes holding equal
/// values are still different graph participants. The pointer is only ever
/// compared and hashed, never dereferenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) *const RefCell<NodeData>);

/// Builds a topological sort of everything reachable from `root` through
/// parent edges, `root` included.
///
/// Depth-first: a node is marked the first time it is reached (by identity)
/// and appended only after all of its parents have been appended, so every
/// parent precedes each of its children and `root` comes last. Marked nodes
/// are never expanded twice, which keeps shared subexpressions linear.
///
/// Uses an explicit stack of `(node, next parent index)` frames instead of
/// recursion so very deep chains cannot exhaust the call stack.
pub(crate) fn topological_sort(root: &Node) -> Vec<Node> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Node> = Vec::new();
    let mut stack: Vec<(Node, usize)> = vec![(root.clone(), 0)];
    visited.insert(root.id());

    while let Some((node, next_parent)) = stack.pop() {
        match node.parent(next_parent) {
            Some(parent) => {
                stack.push((node, next_parent + 1));
                if visited.insert(parent.id()) {
                    stack.push((parent, 0));
                }
            }
            None => {
                trace!("[topological_sort] appending {:?}", node.id());
                sorted_list.push(node);
            }
        }
    }
    sorted_list
}

/// Sets `grad = 0` on every node reachable from `root`, each exactly once.
pub(crate) fn zero_grad_sweep(root: &Node) -> usize {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack = vec![root.clone()];
    visited.insert(root.id());

    while let Some(node) = stack.pop() {
        node.set_grad(0.0);
        for parent in node.read_data().parents.iter() {
            if visited.insert(parent.id()) {
                stack.push(parent.clone());
            }
        }
    }
    visited.len()
}
