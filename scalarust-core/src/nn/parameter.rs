use std::collections::BTreeMap;

use crate::linalg::{Matrix, Vector};
use crate::node::Node;

/// Nested structure of trainable leaves.
///
/// Optimizers mirror this shape in their [`StateTree`](crate::optim::StateTree)
/// and walk both in lock-step. Map entries are visited in key order.
#[derive(Debug, Clone)]
pub enum ParamTree {
    Leaf(Node),
    Map(BTreeMap<String, ParamTree>),
    List(Vec<ParamTree>),
}

impl ParamTree {
    /// Builds a `Map` from `(name, subtree)` pairs.
    pub fn map<K, I>(entries: I) -> ParamTree
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ParamTree)>,
    {
        ParamTree::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Every leaf node, depth-first.
    pub fn leaves(&self) -> Vec<Node> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<Node>) {
        match self {
            ParamTree::Leaf(node) => out.push(node.clone()),
            ParamTree::Map(entries) => entries.values().for_each(|t| t.collect_leaves(out)),
            ParamTree::List(items) => items.iter().for_each(|t| t.collect_leaves(out)),
        }
    }

    pub fn num_leaves(&self) -> usize {
        match self {
            ParamTree::Leaf(_) => 1,
            ParamTree::Map(entries) => entries.values().map(ParamTree::num_leaves).sum(),
            ParamTree::List(items) => items.iter().map(ParamTree::num_leaves).sum(),
        }
    }

    /// Sets the gradient of every leaf to zero.
    pub fn zero_grad(&self) {
        for node in self.leaves() {
            node.set_grad(0.0);
        }
    }

    /// Subtree under `key` when this is a `Map`.
    pub fn get(&self, key: &str) -> Option<&ParamTree> {
        match self {
            ParamTree::Map(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Subtree at `index` when this is a `List`.
    pub fn at(&self, index: usize) -> Option<&ParamTree> {
        match self {
            ParamTree::List(items) => items.get(index),
            _ => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Node> {
        match self {
            ParamTree::Leaf(node) => Some(node),
            _ => None,
        }
    }
}

impl From<Node> for ParamTree {
    fn from(node: Node) -> Self {
        ParamTree::Leaf(node)
    }
}

impl From<&Vector> for ParamTree {
    fn from(v: &Vector) -> Self {
        ParamTree::List(v.iter().cloned().map(ParamTree::Leaf).collect())
    }
}

impl From<&Matrix> for ParamTree {
    /// One `List` per row.
    fn from(m: &Matrix) -> Self {
        ParamTree::List(
            m.rows()
                .iter()
                .map(|row| ParamTree::List(row.iter().cloned().map(ParamTree::Leaf).collect()))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
