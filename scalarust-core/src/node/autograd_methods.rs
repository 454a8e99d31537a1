use std::collections::HashMap;

use log::{debug, trace};

use crate::autograd::graph::{topological_sort, zero_grad_sweep};
use crate::autograd::NodeId;
use crate::error::ScalarustError;
use crate::node::Node;

impl Node {
    /// Returns this node's full ancestry plus itself, every parent before each
    /// of its children (this node last).
    ///
    /// Nodes are deduplicated by identity. The relative order of unrelated
    /// siblings is unspecified.
    pub fn topological_order(&self) -> Vec<Node> {
        topological_sort(self)
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Seeds this node with gradient 1, then sweeps [`Node::topological_order`]
    /// in reverse. When a node is reached every consumer of it has already been
    /// processed, so its adjoint is complete; its rule is evaluated on the
    /// parents' current values and `adjoint * partial` is added to each
    /// parent's adjoint. A parent reached along several paths receives the sum
    /// of all of them.
    ///
    /// The adjoints of the pass are then **added** to `.grad` of every node in
    /// the ancestry. Calling `backward` twice without [`Node::zero_grad`]
    /// therefore doubles every gradient.
    ///
    /// # Errors
    /// Returns `ArityMismatch` if a backward rule yields a partial count that
    /// differs from its node's parent count. In that case no `.grad` is
    /// modified.
    pub fn backward(&self) -> Result<(), ScalarustError> {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: sweeping {} node(s) from root {:?}",
            sorted_nodes.len(),
            self.id()
        );

        let mut grad_map: HashMap<NodeId, f64> = HashMap::with_capacity(sorted_nodes.len());
        grad_map.insert(self.id(), 1.0);

        let mut finalized: Vec<(&Node, f64)> = Vec::with_capacity(sorted_nodes.len());
        for node in sorted_nodes.iter().rev() {
            let accumulated_grad = grad_map.remove(&node.id()).unwrap_or(0.0);
            finalized.push((node, accumulated_grad));

            let partials = local_partials(node)?;
            let data = node.read_data();
            for (parent, partial) in data.parents.iter().zip(partials) {
                *grad_map.entry(parent.id()).or_insert(0.0) += accumulated_grad * partial;
            }
        }

        for (node, accumulated_grad) in finalized {
            trace!("backward: {:?} += {}", node.id(), accumulated_grad);
            node.acc_grad(accumulated_grad);
        }
        Ok(())
    }

    /// Resets `grad` to 0 on this node and every node reachable through parent
    /// edges, each exactly once. Nodes outside the ancestry are untouched.
    pub fn zero_grad(&self) {
        let cleared = zero_grad_sweep(self);
        debug!("zero_grad: cleared {} node(s) from root {:?}", cleared, self.id());
    }
}

/// Evaluates `node`'s backward rule on its parents' current values.
fn local_partials(node: &Node) -> Result<Vec<f64>, ScalarustError> {
    let data = node.read_data();
    let expected = data.parents.len();
    let Some(op) = data.grad_fn.as_ref() else {
        return Ok(vec![0.0; expected]);
    };

    let inputs: Vec<f64> = data.parents.iter().map(Node::value).collect();
    let partials = op.backward(&inputs);
    if partials.len() != expected {
        return Err(ScalarustError::ArityMismatch {
            operation: format!("{} backward", op.name()),
            expected,
            actual: partials.len(),
        });
    }
    Ok(partials)
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
