use std::rc::Rc;

use crate::autograd::Operator;
use crate::node::Node;

impl Node {
    /// Returns the scalar carried by this node.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Overwrites the value.
    ///
    /// Meant for leaves between training iterations. Children already built on
    /// this node keep their forward value, but their backward rules read the
    /// *current* operand values, so run `backward` before perturbing operands.
    pub fn set_value(&self, value: f64) {
        self.write_data().value = value;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Overwrites the accumulated gradient.
    pub fn set_grad(&self, grad: f64) {
        self.write_data().grad = grad;
    }

    /// Adds `delta` into the accumulated gradient.
    pub(crate) fn acc_grad(&self, delta: f64) {
        self.write_data().grad += delta;
    }

    /// Returns handles to the operands this node was built from.
    pub fn parents(&self) -> Vec<Node> {
        self.read_data().parents.clone()
    }

    pub fn num_parents(&self) -> usize {
        self.read_data().parents.len()
    }

    /// Returns the `index`-th parent, if any.
    pub(crate) fn parent(&self, index: usize) -> Option<Node> {
        self.read_data().parents.get(index).cloned()
    }

    /// Checks if this node is a leaf (no parents).
    pub fn is_leaf(&self) -> bool {
        self.read_data().parents.is_empty()
    }

    /// Returns a clone of the `Rc` pointing to the backward rule, if any.
    pub fn grad_fn(&self) -> Option<Rc<dyn Operator>> {
        self.read_data().grad_fn.clone()
    }

    /// Name of the operator that produced this node, `None` for leaves and
    /// rule-less nodes.
    pub fn op_name(&self) -> Option<&'static str> {
        self.read_data().grad_fn.as_ref().map(|op| op.name())
    }
}
