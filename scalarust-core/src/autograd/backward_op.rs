use std::fmt::Debug;

/// Defines a differentiable primitive: a forward value computation paired with
/// its local derivative rule.
///
/// Operators are stateless. A node produced by an operator stores a shared
/// handle to it in `grad_fn` and the backward pass dispatches through that
/// handle, evaluating the rule on the operands' values *at traversal time*.
/// Nothing borrows the operands, so a node's wiring never entangles lifetimes.
pub trait Operator: Debug {
    /// Short name used in errors and logs (e.g. `"mul"`).
    fn name(&self) -> &'static str;

    /// Number of operands the operator takes, `None` for variadic operators.
    fn arity(&self) -> Option<usize>;

    /// Checks that `inputs` lie in the operator's domain.
    ///
    /// Called before `forward`, so a failing operator never creates a node.
    fn validate(&self, _inputs: &[f64]) -> Result<(), crate::ScalarustError> {
        Ok(())
    }

    /// Computes the output value from the operand values.
    fn forward(&self, inputs: &[f64]) -> f64;

    /// Computes \\( \partial \text{out} / \partial \text{input}_i \\) for every
    /// input, evaluated at `inputs`.
    ///
    /// The returned `Vec` **must** have one entry per input, in operand order.
    /// A different length is reported as `ArityMismatch` by the backward pass.
    fn backward(&self, inputs: &[f64]) -> Vec<f64>;
}
