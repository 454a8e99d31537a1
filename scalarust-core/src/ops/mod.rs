//! # Operator catalogue (`ops`)
//!
//! Every differentiable primitive lives here, grouped by family:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg.
//! - [`math_elem`]: square, sin, cos, tan, exp, log.
//! - [`reduction`]: variadic sum and product.
//! - [`activation`]: sigmoid, tanh, relu.
//!
//! Each operation is a unit struct implementing [`Operator`] plus an `xxx_op`
//! function that invokes it. Invocation is the single point where graph edges
//! are created: the new node's value, parents and backward rule are set
//! together, and a failing domain check returns before any node exists.
//! Infallible operators return `Node`; operators with a restricted domain
//! return `Result<Node, ScalarustError>`.

use std::rc::Rc;

use crate::autograd::Operator;
use crate::error::ScalarustError;
use crate::node::Node;

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
pub mod reduction;

/// Invokes `op` on `inputs`: checks arity and domain, computes the forward
/// value and wires the resulting node to `inputs`.
///
/// Works for any [`Operator`], including ones defined outside this crate.
///
/// # Errors
/// `ArityMismatch` if `op` has a fixed arity different from `inputs.len()`,
/// or whatever `op.validate` reports.
pub fn apply_op<O: Operator + 'static>(op: O, inputs: &[Node]) -> Result<Node, ScalarustError> {
    if let Some(expected) = op.arity() {
        if expected != inputs.len() {
            return Err(ScalarustError::ArityMismatch {
                operation: op.name().to_string(),
                expected,
                actual: inputs.len(),
            });
        }
    }
    let values = values_of(inputs);
    op.validate(&values)?;
    Ok(wire(op, inputs, &values))
}

/// Forward + wiring for operators whose arity is guaranteed by the caller's
/// signature and whose domain is unrestricted.
pub(crate) fn record_op<O: Operator + 'static>(op: O, inputs: &[Node]) -> Node {
    let values = values_of(inputs);
    wire(op, inputs, &values)
}

fn wire<O: Operator + 'static>(op: O, inputs: &[Node], values: &[f64]) -> Node {
    let value = op.forward(values);
    Node::from_parts(value, inputs.to_vec(), Some(Rc::new(op)))
}

fn values_of(inputs: &[Node]) -> Vec<f64> {
    inputs.iter().map(Node::value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::AddOp;
    use crate::ops::math_elem::LogOp;

    #[test]
    fn test_apply_op_wires_operands() -> Result<(), ScalarustError> {
        let a = Node::new(1.0);
        let b = Node::new(2.5);
        let c = apply_op(AddOp, &[a.clone(), b.clone()])?;

        assert_eq!(c.value(), 3.5);
        let parents = c.parents();
        assert!(parents[0].ptr_eq(&a));
        assert!(parents[1].ptr_eq(&b));
        assert_eq!(c.op_name(), Some("add"));
        Ok(())
    }

    #[test]
    fn test_apply_op_arity_mismatch() {
        let a = Node::new(1.0);
        let result = apply_op(AddOp, &[a]);
        assert_eq!(
            result.map(|n| n.value()),
            Err(ScalarustError::ArityMismatch {
                operation: "add".to_string(),
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_apply_op_domain_checked_before_wiring() {
        let a = Node::new(-1.0);
        let result = apply_op(LogOp, &[a.clone()]);
        assert!(matches!(result, Err(ScalarustError::DomainError { .. })));
        // No child holds a reference to `a`.
        assert_eq!(std::rc::Rc::strong_count(&a.data), 1);
    }
}
