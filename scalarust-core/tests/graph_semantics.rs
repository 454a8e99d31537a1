use approx::assert_relative_eq;
use scalarust_core::ops::apply_op;
use scalarust_core::ops::arithmetic::{div_op, SubOp};
use scalarust_core::ops::reduction::{prod_op, sum_op};
use scalarust_core::{Node, ScalarustError};

// Include the common helper module
mod common;
use common::{grads_of, quadratic};

#[test]
fn test_diamond_from_public_surface() -> Result<(), ScalarustError> {
    let x = Node::new(2.0);
    let y = Node::new(3.0);
    let z = &x * &y;
    let w = &z + &x;

    assert_eq!(w.value(), 8.0);
    w.backward()?;
    assert_eq!(grads_of(&[&x, &y, &z, &w]), vec![4.0, 2.0, 1.0, 1.0]);
    Ok(())
}

#[test]
fn test_accumulate_then_reset_protocol() -> Result<(), ScalarustError> {
    let x = Node::new(3.0);
    let z = &x * &x;
    z.backward()?;
    z.backward()?;
    assert_eq!(x.grad(), 12.0);
    z.zero_grad();
    z.zero_grad();
    assert_eq!(x.grad(), 0.0);
    z.backward()?;
    assert_eq!(x.grad(), 6.0);
    Ok(())
}

#[test]
fn test_shared_subexpression_used_many_times() -> Result<(), ScalarustError> {
    // s = x * y is reused by four consumers; d/dx sum(s, s*s, exp(s), -s) at s = 0.
    let x = Node::new(0.0);
    let y = Node::new(4.0);
    let s = &x * &y;
    let out = sum_op(&[s.clone(), &s * &s, s.exp(), -&s]);
    out.backward()?;

    // ds/dx = y = 4; d out / ds = 1 + 2s + e^s - 1 = 1 at s = 0
    assert_relative_eq!(x.grad(), 4.0, epsilon = 1e-12);
    assert_relative_eq!(s.grad(), 1.0, epsilon = 1e-12);
    assert_eq!(out.topological_order().len(), 7);
    Ok(())
}

#[test]
fn test_prod_zero_operand() -> Result<(), ScalarustError> {
    let xs = Node::leaves(&[0.0, 5.0, 2.0]);
    let p = prod_op(&xs);
    assert_eq!(p.value(), 0.0);
    p.backward()?;
    assert_eq!(xs.iter().map(Node::grad).collect::<Vec<_>>(), vec![10.0, 0.0, 0.0]);
    Ok(())
}

#[test]
fn test_failed_operator_leaves_graph_untouched() -> Result<(), ScalarustError> {
    let a = Node::new(1.0);
    let zero = Node::new(0.0);
    assert!(div_op(&a, &zero).is_err());
    assert!(a.try_div(&zero).is_err());
    assert!(Node::new(-1.0).log().is_err());

    let b = apply_op(SubOp, &[a.clone(), zero.clone()])?;
    assert_eq!(b.value(), 1.0);
    assert!(matches!(
        apply_op(SubOp, &[a.clone()]),
        Err(ScalarustError::ArityMismatch { expected: 2, actual: 1, .. })
    ));
    Ok(())
}

#[test]
fn test_gradient_descent_on_scalar_graph() -> Result<(), ScalarustError> {
    let x = Node::new(-2.0);
    for _ in 0..200 {
        let f = quadratic(&x);
        f.backward()?;
        x.set_value(x.value() - 0.1 * x.grad());
        f.zero_grad();
    }
    assert_relative_eq!(x.value(), 1.5, epsilon = 1e-6);
    Ok(())
}
