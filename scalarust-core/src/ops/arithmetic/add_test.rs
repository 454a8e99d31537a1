use super::*;
use crate::error::ScalarustError;
use approx::assert_relative_eq;

#[test]
fn test_add_forward() {
    let a = Node::new(1.25);
    let b = Node::new(-4.0);
    let c = add_op(&a, &b);
    assert_relative_eq!(c.value(), -2.75);
    assert_eq!(c.num_parents(), 2);
}

#[test]
fn test_add_backward() -> Result<(), ScalarustError> {
    let a = Node::new(2.0);
    let b = Node::new(3.0);
    let c = add_op(&a, &b);
    c.backward()?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), ScalarustError> {
    let a = Node::new(2.0);
    let c = add_op(&a, &a);
    assert_eq!(c.value(), 4.0);
    c.backward()?;
    assert_eq!(a.grad(), 2.0);
    Ok(())
}

#[test]
fn test_add_chain_propagates_upstream_grad() -> Result<(), ScalarustError> {
    // d/da (3 * (a + b)) = 3
    let a = Node::new(0.5);
    let b = Node::new(1.5);
    let c = &add_op(&a, &b) * 3.0;
    c.backward()?;
    assert_eq!(a.grad(), 3.0);
    assert_eq!(b.grad(), 3.0);
    Ok(())
}
