use super::*;
use approx::assert_relative_eq;

#[test]
fn test_div_forward() -> Result<(), ScalarustError> {
    let a = Node::new(2.0);
    let b = Node::new(3.0);
    assert_relative_eq!(div_op(&a, &b)?.value(), 2.0 / 3.0);
    Ok(())
}

#[test]
fn test_div_backward() -> Result<(), ScalarustError> {
    let a = Node::new(2.0);
    let b = Node::new(4.0);
    let c = div_op(&a, &b)?;
    c.backward()?;
    assert_relative_eq!(a.grad(), 0.25);
    assert_relative_eq!(b.grad(), -2.0 / 16.0);
    Ok(())
}

#[test]
fn test_div_by_zero() {
    let a = Node::new(1.0);
    let b = Node::new(0.0);
    let result = div_op(&a, &b);
    assert_eq!(
        result.map(|n| n.value()),
        Err(ScalarustError::DivideByZero {
            operation: "div".to_string()
        })
    );
}

#[test]
fn test_div_by_negative_zero() {
    let a = Node::new(1.0);
    let b = Node::new(-0.0);
    assert!(matches!(
        div_op(&a, &b),
        Err(ScalarustError::DivideByZero { .. })
    ));
}

#[test]
fn test_div_zero_numerator() -> Result<(), ScalarustError> {
    let a = Node::new(0.0);
    let b = Node::new(5.0);
    let c = div_op(&a, &b)?;
    assert_eq!(c.value(), 0.0);
    c.backward()?;
    assert_relative_eq!(a.grad(), 0.2);
    assert_eq!(b.grad(), 0.0);
    Ok(())
}
