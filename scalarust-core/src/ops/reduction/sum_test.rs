use super::*;
use crate::error::ScalarustError;
use approx::assert_relative_eq;

#[test]
fn test_sum_forward_backward() -> Result<(), ScalarustError> {
    let xs = Node::leaves(&[1.0, 2.5, -0.5, 4.0]);
    let s = sum_op(&xs);
    assert_relative_eq!(s.value(), 7.0);
    s.backward()?;
    for x in &xs {
        assert_eq!(x.grad(), 1.0);
    }
    Ok(())
}

#[test]
fn test_sum_empty() -> Result<(), ScalarustError> {
    let s = sum_op(&[]);
    assert_eq!(s.value(), 0.0);
    assert_eq!(s.num_parents(), 0);
    assert_eq!(s.op_name(), Some("sum"));
    s.backward()?;
    assert_eq!(s.grad(), 1.0);
    Ok(())
}

#[test]
fn test_sum_repeated_operand() -> Result<(), ScalarustError> {
    let x = Node::new(3.0);
    let s = sum_op(&[x.clone(), x.clone(), x.clone()]);
    assert_eq!(s.value(), 9.0);
    s.backward()?;
    assert_eq!(x.grad(), 3.0);
    Ok(())
}
