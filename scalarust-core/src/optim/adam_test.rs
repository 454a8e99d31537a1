use super::*;
use crate::linalg::Vector;
use crate::node::Node;
use crate::utils::testing::create_leaf_with_grad;
use approx::assert_abs_diff_eq;

#[test]
fn test_adam_constant_gradient_moves_by_lr() -> Result<(), ScalarustError> {
    let lr = 0.01;
    let up = create_leaf_with_grad(1.0, 3.0);
    let down = create_leaf_with_grad(-1.0, -0.5);
    let params = ParamTree::List(vec![up.clone().into(), down.clone().into()]);
    let mut optimizer = AdamOptimizer::new(params, lr, 0.9, 0.999, 1e-8)?;

    for step in 1..=20 {
        let (before_up, before_down) = (up.value(), down.value());
        optimizer.step()?;
        // Bias correction makes m̂1 = grad and m̂2 = grad², so each step is
        // lr * sign(grad) up to eps.
        assert_abs_diff_eq!(up.value() - before_up, -lr, epsilon = 1e-8);
        assert_abs_diff_eq!(down.value() - before_down, lr, epsilon = 1e-7);
        assert_eq!(optimizer.iterations(), step);
    }
    Ok(())
}

#[test]
fn test_adam_moments() -> Result<(), ScalarustError> {
    let x = create_leaf_with_grad(0.0, 2.0);
    let mut optimizer = AdamOptimizer::with_defaults(ParamTree::Leaf(x.clone()));
    optimizer.step()?;
    match optimizer.state() {
        StateTree::Leaf(ParamState::Moments { moment_1, moment_2 }) => {
            assert_abs_diff_eq!(*moment_1, 0.2, epsilon = 1e-12);
            assert_abs_diff_eq!(*moment_2, 0.004, epsilon = 1e-12);
        }
        other => panic!("unexpected state {:?}", other),
    }
    Ok(())
}

#[test]
fn test_adam_step_counter_is_per_optimizer() -> Result<(), ScalarustError> {
    let v = Vector::from_values(&[1.0, 2.0, 3.0])?;
    for n in v.iter() {
        n.set_grad(1.0);
    }
    let mut optimizer = AdamOptimizer::with_defaults(ParamTree::from(&v));
    optimizer.step()?;
    optimizer.step()?;
    // Three parameters, two steps.
    assert_eq!(optimizer.iterations(), 2);
    Ok(())
}

#[test]
fn test_adam_rejects_mismatched_state() -> Result<(), ScalarustError> {
    let x = create_leaf_with_grad(1.0, 1.0);
    let mut optimizer = AdamOptimizer::with_defaults(ParamTree::List(vec![x.clone().into()]));
    assert!(optimizer
        .load_state(StateTree::Leaf(ParamState::Moments {
            moment_1: 0.0,
            moment_2: 0.0
        }))
        .is_err());
    optimizer.step()?;
    assert_eq!(optimizer.iterations(), 1);
    assert!(x.value() < 1.0);
    Ok(())
}

#[test]
fn test_adam_config_validation() {
    let params = ParamTree::Leaf(Node::new(0.0));
    assert!(AdamOptimizer::new(params.clone(), 0.01, 1.0, 0.999, 1e-8).is_err());
    assert!(AdamOptimizer::new(params.clone(), 0.01, 0.9, 1.5, 1e-8).is_err());
    assert!(AdamOptimizer::new(params.clone(), 0.01, 0.9, 0.999, -1e-8).is_err());
    assert!(AdamOptimizer::new(params, 0.01, 0.9, 0.999, 1e-8).is_ok());
}
