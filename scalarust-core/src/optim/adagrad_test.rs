use super::*;
use crate::node::Node;
use crate::utils::testing::create_leaf_with_grad;
use approx::assert_relative_eq;

#[test]
fn test_adagrad_steps() -> Result<(), ScalarustError> {
    let x = create_leaf_with_grad(1.0, 2.0);
    let mut optimizer = AdaGradOptimizer::new(ParamTree::Leaf(x.clone()), 0.1, 1e-8)?;

    optimizer.step()?;
    // scale = 4, step = 0.1 * 2 / 2
    assert_relative_eq!(x.value(), 0.9, epsilon = 1e-8);

    optimizer.step()?;
    // scale = 8, step = 0.1 * 2 / √8
    assert_relative_eq!(x.value(), 0.9 - 0.2 / 8.0_f64.sqrt(), epsilon = 1e-8);
    assert_eq!(optimizer.state(), &StateTree::Leaf(ParamState::Scale { scale: 8.0 }));
    Ok(())
}

#[test]
fn test_adagrad_zero_grad_is_no_op() -> Result<(), ScalarustError> {
    let x = Node::new(3.0);
    let mut optimizer = AdaGradOptimizer::with_defaults(ParamTree::Leaf(x.clone()));
    optimizer.step()?;
    assert_eq!(x.value(), 3.0);
    Ok(())
}

#[test]
fn test_adagrad_config_validation() {
    let params = ParamTree::Leaf(Node::new(0.0));
    assert!(AdaGradOptimizer::new(params.clone(), 0.1, 0.0).is_err());
    assert!(AdaGradOptimizer::new(params, -1.0, 1e-8).is_err());
}
