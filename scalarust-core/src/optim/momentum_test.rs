use super::*;
use crate::node::Node;
use crate::utils::testing::create_leaf_with_grad;
use approx::assert_relative_eq;

#[test]
fn test_momentum_accumulates_velocity() -> Result<(), ScalarustError> {
    let x = create_leaf_with_grad(1.0, 1.0);
    let mut optimizer = MomentumOptimizer::new(ParamTree::Leaf(x.clone()), 0.1, 0.5)?;

    optimizer.step()?;
    // Δ1 = -0.1
    assert_relative_eq!(x.value(), 0.9, epsilon = 1e-12);
    optimizer.step()?;
    // Δ2 = 0.5 * -0.1 - 0.1 = -0.15
    assert_relative_eq!(x.value(), 0.75, epsilon = 1e-12);
    match optimizer.state() {
        StateTree::Leaf(ParamState::Momentum { momentum }) => {
            assert_relative_eq!(*momentum, -0.15, epsilon = 1e-12)
        }
        other => panic!("unexpected state {:?}", other),
    }
    Ok(())
}

#[test]
fn test_momentum_zero_reduces_to_sgd() -> Result<(), ScalarustError> {
    let x = create_leaf_with_grad(2.0, 4.0);
    let mut optimizer = MomentumOptimizer::new(ParamTree::Leaf(x.clone()), 0.25, 0.0)?;
    optimizer.step()?;
    optimizer.step()?;
    assert_relative_eq!(x.value(), 0.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_momentum_config_validation() {
    let params = ParamTree::Leaf(Node::new(0.0));
    assert!(MomentumOptimizer::new(params.clone(), 0.1, 1.0).is_err());
    assert!(MomentumOptimizer::new(params.clone(), 0.1, -0.2).is_err());
    assert!(MomentumOptimizer::new(params.clone(), 0.0, 0.5).is_err());
    assert!(MomentumOptimizer::new(params, 0.1, 0.0).is_ok());
}

#[test]
fn test_momentum_rejects_other_state_family() -> Result<(), ScalarustError> {
    let x = Node::new(0.0);
    let mut optimizer = MomentumOptimizer::with_defaults(ParamTree::Leaf(x));
    let result = optimizer.load_state(StateTree::Leaf(ParamState::Scale { scale: 1.0 }));
    assert!(matches!(result, Err(ScalarustError::StructureMismatch(_))));
    optimizer.load_state(StateTree::Leaf(ParamState::Momentum { momentum: 0.3 }))?;
    Ok(())
}
