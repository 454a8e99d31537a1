use super::*;
use crate::node::Node;
use crate::utils::testing::{check_values_near, create_leaf_with_grad};

fn params_with_grads(values: &[f64], grads: &[f64]) -> (Vec<Node>, ParamTree) {
    let nodes: Vec<Node> = values
        .iter()
        .zip(grads)
        .map(|(&v, &g)| create_leaf_with_grad(v, g))
        .collect();
    let tree = ParamTree::List(nodes.iter().cloned().map(ParamTree::Leaf).collect());
    (nodes, tree)
}

#[test]
fn test_sgd_basic_step() -> Result<(), ScalarustError> {
    let (nodes, params) = params_with_grads(&[1.0, 2.0, 3.0, 4.0], &[0.1, 0.2, 0.3, 0.4]);
    let mut optimizer = SgdOptimizer::new(params, 0.1)?;
    optimizer.step()?;

    let updated: Vec<f64> = nodes.iter().map(Node::value).collect();
    check_values_near(&updated, &[0.99, 1.98, 2.97, 3.96], 1e-12);
    // Gradients are left for the caller to clear.
    assert_eq!(nodes[0].grad(), 0.1);
    Ok(())
}

#[test]
fn test_sgd_zero_grad() -> Result<(), ScalarustError> {
    let (nodes, params) = params_with_grads(&[1.0, 2.0], &[0.5, -0.5]);
    let mut optimizer = SgdOptimizer::with_defaults(params);
    assert_eq!(optimizer.lr(), 0.01);
    optimizer.zero_grad();
    assert!(nodes.iter().all(|n| n.grad() == 0.0));
    optimizer.step()?;
    assert_eq!(nodes[0].value(), 1.0);
    Ok(())
}

#[test]
fn test_sgd_invalid_lr() {
    let (_, params) = params_with_grads(&[1.0], &[0.0]);
    assert!(matches!(
        SgdOptimizer::new(params.clone(), 0.0),
        Err(ScalarustError::ConfigurationError(_))
    ));
    assert!(SgdOptimizer::new(params, -0.1).is_err());
}

#[test]
fn test_sgd_state_round_trip_and_mismatch() -> Result<(), ScalarustError> {
    let (_, params) = params_with_grads(&[1.0, 2.0], &[0.0, 0.0]);
    let mut optimizer = SgdOptimizer::new(params, 0.1)?;
    let saved = optimizer.state().clone();
    assert_eq!(saved, optimizer.init_state());
    optimizer.load_state(saved)?;

    let wrong_len = StateTree::List(vec![StateTree::Leaf(ParamState::Empty)]);
    assert!(matches!(
        optimizer.load_state(wrong_len),
        Err(ScalarustError::StructureMismatch(_))
    ));
    let wrong_kind = StateTree::List(vec![
        StateTree::Leaf(ParamState::Scale { scale: 0.0 }),
        StateTree::Leaf(ParamState::Empty),
    ]);
    assert!(optimizer.load_state(wrong_kind).is_err());
    Ok(())
}
