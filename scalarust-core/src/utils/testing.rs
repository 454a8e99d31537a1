use crate::linalg::Vector;
use crate::node::Node;

/// Checks that two value slices have the same length and agree element-wise
/// within `tolerance`. Panics with the first offending index otherwise.
pub fn check_values_near(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "Data length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Helper to create a vector of fresh leaves for testing purposes.
pub(crate) fn create_test_vector(values: &[f64]) -> Vector {
    Vector::from_values(values).expect("Failed to create test vector")
}

/// Helper to create a leaf with a pre-set gradient, as left behind by a
/// backward pass.
pub(crate) fn create_leaf_with_grad(value: f64, grad: f64) -> Node {
    let node = Node::new(value);
    node.set_grad(grad);
    node
}
