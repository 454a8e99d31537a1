use scalarust_core::Node;

// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn grads_of(nodes: &[&Node]) -> Vec<f64> {
    nodes.iter().map(|n| n.grad()).collect()
}

/// `f(x) = x^2 - 3x + 2` built from catalogue operators; minimum at `x = 1.5`.
#[allow(dead_code)]
pub(crate) fn quadratic(x: &Node) -> Node {
    &(&x.square() - &(x * 3.0)) + 2.0
}
