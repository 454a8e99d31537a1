use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

/// `Σ xᵢ` over any number of operands, every partial is `1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumOp;

impl Operator for SumOp {
    fn name(&self) -> &'static str {
        "sum"
    }

    fn arity(&self) -> Option<usize> {
        None
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs.iter().sum()
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        vec![1.0; inputs.len()]
    }
}

/// Sums `inputs`. An empty slice yields a parentless node with value `0`.
pub fn sum_op(inputs: &[Node]) -> Node {
    record_op(SumOp, inputs)
}

#[cfg(test)]
#[path = "sum_test.rs"]
mod tests;
