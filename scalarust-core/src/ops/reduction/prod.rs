use crate::autograd::Operator;
use crate::node::Node;
use crate::ops::record_op;

/// `Π xᵢ` over any number of operands.
///
/// The partial for operand `i` is the product of all other operands, computed
/// from prefix and suffix products rather than by dividing the total, so it
/// stays exact when some operand is zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProdOp;

impl Operator for ProdOp {
    fn name(&self) -> &'static str {
        "prod"
    }

    fn arity(&self) -> Option<usize> {
        None
    }

    fn forward(&self, inputs: &[f64]) -> f64 {
        inputs.iter().product()
    }

    fn backward(&self, inputs: &[f64]) -> Vec<f64> {
        let n = inputs.len();
        // partials[i] = prefix product of inputs[..i]
        let mut partials = Vec::with_capacity(n);
        let mut prefix = 1.0;
        for &x in inputs {
            partials.push(prefix);
            prefix *= x;
        }
        let mut suffix = 1.0;
        for i in (0..n).rev() {
            partials[i] *= suffix;
            suffix *= inputs[i];
        }
        partials
    }
}

/// Multiplies `inputs`. An empty slice yields a parentless node with value `1`.
pub fn prod_op(inputs: &[Node]) -> Node {
    record_op(ProdOp, inputs)
}

#[cfg(test)]
#[path = "prod_test.rs"]
mod tests;
