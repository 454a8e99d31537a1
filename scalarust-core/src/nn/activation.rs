use crate::error::ScalarustError;
use crate::linalg::Vector;
use crate::nn::module::Module;
use crate::nn::parameter::ParamTree;
use crate::node::Node;
use crate::ops::activation::{relu_op, sigmoid_op, tanh_op};

/// Element-wise activation function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Sigmoid,
    Tanh,
    ReLU,
}

impl Activation {
    /// Applies the activation to a single node.
    pub fn apply(&self, x: &Node) -> Node {
        match self {
            Activation::Sigmoid => sigmoid_op(x),
            Activation::Tanh => tanh_op(x),
            Activation::ReLU => relu_op(x),
        }
    }

    pub fn apply_vector(&self, v: &Vector) -> Vector {
        v.map(|x| self.apply(x))
    }
}

impl Module for Activation {
    fn forward(&self, input: &Vector) -> Result<Vector, ScalarustError> {
        Ok(self.apply_vector(input))
    }

    fn parameters(&self) -> ParamTree {
        ParamTree::List(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{check_values_near, create_test_vector};

    #[test]
    fn test_forward_elementwise() -> Result<(), ScalarustError> {
        let x = create_test_vector(&[-1.0, 0.0, 2.0]);
        assert_eq!(Activation::ReLU.forward(&x)?.values(), vec![0.0, 0.0, 2.0]);
        check_values_near(
            &Activation::Tanh.forward(&x)?.values(),
            &[(-1.0_f64).tanh(), 0.0, 2.0_f64.tanh()],
            1e-12,
        );
        let s = Activation::Sigmoid.forward(&x)?;
        assert_eq!(s[1].value(), 0.5);
        assert_eq!(s[1].op_name(), Some("sigmoid"));
        assert_eq!(Activation::Sigmoid.parameters().num_leaves(), 0);
        Ok(())
    }
}
