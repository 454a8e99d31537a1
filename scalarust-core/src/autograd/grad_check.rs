use approx::relative_eq;
use thiserror::Error;

use crate::error::ScalarustError;
use crate::node::Node;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarustError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarustError),
    #[error("Gradient check input must be a leaf node. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
}

/// Checks analytical gradients against central finite differences.
///
/// `func` must rebuild its graph from `inputs` on every call: the check runs it
/// once for the backward pass, then twice per input with that input's value
/// shifted by `±epsilon`. Input values are restored before returning, and the
/// inputs keep the analytical gradient from the single backward pass.
///
/// # Errors
/// `InputNotLeaf` if an input has parents, `ForwardPassError` /
/// `BackwardPassError` if building or differentiating the graph fails, and
/// `GradientMismatch` when the two estimates differ by more than `tolerance`
/// (absolute or relative).
pub fn check_grad<F>(
    func: F,
    inputs: &[Node],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, ScalarustError>,
{
    // --- Initial Checks ---
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.set_grad(0.0);
    }

    // --- Analytical Gradients ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical: Vec<f64> = inputs.iter().map(Node::grad).collect();

    // --- Numerical Gradients ---
    for (i, input) in inputs.iter().enumerate() {
        let original = input.value();
        let evaluate = |shifted: f64| {
            input.set_value(shifted);
            let result = func(inputs).map(|out| out.value());
            input.set_value(original);
            result.map_err(GradCheckError::ForwardPassError)
        };
        let loss_plus = evaluate(original + epsilon)?;
        let loss_minus = evaluate(original - epsilon)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let analytical_grad = analytical[i];
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::div_op;
    use crate::ops::reduction::prod_op;
    use crate::Operator;
    use std::rc::Rc;

    #[test]
    fn test_check_grad_passes_on_composite() {
        let inputs = Node::leaves(&[0.7, 1.3]);
        let f = |v: &[Node]| {
            let num = &(&v[0] * &v[1]) + &v[0].sin();
            div_op(&num, &(&v[1] + 2.0))
        };
        assert_eq!(check_grad(f, &inputs, 1e-6, 1e-5), Ok(()));
        // Values restored after probing.
        assert_eq!(inputs[0].value(), 0.7);
        assert_eq!(inputs[1].value(), 1.3);
    }

    #[test]
    fn test_check_grad_variadic_product() {
        let inputs = Node::leaves(&[1.5, -2.0, 0.5, 3.0]);
        let f = |v: &[Node]| Ok(prod_op(v));
        assert_eq!(check_grad(f, &inputs, 1e-6, 1e-5), Ok(()));
    }

    #[test]
    fn test_check_grad_rejects_non_leaf() {
        let x = Node::new(1.0);
        let y = x.exp();
        let result = check_grad(|v: &[Node]| Ok(v[0].clone()), &[y], 1e-6, 1e-5);
        assert_eq!(result, Err(GradCheckError::InputNotLeaf { input_index: 0 }));
    }

    /// Square with a deliberately wrong derivative.
    #[derive(Debug)]
    struct BadSquare;

    impl Operator for BadSquare {
        fn name(&self) -> &'static str {
            "bad_square"
        }
        fn arity(&self) -> Option<usize> {
            Some(1)
        }
        fn forward(&self, inputs: &[f64]) -> f64 {
            inputs[0] * inputs[0]
        }
        fn backward(&self, inputs: &[f64]) -> Vec<f64> {
            vec![inputs[0]]
        }
    }

    #[test]
    fn test_check_grad_detects_wrong_derivative() {
        let inputs = Node::leaves(&[3.0]);
        let f = |v: &[Node]| {
            let value = v[0].value() * v[0].value();
            Ok(Node::from_parts(value, vec![v[0].clone()], Some(Rc::new(BadSquare))))
        };
        match check_grad(f, &inputs, 1e-6, 1e-5) {
            Err(GradCheckError::GradientMismatch { input_index, analytical_grad, .. }) => {
                assert_eq!(input_index, 0);
                assert_eq!(analytical_grad, 3.0);
            }
            other => panic!("expected GradientMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_check_grad_propagates_forward_error() {
        let inputs = Node::leaves(&[1.0, 0.0]);
        let result = check_grad(|v: &[Node]| div_op(&v[0], &v[1]), &inputs, 1e-6, 1e-5);
        assert!(matches!(
            result,
            Err(GradCheckError::ForwardPassError(ScalarustError::DivideByZero { .. }))
        ));
    }
}
