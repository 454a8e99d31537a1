use log::debug;

use crate::error::ScalarustError;
use crate::linalg::{Matrix, Vector};
use crate::nn::activation::Activation;
use crate::nn::init::{Initializer, DEFAULT_SEED};
use crate::nn::module::Module;
use crate::nn::parameter::ParamTree;

/// Fully connected layer: `y = act(W·x + b)`.
///
/// `W` has shape `(out_dim, in_dim)` and is He-initialised from a seeded
/// generator; `b` starts at zero.
#[derive(Debug, Clone)]
pub struct Linear {
    weight: Matrix,
    bias: Option<Vector>,
    activation: Option<Activation>,
    in_dim: usize,
    out_dim: usize,
}

impl Linear {
    /// Creates a new layer seeded with [`DEFAULT_SEED`].
    ///
    /// # Arguments
    ///
    /// * `in_dim` - Size of each input.
    /// * `out_dim` - Size of each output.
    /// * `bias` - If `true`, the layer learns an additive bias.
    /// * `activation` - Applied element-wise after the affine map.
    ///
    /// # Errors
    /// `EmptyNodeList` if either dimension is zero.
    pub fn new(
        in_dim: usize,
        out_dim: usize,
        bias: bool,
        activation: Option<Activation>,
    ) -> Result<Self, ScalarustError> {
        Linear::with_seed(in_dim, out_dim, bias, activation, DEFAULT_SEED)
    }

    /// Same as [`Linear::new`] with an explicit RNG seed.
    pub fn with_seed(
        in_dim: usize,
        out_dim: usize,
        bias: bool,
        activation: Option<Activation>,
        seed: u64,
    ) -> Result<Self, ScalarustError> {
        let weight = Matrix::zeros(out_dim, in_dim)?;
        Initializer::He.init(&weight, seed)?;
        let bias = if bias {
            Some(Vector::zeros(out_dim)?)
        } else {
            None
        };
        debug!(
            "Linear: {} -> {} (bias={}, activation={:?}, seed={})",
            in_dim,
            out_dim,
            bias.is_some(),
            activation,
            seed
        );
        Ok(Linear {
            weight,
            bias,
            activation,
            in_dim,
            out_dim,
        })
    }

    pub fn weight(&self) -> &Matrix {
        &self.weight
    }

    pub fn bias(&self) -> Option<&Vector> {
        self.bias.as_ref()
    }

    pub fn in_dim(&self) -> usize {
        self.in_dim
    }

    pub fn out_dim(&self) -> usize {
        self.out_dim
    }
}

impl Module for Linear {
    fn forward(&self, input: &Vector) -> Result<Vector, ScalarustError> {
        let mut out = self.weight.matvec(input)?;
        if let Some(b) = &self.bias {
            out = out.add(b)?;
        }
        Ok(match self.activation {
            Some(act) => act.apply_vector(&out),
            None => out,
        })
    }

    /// `Map{"W": rows, "b": elements}`; `"b"` is absent without bias.
    fn parameters(&self) -> ParamTree {
        let mut entries = vec![("W", ParamTree::from(&self.weight))];
        if let Some(b) = &self.bias {
            entries.push(("b", ParamTree::from(b)));
        }
        ParamTree::map(entries)
    }
}

#[cfg(test)]
#[path = "linear_test.rs"]
mod tests;
