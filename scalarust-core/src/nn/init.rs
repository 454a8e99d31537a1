use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::error::ScalarustError;
use crate::linalg::Matrix;

/// Seed used when a layer is built without an explicit one.
pub const DEFAULT_SEED: u64 = 42;

/// Gaussian weight initialisation schemes.
///
/// For a weight matrix of shape `(out, in)`, `fan_in = in` and `fan_out = out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initializer {
    /// σ = √(1 / fan_in)
    LeCun,
    /// σ = √(2 / (fan_in + fan_out))
    Xavier,
    /// σ = √(2 / fan_in)
    He,
}

impl Initializer {
    pub fn std_dev(&self, fan_in: usize, fan_out: usize) -> f64 {
        let fan_in = fan_in as f64;
        let fan_out = fan_out as f64;
        match self {
            Initializer::LeCun => (1.0 / fan_in).sqrt(),
            Initializer::Xavier => (2.0 / (fan_in + fan_out)).sqrt(),
            Initializer::He => (2.0 / fan_in).sqrt(),
        }
    }

    /// Overwrites every leaf value of `weights` with a draw from
    /// `N(0, σ²)`, using a `StdRng` seeded with `seed`.
    pub fn init(&self, weights: &Matrix, seed: u64) -> Result<(), ScalarustError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.init_with_rng(weights, &mut rng)
    }

    /// Same as [`Initializer::init`] with a caller-provided generator.
    ///
    /// # Errors
    /// `ConfigurationError` if the resulting σ is not a valid standard
    /// deviation.
    pub fn init_with_rng<R: Rng + ?Sized>(
        &self,
        weights: &Matrix,
        rng: &mut R,
    ) -> Result<(), ScalarustError> {
        let (fan_out, fan_in) = weights.shape();
        let sigma = self.std_dev(fan_in, fan_out);
        let normal = Normal::new(0.0, sigma).map_err(|e| {
            ScalarustError::ConfigurationError(format!(
                "invalid {:?} standard deviation {}: {}",
                self, sigma, e
            ))
        })?;
        for node in weights.iter() {
            node.set_value(normal.sample(rng));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
