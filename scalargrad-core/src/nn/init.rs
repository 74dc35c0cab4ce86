use crate::error::ScalarGradError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal, Uniform};

/// Source of initial values for trainable weights.
///
/// Any `FnMut() -> f64` closure is an initializer, so callers can plug in
/// their own policy without a wrapper type.
pub trait Initializer {
    /// Returns the next initial weight.
    fn sample(&mut self) -> f64;
}

impl<F> Initializer for F
where
    F: FnMut() -> f64,
{
    fn sample(&mut self) -> f64 {
        self()
    }
}

/// Draws weights from a `rand_distr` distribution with its own RNG.
#[derive(Debug, Clone)]
pub struct DistributionInit<D> {
    distribution: D,
    rng: StdRng,
}

impl<D: Distribution<f64>> DistributionInit<D> {
    pub fn new(distribution: D, rng: StdRng) -> Self {
        DistributionInit { distribution, rng }
    }
}

impl<D: Distribution<f64>> Initializer for DistributionInit<D> {
    fn sample(&mut self) -> f64 {
        self.distribution.sample(&mut self.rng)
    }
}

/// Weight initialization policy for the parameter containers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Init {
    /// Uniform over `[low, high)`.
    Uniform { low: f64, high: f64 },
    /// Gaussian with the given mean and standard deviation.
    Normal { mean: f64, std_dev: f64 },
    /// Every weight gets the same value.
    Constant(f64),
}

impl Default for Init {
    /// Uniform over `[-1, 1)`.
    fn default() -> Self {
        Init::Uniform {
            low: -1.0,
            high: 1.0,
        }
    }
}

impl Init {
    /// Builds the initializer described by `self`.
    ///
    /// With `Some(seed)` the generator is a `StdRng` seeded from it, so the
    /// same seed always yields the same weights. With `None` it is seeded from
    /// system entropy.
    ///
    /// # Errors
    /// `ScalarGradError::InvalidInitializer` for an empty or non-finite uniform
    /// range (span included), or a non-finite mean or a negative or non-finite
    /// standard deviation.
    pub fn build(self, seed: Option<u64>) -> Result<Box<dyn Initializer>, ScalarGradError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        match self {
            Init::Uniform { low, high } => {
                let span = high - low;
                if !(low.is_finite() && high.is_finite() && span.is_finite() && low < high) {
                    return Err(ScalarGradError::InvalidInitializer(format!(
                        "uniform range [{}, {}) is empty or not finite",
                        low, high
                    )));
                }
                Ok(Box::new(DistributionInit::new(Uniform::new(low, high), rng)))
            }
            Init::Normal { mean, std_dev } => {
                if !(mean.is_finite() && std_dev.is_finite() && std_dev >= 0.0) {
                    return Err(ScalarGradError::InvalidInitializer(format!(
                        "normal mean {} / std-dev {} must be finite, std-dev non-negative",
                        mean, std_dev
                    )));
                }
                let normal = Normal::new(mean, std_dev)
                    .map_err(|e| ScalarGradError::InvalidInitializer(e.to_string()))?;
                Ok(Box::new(DistributionInit::new(normal, rng)))
            }
            Init::Constant(value) => Ok(Box::new(move || value)),
        }
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
