//! Bit-flip mutation.

use super::vector::BitVector;
use crate::error::{EvoError, Result};
use crate::random::{Configurator, SplittableRng};
use rand::Rng;

/// Flips each bit independently with probability `m`.
///
/// The expected number of flipped bits is `m * len`. A common choice is
/// `m = 1 / len`, i.e. one flip per candidate on average.
///
/// ```
/// use u_evo::bits::{BitFlipMutation, BitVector};
/// use u_evo::random::create_rng;
///
/// let mut mutation = BitFlipMutation::with_rng(0.25, create_rng(42)).unwrap();
/// let mut v = BitVector::new(64);
/// mutation.mutate(&mut v);
/// assert!(v.count_ones() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct BitFlipMutation {
    rate: f64,
    rng: SplittableRng,
}

impl BitFlipMutation {
    /// Creates a mutation operator using a generator split from the
    /// process-wide [`Configurator`].
    ///
    /// # Errors
    /// Returns [`EvoError::RateOutOfRange`] unless `0 < rate < 1`.
    pub fn new(rate: f64) -> Result<Self> {
        Self::with_rng(rate, Configurator::split())
    }

    /// Creates a mutation operator with an explicit generator.
    pub fn with_rng(rate: f64, rng: SplittableRng) -> Result<Self> {
        if !(rate > 0.0 && rate < 1.0) {
            return Err(EvoError::RateOutOfRange {
                name: "mutation rate",
                range: "(0, 1)",
                value: rate,
            });
        }
        Ok(Self { rate, rng })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Mutates `candidate` in place.
    pub fn mutate(&mut self, candidate: &mut BitVector) {
        for i in 0..candidate.len() {
            if self.rng.random_bool(self.rate) {
                candidate.flip(i);
            }
        }
    }

    /// Returns an identically parameterized operator with a child generator.
    pub fn split(&mut self) -> Self {
        Self {
            rate: self.rate,
            rng: self.rng.split(),
        }
    }
}
