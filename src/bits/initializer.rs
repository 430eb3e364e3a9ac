//! Random bit vector creation.

use super::vector::BitVector;
use crate::random::{Configurator, SplittableRng};

/// Creates uniformly random [`BitVector`]s of a fixed length.
///
/// Owns its generator: [`new`](Self::new) splits one off the process-wide
/// [`Configurator`], [`with_rng`](Self::with_rng) takes an explicit one.
#[derive(Debug, Clone)]
pub struct BitVectorInitializer {
    bit_length: usize,
    rng: SplittableRng,
}

impl BitVectorInitializer {
    pub fn new(bit_length: usize) -> Self {
        Self::with_rng(bit_length, Configurator::split())
    }

    pub fn with_rng(bit_length: usize, rng: SplittableRng) -> Self {
        Self { bit_length, rng }
    }

    pub fn bit_length(&self) -> usize {
        self.bit_length
    }

    /// Creates a new random candidate solution.
    pub fn create_candidate_solution(&mut self) -> BitVector {
        BitVector::random(self.bit_length, &mut self.rng)
    }

    /// Returns an identically parameterized initializer with a child generator.
    pub fn split(&mut self) -> Self {
        Self {
            bit_length: self.bit_length,
            rng: self.rng.split(),
        }
    }
}
