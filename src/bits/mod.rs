//! Bit-vector representation and its evolutionary operators.
//!
//! # Key Types
//!
//! - [`BitVector`]: fixed-length bit string packed into 32-bit words
//! - [`BitVectorInitializer`]: creates uniformly random bit vectors
//! - [`BitFlipMutation`]: independent per-bit flip with rate `m`
//! - [`Crossover`]: single-point, two-point, k-point, and uniform crossover
//!
//! Initializers and mutation operators own their generator; see
//! [`crate::random`] for how those generators are seeded.

mod crossover;
mod initializer;
mod mutation;
mod vector;

pub use crossover::Crossover;
pub use initializer::BitVectorInitializer;
pub use mutation::BitFlipMutation;
pub use vector::BitVector;
