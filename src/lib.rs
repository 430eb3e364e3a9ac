//! Bit-vector genetic algorithms with splittable, seedable randomness.
//!
//! Provides the components needed to run evolutionary search over
//! fixed-length binary strings:
//!
//! - **Randomness** ([`random`]): a splittable ChaCha-based generator and a
//!   process-wide [`Configurator`](random::Configurator) that hands every
//!   newly constructed component its own child stream. Seeding the
//!   configurator makes whole programs replayable.
//! - **Bit vectors** ([`bits`]): the [`BitVector`](bits::BitVector)
//!   representation, a random initializer, bit-flip mutation, and the
//!   common crossover operators (single-point, two-point, k-point, uniform).
//! - **Problems** ([`problems`]): integer cost functions, including the
//!   classic [`OneMax`](problems::OneMax) benchmark.
//! - **Genetic Algorithms** ([`ga`]): fitness transformations, selection
//!   operators, and a [`GeneticAlgorithm`](ga::GeneticAlgorithm) engine with
//!   simple, configurable, and mutation-only variants.
//! - **Demo helpers** ([`demo`]): banner and table formatting shared by the
//!   binaries under `src/bin/`.
//!
//! # Example
//!
//! ```
//! use u_evo::ga::{GeneticAlgorithm, InverseCostFitnessFunction};
//! use u_evo::problems::OneMax;
//!
//! let fitness = InverseCostFitnessFunction::new(OneMax)?;
//! let mut ga = GeneticAlgorithm::simple(50, 32, fitness, 1.0 / 32.0, 0.7)?;
//! let best = ga.optimize(50);
//! assert!(best.cost() <= 32);
//! # Ok::<(), u_evo::EvoError>(())
//! ```

pub mod bits;
pub mod demo;
mod error;
pub mod ga;
pub mod problems;
pub mod random;

pub use error::{EvoError, Result};
