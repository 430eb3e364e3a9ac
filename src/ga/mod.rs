//! Genetic Algorithm framework for bit-vector candidates.
//!
//! Problems are defined as integer cost minimization
//! ([`IntegerCostProblem`](crate::problems::IntegerCostProblem)); a
//! [`FitnessFunction`] turns cost into fitness to be maximized, and a
//! [`GeneticAlgorithm`] evolves a population of
//! [`BitVector`](crate::bits::BitVector)s against it.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, bit length, operators)
//! - [`GeneticAlgorithm`]: Executes the evolutionary loop
//! - [`SolutionCostPair`]: Best solution found with its cost
//! - [`Selection`]: Fitness-proportional, SUS, tournament, and rank selection
//! - [`InverseCostFitnessFunction`], [`NegativeCostFitnessFunction`]:
//!   cost-to-fitness transformations
//!
//! # Variants
//!
//! - [`GeneticAlgorithm::simple`]: single-point crossover, bit-flip mutation,
//!   fitness-proportional selection
//! - [`GeneticAlgorithm::with_operators`]: any crossover and selection
//! - [`GeneticAlgorithm::mutation_only`]: no crossover
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
mod fitness;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use fitness::{FitnessFunction, InverseCostFitnessFunction, NegativeCostFitnessFunction};
pub use runner::GeneticAlgorithm;
pub use selection::Selection;
pub use types::{GenerationStats, SolutionCostPair};
