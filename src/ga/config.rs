//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::bits::Crossover;
use crate::error::{EvoError, Result};

/// Configuration for a bit-vector Genetic Algorithm.
///
/// Controls population size, bit length, operator rates, selection
/// strategy, elitism, and parallelism. The number of generations is not
/// part of the configuration; it is passed to
/// [`GeneticAlgorithm::optimize`](super::GeneticAlgorithm::optimize).
///
/// # Defaults
///
/// ```
/// use u_evo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.bit_length, 100);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evo::bits::Crossover;
/// use u_evo::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_bit_length(64)
///     .with_crossover(Crossover::Uniform(0.5))
///     .with_selection(Selection::Tournament(4))
///     .with_elite_count(2)
///     .with_mutation_rate(1.0 / 64.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of members in the population.
    pub population_size: usize,

    /// Length of every candidate bit vector.
    pub bit_length: usize,

    /// Per-bit flip probability of the bit-flip mutation, in `(0, 1)`.
    ///
    /// `1 / bit_length` flips one bit per candidate on average.
    pub mutation_rate: f64,

    /// Crossover operator, or `None` for a mutation-only GA.
    pub crossover: Option<Crossover>,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// Ignored when `crossover` is `None`.
    pub crossover_rate: f64,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Number of best members copied unchanged into the next generation.
    pub elite_count: usize,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only has an effect when the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` splits generators off the process-wide
    /// [`Configurator`](crate::random::Configurator).
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            bit_length: 100,
            mutation_rate: 0.01,
            crossover: Some(Crossover::SinglePoint),
            crossover_rate: 0.7,
            selection: Selection::FitnessProportional,
            elite_count: 0,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// The simple GA: single-point crossover, bit-flip mutation, and
    /// fitness-proportional selection.
    pub fn simple(
        population_size: usize,
        bit_length: usize,
        mutation_rate: f64,
        crossover_rate: f64,
    ) -> Self {
        Self {
            population_size,
            bit_length,
            mutation_rate,
            crossover: Some(Crossover::SinglePoint),
            crossover_rate,
            selection: Selection::FitnessProportional,
            ..Self::default()
        }
    }

    /// A GA that evolves by mutation and selection alone.
    pub fn mutation_only(
        population_size: usize,
        bit_length: usize,
        mutation_rate: f64,
        selection: Selection,
    ) -> Self {
        Self {
            population_size,
            bit_length,
            mutation_rate,
            crossover: None,
            crossover_rate: 0.0,
            selection,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the bit length of candidate solutions.
    pub fn with_bit_length(mut self, n: usize) -> Self {
        self.bit_length = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = Some(crossover);
        self
    }

    /// Removes crossover, making the GA mutation-only.
    pub fn without_crossover(mut self) -> Self {
        self.crossover = None;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for tournament selection of size `k`.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(EvoError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.bit_length == 0 {
            return Err(EvoError::InvalidLength(self.bit_length));
        }
        if !(self.mutation_rate > 0.0 && self.mutation_rate < 1.0) {
            return Err(EvoError::RateOutOfRange {
                name: "mutation rate",
                range: "(0, 1)",
                value: self.mutation_rate,
            });
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(EvoError::RateOutOfRange {
                name: "crossover rate",
                range: "[0, 1]",
                value: self.crossover_rate,
            });
        }
        if self.elite_count >= self.population_size {
            return Err(EvoError::InvalidConfig(
                "elite_count too high: elites fill entire population".into(),
            ));
        }
        if let Some(crossover) = &self.crossover {
            crossover.validate()?;
        }
        self.selection.validate()
    }
}
