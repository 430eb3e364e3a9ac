//! Fitness functions: transformations from problem cost to fitness.
//!
//! Problems minimize cost; genetic algorithms maximize fitness. The types
//! here convert between the two so any [`IntegerCostProblem`] can be plugged
//! into a [`GeneticAlgorithm`](super::GeneticAlgorithm).

use crate::error::{EvoError, Result};
use crate::problems::IntegerCostProblem;

/// Maps a candidate solution to a fitness value to be **maximized**.
pub trait FitnessFunction: Send + Sync {
    /// The underlying cost problem.
    type Problem: IntegerCostProblem;

    /// Fitness of `candidate`; higher is better.
    fn fitness(&self, candidate: &<Self::Problem as IntegerCostProblem>::Candidate) -> f64;

    /// Returns the problem whose cost this function transforms.
    fn problem(&self) -> &Self::Problem;
}

/// Fitness as an inverse of cost: `a / (a + cost - min_cost)`.
///
/// Fitness is always in `(0, 1]`, reaching 1 exactly at the minimum cost.
/// Strict positivity is what [`Selection::FitnessProportional`] and
/// [`Selection::StochasticUniversalSampling`] require.
///
/// [`Selection::FitnessProportional`]: super::Selection::FitnessProportional
/// [`Selection::StochasticUniversalSampling`]: super::Selection::StochasticUniversalSampling
#[derive(Debug, Clone)]
pub struct InverseCostFitnessFunction<P> {
    problem: P,
    constant: f64,
}

impl<P: IntegerCostProblem> InverseCostFitnessFunction<P> {
    /// Creates the transformation with `a = 1`.
    ///
    /// # Errors
    /// Returns [`EvoError::InvalidConfig`] if the problem has no known
    /// minimum cost.
    pub fn new(problem: P) -> Result<Self> {
        Self::with_constant(problem, 1.0)
    }

    /// Creates the transformation with a custom positive constant `a`.
    pub fn with_constant(problem: P, constant: f64) -> Result<Self> {
        if !(constant > 0.0 && constant.is_finite()) {
            return Err(EvoError::InvalidConfig(format!(
                "inverse cost constant must be positive, got {constant}"
            )));
        }
        if problem.min_cost() == i64::MIN {
            return Err(EvoError::InvalidConfig(
                "inverse cost fitness needs a problem with a known minimum cost".into(),
            ));
        }
        Ok(Self { problem, constant })
    }
}

impl<P: IntegerCostProblem> FitnessFunction for InverseCostFitnessFunction<P> {
    type Problem = P;

    fn fitness(&self, candidate: &P::Candidate) -> f64 {
        let excess = self
            .problem
            .cost(candidate)
            .saturating_sub(self.problem.min_cost());
        self.constant / (self.constant + excess as f64)
    }

    fn problem(&self) -> &P {
        &self.problem
    }
}

/// Fitness as negated cost.
///
/// Fitness may be zero or negative, so pair it only with
/// [`Selection::Tournament`](super::Selection::Tournament) or
/// [`Selection::Rank`](super::Selection::Rank).
#[derive(Debug, Clone)]
pub struct NegativeCostFitnessFunction<P> {
    problem: P,
}

impl<P: IntegerCostProblem> NegativeCostFitnessFunction<P> {
    pub fn new(problem: P) -> Self {
        Self { problem }
    }
}

impl<P: IntegerCostProblem> FitnessFunction for NegativeCostFitnessFunction<P> {
    type Problem = P;

    fn fitness(&self, candidate: &P::Candidate) -> f64 {
        -(self.problem.cost(candidate) as f64)
    }

    fn problem(&self) -> &P {
        &self.problem
    }
}
