//! Result types reported by the GA.

/// A solution together with its cost.
///
/// Pairs are ordered by cost first, so the minimum of a collection is the
/// cheapest solution. Equal costs fall back to comparing the solutions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionCostPair<T> {
    cost: i64,
    solution: T,
    known_optimal: bool,
}

impl<T> SolutionCostPair<T> {
    pub fn new(solution: T, cost: i64, known_optimal: bool) -> Self {
        Self {
            solution,
            cost,
            known_optimal,
        }
    }

    pub fn solution(&self) -> &T {
        &self.solution
    }

    pub fn into_solution(self) -> T {
        self.solution
    }

    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Whether the cost equals the problem's known minimum.
    pub fn is_known_optimal(&self) -> bool {
        self.known_optimal
    }
}

/// Per-generation statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Sequence number of this record, counted across all runs of the same
    /// GA. The initial population of each run gets its own number, so
    /// numbers in [`history`](crate::ga::GeneticAlgorithm::history) are
    /// unique and increase by one.
    pub generation: usize,

    /// Lowest cost present in the population.
    pub best_cost: i64,

    /// Mean fitness of the population.
    pub mean_fitness: f64,
}
