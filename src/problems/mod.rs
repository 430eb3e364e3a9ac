//! Optimization problems expressed as integer cost functions.
//!
//! Problems are always stated as **minimization** of a cost. Evolutionary
//! algorithms, which maximize fitness, bridge the gap through a
//! [`FitnessFunction`](crate::ga::FitnessFunction).

mod onemax;

pub use onemax::OneMax;

/// A problem whose candidate solutions have an integer cost to be minimized.
pub trait IntegerCostProblem: Send + Sync {
    /// The candidate solution representation.
    type Candidate;

    /// Cost of `candidate`; lower is better.
    fn cost(&self, candidate: &Self::Candidate) -> i64;

    /// The natural objective value of `candidate`.
    ///
    /// For minimization problems this equals [`cost`](Self::cost). For
    /// problems that are naturally maximized it is the quantity being
    /// maximized.
    fn value(&self, candidate: &Self::Candidate) -> i64;

    /// Lower bound on the cost, if known. Defaults to `i64::MIN`.
    fn min_cost(&self) -> i64 {
        i64::MIN
    }

    /// Whether `cost` is the known minimum.
    fn is_minimum_cost(&self, cost: i64) -> bool {
        cost == self.min_cost()
    }
}
