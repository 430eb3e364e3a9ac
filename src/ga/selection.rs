//! Selection strategies for the GA.
//!
//! Selection determines which population members become parents of the
//! next generation. Different strategies provide different selection
//! pressure.
//!
//! # References
//!
//! - Baker (1987), "Reducing Bias and Inefficiency in the Selection Algorithm"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::error::{EvoError, Result};
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies **maximize** fitness (higher = better).
///
/// # Examples
///
/// ```
/// use u_evo::ga::Selection;
/// use u_evo::random::create_rng;
///
/// let fitness = [0.1, 0.5, 0.9, 0.2];
/// let parents = Selection::Tournament(4).select(&fitness, 10, &mut create_rng(1));
/// assert_eq!(parents.len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportional (weighted roulette wheel) selection.
    ///
    /// Each pick is an independent spin; selection probability is
    /// proportional to fitness. Requires strictly positive fitness.
    ///
    /// # Complexity
    /// O(n) to build the wheel, O(log n) per pick
    FitnessProportional,

    /// Stochastic universal sampling (Baker, 1987).
    ///
    /// One spin of a wheel with `count` equally spaced pointers. Same
    /// expected counts as [`FitnessProportional`](Self::FitnessProportional)
    /// with minimal spread. Requires strictly positive fitness.
    ///
    /// # Complexity
    /// O(n + count) per generation
    StochasticUniversalSampling,

    /// Tournament selection: pick `k` members at random, keep the fittest.
    ///
    /// Higher `k` = stronger selection pressure. Works with any fitness
    /// sign.
    ///
    /// # Complexity
    /// O(k) per pick
    Tournament(usize),

    /// Linear rank selection.
    ///
    /// The worst member has weight 1, the best weight n. Avoids the
    /// scaling problems of fitness-proportional selection and works with
    /// any fitness sign.
    ///
    /// # Complexity
    /// O(n log n) per generation (sort), O(log n) per pick
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(2)
    }
}

impl Selection {
    /// Whether the strategy requires strictly positive fitness values.
    pub fn requires_positive_fitness(&self) -> bool {
        matches!(
            self,
            Selection::FitnessProportional | Selection::StochasticUniversalSampling
        )
    }

    /// Checks operator parameters.
    pub fn validate(&self) -> Result<()> {
        match self {
            Selection::Tournament(0) => Err(EvoError::InvalidOperator(
                "tournament size must be at least 1".into(),
            )),
            _ => Ok(()),
        }
    }

    /// Selects `count` parent indices from a population with the given
    /// fitness values.
    ///
    /// # Panics
    /// Panics if `fitnesses` is empty.
    pub fn select<R: Rng + ?Sized>(
        &self,
        fitnesses: &[f64],
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        assert!(
            !fitnesses.is_empty(),
            "cannot select from empty population"
        );

        match *self {
            Selection::FitnessProportional => {
                let wheel = cumulative(fitnesses.iter().copied());
                (0..count).map(|_| spin(&wheel, rng)).collect()
            }
            Selection::StochasticUniversalSampling => sus(fitnesses, count, rng),
            Selection::Tournament(k) => (0..count)
                .map(|_| tournament(fitnesses, k, rng))
                .collect(),
            Selection::Rank => rank(fitnesses, count, rng),
        }
    }
}

/// Running sums of `weights`.
fn cumulative(weights: impl Iterator<Item = f64>) -> Vec<f64> {
    weights
        .scan(0.0, |acc, w| {
            *acc += w;
            Some(*acc)
        })
        .collect()
}

/// Usable total of a cumulative wheel, or `None` if the weights do not form
/// a proper distribution (non-positive or non-finite total).
fn wheel_total(wheel: &[f64]) -> Option<f64> {
    wheel
        .last()
        .copied()
        .filter(|t| *t > 0.0 && t.is_finite())
}

/// Index of the slot containing `point` on a cumulative wheel.
fn slot(wheel: &[f64], point: f64) -> usize {
    wheel.partition_point(|&c| c <= point).min(wheel.len() - 1)
}

/// One roulette spin; falls back to a uniform pick on a degenerate wheel.
fn spin<R: Rng + ?Sized>(wheel: &[f64], rng: &mut R) -> usize {
    match wheel_total(wheel) {
        Some(total) => slot(wheel, rng.random_range(0.0..total)),
        None => rng.random_range(0..wheel.len()),
    }
}

/// Stochastic universal sampling with `count` equally spaced pointers.
fn sus<R: Rng + ?Sized>(fitnesses: &[f64], count: usize, rng: &mut R) -> Vec<usize> {
    if count == 0 {
        return Vec::new();
    }
    let wheel = cumulative(fitnesses.iter().copied());
    // a tiny total can still underflow to a zero pointer spacing
    let step = wheel_total(&wheel).map_or(0.0, |total| total / count as f64);
    if !(step > 0.0) {
        return (0..count)
            .map(|_| rng.random_range(0..fitnesses.len()))
            .collect();
    }

    let start = rng.random_range(0.0..step);
    let mut selected = Vec::with_capacity(count);
    let mut i = 0;
    for p in 0..count {
        let pointer = start + p as f64 * step;
        while i < wheel.len() - 1 && wheel[i] <= pointer {
            i += 1;
        }
        selected.push(i);
    }
    selected
}

/// Tournament selection: pick k random members, return the fittest.
fn tournament<R: Rng + ?Sized>(fitnesses: &[f64], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = fitnesses.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if fitnesses[idx] > fitnesses[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Linear rank selection: the i-th worst member gets weight i + 1.
fn rank<R: Rng + ?Sized>(fitnesses: &[f64], count: usize, rng: &mut R) -> Vec<usize> {
    let n = fitnesses.len();
    if n == 1 {
        return vec![0; count];
    }

    // worst first
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        fitnesses[a]
            .partial_cmp(&fitnesses[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let wheel = cumulative((1..=n).map(|r| r as f64));
    (0..count).map(|_| order[spin(&wheel, rng)]).collect()
}
