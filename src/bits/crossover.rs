//! Crossover operators for bit vectors.
//!
//! All operators recombine two equal-length parents **in place**: on return
//! the two arguments hold the children.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - De Jong & Spears (1992), "A formal analysis of the role of multi-point
//!   crossover in genetic algorithms"

use super::vector::BitVector;
use crate::error::{EvoError, Result};
use rand::seq::index;
use rand::Rng;

/// Crossover operator for [`BitVector`] pairs.
///
/// # Examples
///
/// ```
/// use u_evo::bits::{BitVector, Crossover};
/// use u_evo::random::create_rng;
///
/// let mut a = BitVector::new(16);
/// let mut b = BitVector::from_bools(&[true; 16]);
/// Crossover::TwoPoint.cross(&mut a, &mut b, &mut create_rng(1));
/// assert_eq!(a.count_ones() + b.count_ones(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Pick one cut point; exchange everything after it.
    SinglePoint,

    /// Pick two distinct cut points; exchange the segment between them.
    TwoPoint,

    /// Pick `k` distinct cut points; exchange every other segment.
    ///
    /// `KPoint(1)` and `KPoint(2)` behave like [`SinglePoint`](Self::SinglePoint)
    /// and [`TwoPoint`](Self::TwoPoint).
    KPoint(usize),

    /// Exchange each bit independently with probability `p`.
    ///
    /// `p = 0.5` is the classic uniform crossover.
    Uniform(f64),
}

impl Default for Crossover {
    fn default() -> Self {
        Crossover::SinglePoint
    }
}

impl Crossover {
    /// Checks operator parameters.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Crossover::KPoint(0) => Err(EvoError::InvalidOperator(
                "k-point crossover needs k >= 1".into(),
            )),
            Crossover::Uniform(p) if !(p > 0.0 && p < 1.0) => Err(EvoError::RateOutOfRange {
                name: "uniform crossover probability",
                range: "(0, 1)",
                value: p,
            }),
            _ => Ok(()),
        }
    }

    /// Recombines `c1` and `c2` in place.
    ///
    /// Vectors shorter than 2 bits are left unchanged.
    ///
    /// # Panics
    /// Panics if the vectors have different lengths, or if a
    /// [`Uniform`](Crossover::Uniform) probability lies outside `[0, 1]`.
    /// Call [`validate`](Self::validate) first to rule out the latter.
    pub fn cross<R: Rng + ?Sized>(&self, c1: &mut BitVector, c2: &mut BitVector, rng: &mut R) {
        assert_eq!(c1.len(), c2.len(), "parents must have equal length");
        let n = c1.len();
        if n < 2 {
            return;
        }

        match *self {
            Crossover::SinglePoint => {
                let point = rng.random_range(1..n);
                c1.exchange(c2, point, n);
            }
            Crossover::TwoPoint => k_point(c1, c2, 2, rng),
            Crossover::KPoint(k) => k_point(c1, c2, k.max(1), rng),
            Crossover::Uniform(p) => {
                for i in 0..n {
                    if rng.random_bool(p) {
                        c1.exchange_bit(c2, i);
                    }
                }
            }
        }
    }
}

/// Exchanges alternating segments delimited by `k` distinct cut points drawn
/// from `1..n`. Segments after an odd number of cuts are exchanged.
fn k_point<R: Rng + ?Sized>(c1: &mut BitVector, c2: &mut BitVector, k: usize, rng: &mut R) {
    let n = c1.len();
    let k = k.min(n - 1);
    let mut cuts: Vec<usize> = index::sample(rng, n - 1, k)
        .into_iter()
        .map(|c| c + 1)
        .collect();
    cuts.sort_unstable();
    cuts.push(n);

    for pair in cuts.chunks(2) {
        let end = pair.get(1).copied().unwrap_or(n);
        c1.exchange(c2, pair[0], end);
    }
}
