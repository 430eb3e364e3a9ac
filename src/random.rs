//! Splittable pseudorandom generators and process-wide configuration.
//!
//! Every randomized component (initializers, mutation operators, genetic
//! algorithms) owns a private [`SplittableRng`]. Components built with their
//! plain `new` constructors obtain that generator by splitting the
//! process-wide root held by [`Configurator`]. Seeding the root before any
//! component is built therefore makes the whole program replayable.
//!
//! Reconfiguring the root only affects components constructed afterwards.
//! Components that already exist keep the generator they were given.
//!
//! # Example
//!
//! ```
//! use rand::Rng;
//! use u_evo::random::SplittableRng;
//!
//! let mut a = SplittableRng::seed_from_u64(42);
//! let mut b = SplittableRng::seed_from_u64(42);
//! let (mut ca, mut cb) = (a.split(), b.split());
//! assert_eq!(ca.random::<u64>(), cb.random::<u64>());
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::{ChaCha12Rng, ChaCha20Rng, ChaCha8Rng};
use std::sync::{Mutex, PoisonError};

/// Stream cipher round count behind a [`SplittableRng`].
///
/// More rounds trade speed for a larger security margin. All variants are
/// fully determined by their seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RngAlgorithm {
    /// ChaCha with 8 rounds; the default.
    #[default]
    ChaCha8,
    /// ChaCha with 12 rounds.
    ChaCha12,
    /// ChaCha with 20 rounds.
    ChaCha20,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Core {
    ChaCha8(ChaCha8Rng),
    ChaCha12(ChaCha12Rng),
    ChaCha20(ChaCha20Rng),
}

impl Core {
    fn seed_from_u64(algorithm: RngAlgorithm, seed: u64) -> Self {
        match algorithm {
            RngAlgorithm::ChaCha8 => Core::ChaCha8(ChaCha8Rng::seed_from_u64(seed)),
            RngAlgorithm::ChaCha12 => Core::ChaCha12(ChaCha12Rng::seed_from_u64(seed)),
            RngAlgorithm::ChaCha20 => Core::ChaCha20(ChaCha20Rng::seed_from_u64(seed)),
        }
    }

    fn from_rng<R: RngCore>(algorithm: RngAlgorithm, rng: &mut R) -> Self {
        match algorithm {
            RngAlgorithm::ChaCha8 => Core::ChaCha8(ChaCha8Rng::from_rng(rng)),
            RngAlgorithm::ChaCha12 => Core::ChaCha12(ChaCha12Rng::from_rng(rng)),
            RngAlgorithm::ChaCha20 => Core::ChaCha20(ChaCha20Rng::from_rng(rng)),
        }
    }
}

/// A seedable generator that can derive independent child generators.
///
/// Backed by one of the ChaCha variants in [`RngAlgorithm`], ChaCha8 unless
/// chosen otherwise. [`split`](Self::split) seeds a child of the same
/// algorithm from the parent's output stream, so a parent and all of its
/// descendants are fully determined by the parent's algorithm and seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplittableRng(Core);

impl SplittableRng {
    /// Creates a default (ChaCha8) generator from a 64-bit seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::with_algorithm(RngAlgorithm::default(), seed)
    }

    /// Creates a generator of the chosen algorithm from a 64-bit seed.
    pub fn with_algorithm(algorithm: RngAlgorithm, seed: u64) -> Self {
        Self(Core::seed_from_u64(algorithm, seed))
    }

    /// Creates a default generator seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::from_entropy_with(RngAlgorithm::default())
    }

    /// Creates a generator of the chosen algorithm seeded from the
    /// thread-local entropy source.
    pub fn from_entropy_with(algorithm: RngAlgorithm) -> Self {
        Self(Core::from_rng(algorithm, &mut rand::rng()))
    }

    pub fn algorithm(&self) -> RngAlgorithm {
        match self.0 {
            Core::ChaCha8(_) => RngAlgorithm::ChaCha8,
            Core::ChaCha12(_) => RngAlgorithm::ChaCha12,
            Core::ChaCha20(_) => RngAlgorithm::ChaCha20,
        }
    }

    /// Derives a new generator of the same algorithm whose stream is
    /// independent of this one's subsequent output.
    pub fn split(&mut self) -> Self {
        let algorithm = self.algorithm();
        Self(Core::from_rng(algorithm, self))
    }
}

impl RngCore for SplittableRng {
    fn next_u32(&mut self) -> u32 {
        match &mut self.0 {
            Core::ChaCha8(r) => r.next_u32(),
            Core::ChaCha12(r) => r.next_u32(),
            Core::ChaCha20(r) => r.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match &mut self.0 {
            Core::ChaCha8(r) => r.next_u64(),
            Core::ChaCha12(r) => r.next_u64(),
            Core::ChaCha20(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        match &mut self.0 {
            Core::ChaCha8(r) => r.fill_bytes(dst),
            Core::ChaCha12(r) => r.fill_bytes(dst),
            Core::ChaCha20(r) => r.fill_bytes(dst),
        }
    }
}

/// Creates an explicitly seeded generator.
pub fn create_rng(seed: u64) -> SplittableRng {
    SplittableRng::seed_from_u64(seed)
}

static ROOT: Mutex<Option<SplittableRng>> = Mutex::new(None);

/// Process-wide source of generators for newly constructed components.
///
/// Call one of the `configure_*` methods once at program start, before
/// building any component, if runs must be replicable. Without
/// configuration the root is lazily seeded from entropy.
pub struct Configurator;

impl Configurator {
    /// Replaces the root generator with `rng`.
    ///
    /// Use this to choose the algorithm, optionally pre-seeded.
    pub fn configure_random_generator(rng: SplittableRng) {
        let algorithm = rng.algorithm();
        *lock_root() = Some(rng);
        tracing::info!(?algorithm, "root generator replaced");
    }

    /// Replaces the root generator with a default (ChaCha8) generator seeded
    /// by `seed`.
    ///
    /// This undoes any earlier algorithm choice made with
    /// [`configure_random_generator`](Self::configure_random_generator).
    pub fn configure_seed(seed: u64) {
        *lock_root() = Some(SplittableRng::seed_from_u64(seed));
        tracing::info!(seed, "root generator seeded");
    }

    /// Splits a child generator off the root for a new component.
    pub fn split() -> SplittableRng {
        lock_root()
            .get_or_insert_with(SplittableRng::from_entropy)
            .split()
    }
}

fn lock_root() -> std::sync::MutexGuard<'static, Option<SplittableRng>> {
    ROOT.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = create_rng(1);
        let mut b = create_rng(2);
        let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_split_is_deterministic() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        let mut ca = a.split();
        let mut cb = b.split();
        assert_eq!(ca.random::<u64>(), cb.random::<u64>());
        // parents stay in lockstep after splitting
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn test_split_children_are_distinct() {
        let mut root = create_rng(7);
        let mut c1 = root.split();
        let mut c2 = root.split();
        let xs: Vec<u32> = (0..8).map(|_| c1.next_u32()).collect();
        let ys: Vec<u32> = (0..8).map(|_| c2.next_u32()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_split_child_differs_from_parent() {
        let mut parent = create_rng(7);
        let mut child = parent.split();
        let xs: Vec<u32> = (0..8).map(|_| parent.next_u32()).collect();
        let ys: Vec<u32> = (0..8).map(|_| child.next_u32()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn test_algorithms_differ_for_same_seed() {
        let streams: Vec<Vec<u64>> = [
            RngAlgorithm::ChaCha8,
            RngAlgorithm::ChaCha12,
            RngAlgorithm::ChaCha20,
        ]
        .into_iter()
        .map(|alg| {
            let mut rng = SplittableRng::with_algorithm(alg, 42);
            assert_eq!(rng.algorithm(), alg);
            (0..4).map(|_| rng.next_u64()).collect()
        })
        .collect();
        assert_ne!(streams[0], streams[1]);
        assert_ne!(streams[1], streams[2]);
        assert_ne!(streams[0], streams[2]);
    }

    #[test]
    fn test_default_algorithm_is_chacha8() {
        assert_eq!(create_rng(1).algorithm(), RngAlgorithm::ChaCha8);
        assert_eq!(
            SplittableRng::seed_from_u64(9),
            SplittableRng::with_algorithm(RngAlgorithm::ChaCha8, 9)
        );
    }

    #[test]
    fn test_split_keeps_algorithm() {
        let mut root = SplittableRng::with_algorithm(RngAlgorithm::ChaCha20, 3);
        let mut child = root.split();
        assert_eq!(child.algorithm(), RngAlgorithm::ChaCha20);
        assert_eq!(child.split().algorithm(), RngAlgorithm::ChaCha20);
    }

    // The only unit test that touches the process-wide root.
    #[test]
    fn test_poisoned_root_is_recovered() {
        let poisoner = std::thread::spawn(|| {
            let _guard = ROOT.lock().unwrap_or_else(PoisonError::into_inner);
            panic!("poisoning the root lock");
        });
        assert!(poisoner.join().is_err());
        assert!(ROOT.is_poisoned());

        Configurator::configure_random_generator(SplittableRng::with_algorithm(
            RngAlgorithm::ChaCha12,
            1,
        ));
        assert_eq!(Configurator::split().algorithm(), RngAlgorithm::ChaCha12);

        Configurator::configure_seed(42);
        let mut a = Configurator::split();
        Configurator::configure_seed(42);
        let mut b = Configurator::split();
        assert_eq!(a.algorithm(), RngAlgorithm::ChaCha8);
        assert_eq!(a.next_u64(), b.next_u64());
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_bytes() {
        let mut a = create_rng(3);
        let mut b = create_rng(3);
        let mut x = [0u8; 37];
        let mut y = [0u8; 37];
        a.fill_bytes(&mut x);
        b.fill_bytes(&mut y);
        assert_eq!(x, y);
        assert!(x.iter().any(|&v| v != 0));
    }
}
