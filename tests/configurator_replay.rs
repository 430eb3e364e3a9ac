//! Replay determinism through the process-wide configurator.
//!
//! Every test here reconfigures the shared root generator, so they hold
//! `ROOT_GUARD` to keep their construct-and-run sequences from interleaving.

use std::sync::Mutex;
use u_evo::bits::{BitFlipMutation, BitVectorInitializer};
use u_evo::demo::{replay_row, replay_sequence};
use u_evo::ga::{GeneticAlgorithm, InverseCostFitnessFunction};
use u_evo::problems::OneMax;
use u_evo::random::{Configurator, RngAlgorithm, SplittableRng};
use u_evo::EvoError;

static ROOT_GUARD: Mutex<()> = Mutex::new(());

fn guard() -> std::sync::MutexGuard<'static, ()> {
    ROOT_GUARD.lock().unwrap_or_else(|e| e.into_inner())
}

#[test]
fn same_seed_replays_initializer_and_mutation() {
    let _g = guard();

    Configurator::configure_seed(42);
    let first = replay_sequence(32, 0.25, 10).unwrap();
    Configurator::configure_seed(42);
    let second = replay_sequence(32, 0.25, 10).unwrap();

    assert_eq!(first.len(), 10);
    assert_eq!(first, second);
    for (a, b) in first.iter().zip(&second) {
        assert!(replay_row(*a, *b).ends_with("same as expected"));
    }
    // a 0.25 mutation rate on 32 bits changes the value almost every step
    let changes = first.windows(2).filter(|w| w[0] != w[1]).count();
    assert!(changes >= 7, "only {changes} of 9 mutations changed the value");
}

#[test]
fn different_seeds_diverge() {
    let _g = guard();

    Configurator::configure_seed(1);
    let first = replay_sequence(32, 0.25, 10).unwrap();
    Configurator::configure_seed(2);
    let second = replay_sequence(32, 0.25, 10).unwrap();

    assert_ne!(first, second);
}

#[test]
fn configuring_a_seeded_generator_replays_like_seed() {
    let _g = guard();

    Configurator::configure_random_generator(SplittableRng::seed_from_u64(100));
    let first = replay_sequence(64, 0.1, 5).unwrap();
    Configurator::configure_random_generator(SplittableRng::seed_from_u64(100));
    let second = replay_sequence(64, 0.1, 5).unwrap();

    assert_eq!(first, second);
}

#[test]
fn reseeding_undoes_custom_generator() {
    let _g = guard();

    Configurator::configure_random_generator(SplittableRng::seed_from_u64(7));
    Configurator::configure_seed(42);
    let after_override = replay_sequence(32, 0.25, 6).unwrap();

    Configurator::configure_seed(42);
    let plain = replay_sequence(32, 0.25, 6).unwrap();

    assert_eq!(after_override, plain);
}

#[test]
fn reseeding_undoes_algorithm_choice() {
    let _g = guard();

    Configurator::configure_random_generator(SplittableRng::from_entropy_with(
        RngAlgorithm::ChaCha20,
    ));
    assert_eq!(Configurator::split().algorithm(), RngAlgorithm::ChaCha20);

    Configurator::configure_seed(42);
    assert_eq!(Configurator::split().algorithm(), RngAlgorithm::ChaCha8);
}

#[test]
fn chosen_algorithm_replays_and_differs_from_default() {
    let _g = guard();

    Configurator::configure_random_generator(SplittableRng::with_algorithm(
        RngAlgorithm::ChaCha12,
        100,
    ));
    let first = replay_sequence(64, 0.1, 5).unwrap();
    Configurator::configure_random_generator(SplittableRng::with_algorithm(
        RngAlgorithm::ChaCha12,
        100,
    ));
    let second = replay_sequence(64, 0.1, 5).unwrap();
    Configurator::configure_seed(100);
    let default = replay_sequence(64, 0.1, 5).unwrap();

    assert_eq!(first, second);
    assert_ne!(first, default);
}

#[test]
fn existing_components_are_unaffected_by_reconfiguration() {
    let _g = guard();

    Configurator::configure_seed(5);
    let mut init_a = BitVectorInitializer::new(32);
    let mut mut_a = BitFlipMutation::new(0.25).unwrap();
    // reconfigure before using the components built above
    Configurator::configure_seed(999);
    let a: Vec<u32> = {
        let mut x = init_a.create_candidate_solution();
        (0..5)
            .map(|_| {
                mut_a.mutate(&mut x);
                x.get32(0)
            })
            .collect()
    };

    Configurator::configure_seed(5);
    let mut init_b = BitVectorInitializer::new(32);
    let mut mut_b = BitFlipMutation::new(0.25).unwrap();
    let b: Vec<u32> = {
        let mut x = init_b.create_candidate_solution();
        (0..5)
            .map(|_| {
                mut_b.mutate(&mut x);
                x.get32(0)
            })
            .collect()
    };

    assert_eq!(a, b);
}

#[test]
fn unseeded_genetic_algorithms_replay_under_configured_seed() {
    let _g = guard();

    let run = || {
        Configurator::configure_seed(2024);
        let fitness = InverseCostFitnessFunction::new(OneMax).unwrap();
        let mut ga = GeneticAlgorithm::simple(40, 48, fitness, 1.0 / 48.0, 0.7).unwrap();
        ga.optimize(30)
    };

    assert_eq!(run(), run());
}

#[test]
fn replay_sequence_rejects_bad_parameters() {
    let _g = guard();

    assert_eq!(replay_sequence(0, 0.25, 3), Err(EvoError::InvalidLength(0)));
    assert!(replay_sequence(32, 1.5, 3).is_err());
}
