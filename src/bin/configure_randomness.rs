//! Shows how the process-wide [`Configurator`] controls randomness.
//!
//! Seeding the configurator before building components makes their random
//! behavior exactly replicable. Takes no arguments.

use u_evo::demo;
use u_evo::random::{Configurator, RngAlgorithm, SplittableRng};

const SEED: u64 = 42;
const BIT_LENGTH: usize = 32;
const MUTATION_RATE: f64 = 0.25;
const STEPS: usize = 10;

fn main() -> anyhow::Result<()> {
    demo::init_tracing();
    demo::print_copyright_and_license();

    // Choose a different algorithm; every component built afterwards gets
    // a child split from it.
    Configurator::configure_random_generator(SplittableRng::from_entropy_with(
        RngAlgorithm::ChaCha20,
    ));

    // Seeding replaces the generator above with a seeded ChaCha8 default.
    Configurator::configure_seed(SEED);
    let first_run = demo::replay_sequence(BIT_LENGTH, MUTATION_RATE, STEPS)?;

    Configurator::configure_seed(SEED);
    let second_run = demo::replay_sequence(BIT_LENGTH, MUTATION_RATE, STEPS)?;

    println!("Demonstrating Configurator for specifying seed to exactly replicate behavior.");
    for (a, b) in first_run.iter().zip(&second_run) {
        println!("{}", demo::replay_row(*a, *b));
    }
    println!();

    // To choose the algorithm and seed it, configure a pre-seeded one.
    Configurator::configure_random_generator(SplittableRng::with_algorithm(
        RngAlgorithm::ChaCha12,
        100,
    ));
    Ok(())
}
