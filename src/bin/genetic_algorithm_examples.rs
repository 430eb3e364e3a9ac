//! Compares three GA variants on a OneMax problem.
//!
//! - simple GA: single-point crossover, bit-flip mutation, fitness-proportional
//!   selection
//! - configurable GA: two-point crossover with stochastic universal sampling
//! - mutation-only GA: tournament selection, no crossover
//!
//! Takes no arguments. Set `RUST_LOG=debug` to see run diagnostics on stderr.

use u_evo::bits::{BitVector, Crossover};
use u_evo::demo::{self, VariantSummary};
use u_evo::ga::{
    FitnessFunction, GeneticAlgorithm, InverseCostFitnessFunction, Selection, SolutionCostPair,
};
use u_evo::problems::{IntegerCostProblem, OneMax};

const POP_SIZE: usize = 100;
const NUM_GENERATIONS: usize = 100;
const BIT_LENGTH: usize = 100;
const MUTATION_RATE: f64 = 1.0 / BIT_LENGTH as f64;
const CROSSOVER_RATE: f64 = 0.7;

fn main() -> anyhow::Result<()> {
    demo::init_tracing();
    demo::print_copyright_and_license();

    let problem = OneMax;

    // Problems minimize cost; the GA maximizes fitness = 1 / (1 + cost),
    // which stays positive as the two roulette-style selections require.
    let fitness = InverseCostFitnessFunction::new(problem)?;

    let mut sga = GeneticAlgorithm::simple(
        POP_SIZE,
        BIT_LENGTH,
        fitness.clone(),
        MUTATION_RATE,
        CROSSOVER_RATE,
    )?;

    let mut ga = GeneticAlgorithm::with_operators(
        POP_SIZE,
        BIT_LENGTH,
        fitness.clone(),
        MUTATION_RATE,
        Crossover::TwoPoint,
        CROSSOVER_RATE,
        Selection::StochasticUniversalSampling,
    )?;

    // No crossover, so mutate a little harder.
    let mut moga = GeneticAlgorithm::mutation_only(
        POP_SIZE,
        BIT_LENGTH,
        fitness.clone(),
        2.0 * MUTATION_RATE,
        Selection::Tournament(4),
    )?;

    let runs = [
        ("SimpleGA", sga.optimize(NUM_GENERATIONS)),
        ("GA", ga.optimize(NUM_GENERATIONS)),
        ("MutationOnly", moga.optimize(NUM_GENERATIONS)),
    ];

    let variants: Vec<VariantSummary> = runs
        .iter()
        .map(|(name, best)| summarize(name, best, &problem, &fitness))
        .collect();

    println!();
    println!("Comparison of Three GA Variations on a OneMax Problem");
    println!("{}", demo::comparison_table(&variants));
    Ok(())
}

fn summarize(
    name: &str,
    best: &SolutionCostPair<BitVector>,
    problem: &OneMax,
    fitness: &InverseCostFitnessFunction<OneMax>,
) -> VariantSummary {
    VariantSummary {
        name: name.to_string(),
        cost: best.cost(),
        value: problem.value(best.solution()),
        fitness: fitness.fitness(best.solution()),
    }
}
