//! GA evolutionary loop execution.
//!
//! [`GeneticAlgorithm`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover →
//! mutation → repeat.

use super::config::GaConfig;
use super::fitness::FitnessFunction;
use super::selection::Selection;
use super::types::{GenerationStats, SolutionCostPair};
use crate::bits::{BitFlipMutation, BitVector, BitVectorInitializer, Crossover};
use crate::error::Result;
use crate::problems::IntegerCostProblem;
use crate::random::{Configurator, SplittableRng};
use rand::Rng;

#[derive(Debug, Clone)]
struct Member {
    candidate: BitVector,
    cost: i64,
    fitness: f64,
}

/// A generational Genetic Algorithm over [`BitVector`]s.
///
/// The algorithm owns its generators: one for the initializer, one for the
/// mutation operator, and one for selection and crossover. They are split
/// from a generator seeded with [`GaConfig::seed`] or, when no seed is set,
/// from the process-wide [`Configurator`].
///
/// # Usage
///
/// ```
/// use u_evo::ga::{GaConfig, GeneticAlgorithm, InverseCostFitnessFunction, Selection};
/// use u_evo::problems::OneMax;
///
/// let fitness = InverseCostFitnessFunction::new(OneMax)?;
/// let config = GaConfig::mutation_only(30, 16, 0.1, Selection::Tournament(3)).with_seed(42);
/// let mut ga = GeneticAlgorithm::new(config, fitness)?;
/// let best = ga.optimize(200);
/// assert_eq!(best.solution().len(), 16);
/// # Ok::<(), u_evo::EvoError>(())
/// ```
pub struct GeneticAlgorithm<F> {
    config: GaConfig,
    fitness: F,
    initializer: BitVectorInitializer,
    mutation: BitFlipMutation,
    rng: SplittableRng,
    population: Vec<Member>,
    best: Option<SolutionCostPair<BitVector>>,
    total_run_length: usize,
    history: Vec<GenerationStats>,
}

impl<F> GeneticAlgorithm<F>
where
    F: FitnessFunction,
    F::Problem: IntegerCostProblem<Candidate = BitVector>,
{
    /// Creates a GA from a configuration.
    ///
    /// # Errors
    /// Returns an error if [`GaConfig::validate`] fails.
    pub fn new(config: GaConfig, fitness: F) -> Result<Self> {
        config.validate()?;

        let mut root = match config.seed {
            Some(seed) => SplittableRng::seed_from_u64(seed),
            None => Configurator::split(),
        };
        let initializer = BitVectorInitializer::with_rng(config.bit_length, root.split());
        let mutation = BitFlipMutation::with_rng(config.mutation_rate, root.split())?;

        Ok(Self {
            config,
            fitness,
            initializer,
            mutation,
            rng: root,
            population: Vec::new(),
            best: None,
            total_run_length: 0,
            history: Vec::new(),
        })
    }

    /// The simple GA: single-point crossover, bit-flip mutation, and
    /// fitness-proportional selection.
    pub fn simple(
        population_size: usize,
        bit_length: usize,
        fitness: F,
        mutation_rate: f64,
        crossover_rate: f64,
    ) -> Result<Self> {
        Self::new(
            GaConfig::simple(population_size, bit_length, mutation_rate, crossover_rate),
            fitness,
        )
    }

    /// A GA with a chosen crossover operator and selection strategy.
    pub fn with_operators(
        population_size: usize,
        bit_length: usize,
        fitness: F,
        mutation_rate: f64,
        crossover: Crossover,
        crossover_rate: f64,
        selection: Selection,
    ) -> Result<Self> {
        let config = GaConfig::simple(population_size, bit_length, mutation_rate, crossover_rate)
            .with_crossover(crossover)
            .with_selection(selection);
        Self::new(config, fitness)
    }

    /// A GA that evolves by mutation and selection alone.
    pub fn mutation_only(
        population_size: usize,
        bit_length: usize,
        fitness: F,
        mutation_rate: f64,
        selection: Selection,
    ) -> Result<Self> {
        Self::new(
            GaConfig::mutation_only(population_size, bit_length, mutation_rate, selection),
            fitness,
        )
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn fitness_function(&self) -> &F {
        &self.fitness
    }

    pub fn problem(&self) -> &F::Problem {
        self.fitness.problem()
    }

    /// Best solution found across every run of this GA, if any.
    pub fn best_so_far(&self) -> Option<&SolutionCostPair<BitVector>> {
        self.best.as_ref()
    }

    /// Total generations executed across every run of this GA.
    pub fn total_run_length(&self) -> usize {
        self.total_run_length
    }

    /// Statistics of the initial population of each run and of every
    /// generation since, numbered consecutively from 0 across runs.
    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Runs the GA from a fresh random population.
    ///
    /// Evolves for up to `generations` generations, stopping early if a
    /// solution with the problem's known minimum cost is found. Returns the
    /// best solution of this run.
    pub fn optimize(&mut self, generations: usize) -> SolutionCostPair<BitVector> {
        self.initialize();
        self.evolve(generations)
    }

    /// Continues evolving the current population.
    ///
    /// Behaves like [`optimize`](Self::optimize) if no population exists yet.
    pub fn reoptimize(&mut self, generations: usize) -> SolutionCostPair<BitVector> {
        if self.population.is_empty() {
            self.initialize();
        }
        self.evolve(generations)
    }

    fn initialize(&mut self) {
        let candidates: Vec<BitVector> = (0..self.config.population_size)
            .map(|_| self.initializer.create_candidate_solution())
            .collect();
        self.population = evaluate_all(&self.fitness, candidates, self.config.parallel);
        self.record_stats();
    }

    fn evolve(&mut self, generations: usize) -> SolutionCostPair<BitVector> {
        tracing::debug!(
            generations,
            population = self.config.population_size,
            bit_length = self.config.bit_length,
            "starting GA run"
        );

        let mut run_best = self.population_best();
        let mut executed = 0usize;
        while executed < generations && !run_best.is_known_optimal() {
            self.generation();
            executed += 1;
            self.total_run_length += 1;
            self.record_stats();

            let gen_best = self.population_best();
            if gen_best.cost() < run_best.cost() {
                run_best = gen_best;
            }
        }

        if self
            .best
            .as_ref()
            .map_or(true, |best| run_best.cost() < best.cost())
        {
            self.best = Some(run_best.clone());
        }

        tracing::debug!(
            cost = run_best.cost(),
            generations = executed,
            optimal = run_best.is_known_optimal(),
            "GA run finished"
        );
        run_best
    }

    /// Replaces the population with the next generation.
    fn generation(&mut self) {
        let n = self.config.population_size;
        let elites = self.config.elite_count;
        let fitnesses: Vec<f64> = self.population.iter().map(|m| m.fitness).collect();

        let mut next: Vec<Member> = Vec::with_capacity(n);
        if elites > 0 {
            let mut order: Vec<usize> = (0..n).collect();
            order.sort_by(|&a, &b| {
                fitnesses[b]
                    .partial_cmp(&fitnesses[a])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            next.extend(order[..elites].iter().map(|&i| self.population[i].clone()));
        }

        let parents = self.config.selection.select(&fitnesses, n - elites, &mut self.rng);
        let mut offspring: Vec<BitVector> = parents
            .iter()
            .map(|&i| self.population[i].candidate.clone())
            .collect();

        if let Some(crossover) = self.config.crossover {
            for pair in offspring.chunks_exact_mut(2) {
                if self.rng.random_bool(self.config.crossover_rate) {
                    let (a, b) = pair.split_at_mut(1);
                    crossover.cross(&mut a[0], &mut b[0], &mut self.rng);
                }
            }
        }

        for child in offspring.iter_mut() {
            self.mutation.mutate(child);
        }

        next.extend(evaluate_all(&self.fitness, offspring, self.config.parallel));
        self.population = next;
    }

    fn population_best(&self) -> SolutionCostPair<BitVector> {
        let best = self
            .population
            .iter()
            .min_by_key(|m| m.cost)
            .expect("population must not be empty");
        SolutionCostPair::new(
            best.candidate.clone(),
            best.cost,
            self.problem().is_minimum_cost(best.cost),
        )
    }

    fn record_stats(&mut self) {
        let n = self.population.len().max(1) as f64;
        let stats = GenerationStats {
            generation: self.history.len(),
            best_cost: self.population.iter().map(|m| m.cost).min().unwrap_or(i64::MAX),
            mean_fitness: self.population.iter().map(|m| m.fitness).sum::<f64>() / n,
        };
        tracing::trace!(
            generation = stats.generation,
            best_cost = stats.best_cost,
            mean_fitness = stats.mean_fitness,
            "generation complete"
        );
        self.history.push(stats);
    }
}

fn evaluate<F>(fitness: &F, candidate: BitVector) -> Member
where
    F: FitnessFunction,
    F::Problem: IntegerCostProblem<Candidate = BitVector>,
{
    Member {
        cost: fitness.problem().cost(&candidate),
        fitness: fitness.fitness(&candidate),
        candidate,
    }
}

/// Evaluates all candidates, in parallel when enabled.
fn evaluate_all<F>(fitness: &F, candidates: Vec<BitVector>, parallel: bool) -> Vec<Member>
where
    F: FitnessFunction,
    F::Problem: IntegerCostProblem<Candidate = BitVector>,
{
    #[cfg(feature = "parallel")]
    if parallel {
        use rayon::prelude::*;
        return candidates
            .into_par_iter()
            .map(|c| evaluate(fitness, c))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    candidates
        .into_iter()
        .map(|c| evaluate(fitness, c))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
