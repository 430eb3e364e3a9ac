//! Criterion benchmarks for u-evo.
//!
//! Uses OneMax to measure pure algorithm overhead: operators in isolation,
//! then full GA generations for each variant.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_evo::bits::{BitFlipMutation, BitVector, Crossover};
use u_evo::ga::{GaConfig, GeneticAlgorithm, InverseCostFitnessFunction, Selection};
use u_evo::problems::OneMax;
use u_evo::random::create_rng;

fn bench_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("operators");

    for &len in &[64usize, 1024] {
        group.bench_with_input(BenchmarkId::new("bit_flip", len), &len, |b, &len| {
            let mut mutation = BitFlipMutation::with_rng(1.0 / len as f64, create_rng(1))
                .expect("valid rate");
            let mut v = BitVector::new(len);
            b.iter(|| mutation.mutate(black_box(&mut v)));
        });

        for (name, op) in [
            ("single_point", Crossover::SinglePoint),
            ("two_point", Crossover::TwoPoint),
            ("uniform", Crossover::Uniform(0.5)),
        ] {
            group.bench_with_input(BenchmarkId::new(name, len), &len, |b, &len| {
                let mut rng = create_rng(2);
                let mut x = BitVector::random(len, &mut rng);
                let mut y = BitVector::random(len, &mut rng);
                b.iter(|| op.cross(black_box(&mut x), black_box(&mut y), &mut rng));
            });
        }
    }

    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let fitness: Vec<f64> = (1..=100).map(|i| 1.0 / i as f64).collect();

    for (name, sel) in [
        ("fitness_proportional", Selection::FitnessProportional),
        ("sus", Selection::StochasticUniversalSampling),
        ("tournament_4", Selection::Tournament(4)),
        ("rank", Selection::Rank),
    ] {
        group.bench_function(name, |b| {
            let mut rng = create_rng(3);
            b.iter(|| sel.select(black_box(&fitness), 100, &mut rng));
        });
    }

    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_onemax_100");
    group.sample_size(20);

    let m = 0.01;
    for (name, config) in [
        ("simple", GaConfig::simple(100, 100, m, 0.7)),
        (
            "two_point_sus",
            GaConfig::simple(100, 100, m, 0.7)
                .with_crossover(Crossover::TwoPoint)
                .with_selection(Selection::StochasticUniversalSampling),
        ),
        (
            "mutation_only",
            GaConfig::mutation_only(100, 100, 2.0 * m, Selection::Tournament(4)),
        ),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let fitness = InverseCostFitnessFunction::new(OneMax).expect("known minimum");
                let mut ga = GeneticAlgorithm::new(config.clone().with_seed(42), fitness)
                    .expect("valid config");
                black_box(ga.optimize(50))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_operators, bench_selection, bench_ga);
criterion_main!(benches);
