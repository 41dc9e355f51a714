//! Criterion benchmarks for u-evolve.
//!
//! Uses synthetic problems (OneMax over strings, random fitness tables) to
//! measure engine and selection overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_evolve::factory::StringFactory;
use u_evolve::operators::{CrossoverOperator, EvolutionPipeline, StringCrossover, StringMutation};
use u_evolve::random::create_rng;
use u_evolve::selection::{
    RankSelection, RouletteWheelSelection, SelectionStrategy, SigmaScaling,
    StochasticUniversalSampling, TournamentSelection, TruncationSelection,
};
use u_evolve::termination::{GenerationCount, TerminationCondition};
use u_evolve::{sort_population, EngineConfig, EvaluatedCandidate, EvolutionEngine, FnEvaluator};

// ===========================================================================
// OneMax over binary strings: maximize the number of '1' characters
// ===========================================================================

fn one_max(s: &String) -> f64 {
    s.bytes().filter(|&b| b == b'1').count() as f64
}

fn bench_string_evolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_evolution");
    group.sample_size(10);

    for (len, pop, gen) in [(32usize, 50usize, 50usize), (128, 100, 30), (512, 100, 20)] {
        for parallel in [false, true] {
            let pipeline: EvolutionPipeline<String> = EvolutionPipeline::new(vec![
                Box::new(CrossoverOperator::new(StringCrossover, 2usize)),
                Box::new(StringMutation::new("01", 1.0 / len as f64).unwrap()),
            ])
            .unwrap();
            let engine = EvolutionEngine::new(
                StringFactory::new("01", len).unwrap(),
                pipeline,
                FnEvaluator::natural(one_max as fn(&String) -> f64),
                TournamentSelection::new(0.8).unwrap(),
            )
            .with_config(EngineConfig::default().with_seed(42).with_parallel(parallel));
            let conditions: Vec<Box<dyn TerminationCondition>> =
                vec![Box::new(GenerationCount(gen))];

            let mode = if parallel { "par" } else { "seq" };
            group.bench_with_input(
                BenchmarkId::new(format!("l{}_p{}_g{}_{}", len, pop, gen, mode), len),
                &(engine, conditions),
                |b, (engine, conditions)| {
                    b.iter(|| {
                        let result = engine.evolve(black_box(pop), 2, Vec::new(), conditions);
                        black_box(result.map(|r| r.best_fitness()).ok())
                    })
                },
            );
        }
    }
    group.finish();
}

// ===========================================================================
// Selection strategies over a fixed random population
// ===========================================================================

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    let mut rng = create_rng(7);
    let mut population: Vec<EvaluatedCandidate<usize>> = (0..1000)
        .map(|i| EvaluatedCandidate::new(i, rng.random_range(0.0..100.0)))
        .collect();
    sort_population(&mut population, true);

    let strategies: Vec<(&str, Box<dyn SelectionStrategy<usize>>)> = vec![
        ("truncation", Box::new(TruncationSelection::new(0.5).unwrap())),
        ("roulette", Box::new(RouletteWheelSelection)),
        ("sus", Box::new(StochasticUniversalSampling)),
        ("tournament", Box::new(TournamentSelection::new(0.7).unwrap())),
        ("rank", Box::new(RankSelection)),
        ("sigma", Box::new(SigmaScaling)),
    ];

    for (name, strategy) in &strategies {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            let mut rng = create_rng(42);
            b.iter(|| black_box(strategy.select(black_box(&population), true, 1000, &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_string_evolution, bench_selection);
criterion_main!(benches);
