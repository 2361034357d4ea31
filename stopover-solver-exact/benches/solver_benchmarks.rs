//! Criterion benchmarks for the exhaustive solver.
//!
//! Measures solve time as the number of required stops grows from four to
//! eight, where the candidate count grows factorially from 24 to 40,320.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package stopover-solver-exact
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stopover_core::{CostWeights, Edge, Graph, SolveRequest};
use stopover_solver_exact::{ExhaustiveSolver, candidate_count};

/// Seed for deterministic random number generation in benchmarks.
const BENCHMARK_SEED: u64 = 42;

/// Stop counts to benchmark.
const STOP_COUNTS: &[usize] = &[4, 5, 6, 7, 8];

/// Build a complete graph over `start`, `end` and `stops` stop locations with
/// seeded random metrics.
fn generate_graph(stops: usize, seed: u64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut names = vec!["start".to_owned(), "end".to_owned()];
    names.extend((0..stops).map(|index| format!("stop-{index}")));

    let mut graph = Graph::new();
    for from in &names {
        for to in &names {
            let edge = Edge::new(rng.gen_range(0.5..25.0), rng.gen_range(1.0..60.0));
            graph.insert_edge(from.clone(), to.clone(), edge);
        }
    }
    graph
}

fn build_request(stops: usize) -> SolveRequest {
    SolveRequest::new(
        "start",
        "end",
        (0..stops).map(|index| format!("stop-{index}")),
        CostWeights::new(1.0, 0.25),
    )
}

/// Benchmark solve times for increasing stop counts.
fn bench_solve_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_time");
    group.sample_size(30);
    group.measurement_time(Duration::from_secs(5));

    let solver = ExhaustiveSolver::new();
    for &stops in STOP_COUNTS {
        let graph = generate_graph(stops, BENCHMARK_SEED);
        let request = build_request(stops);

        group.throughput(Throughput::Elements(candidate_count(stops).unwrap_or(0)));
        group.bench_with_input(BenchmarkId::new("stops", stops), &stops, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking solve performance, result is intentionally discarded"
                )]
                let _ = solver.solve_with(&graph, &request);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve_times);
criterion_main!(benches);
