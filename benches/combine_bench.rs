//! Benchmark for error aggregation.
//!
//! Compares `combine_all`, which visits every result, with the standard
//! short-circuiting `collect`, and measures the validation bridge's grouping.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use outcomes::control::combine_all;
use outcomes::error::ErrorAggregate;
use outcomes::validation::ValidationOutcome;
use std::hint::black_box;

fn mixed_results(size: usize) -> Vec<outcomes::Result<usize>> {
    (0..size)
        .map(|index| {
            if index % 4 == 0 {
                Err(ErrorAggregate::new(format!("Field{}", index % 7), "invalid"))
            } else {
                Ok(index)
            }
        })
        .collect()
}

// =============================================================================
// 1. Aggregation vs Short-circuit
// =============================================================================

fn benchmark_all_ok(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("all_ok");

    for size in [10, 100, 1000] {
        let results: Vec<outcomes::Result<usize>> = (0..size).map(Ok).collect();

        group.bench_with_input(BenchmarkId::new("combine_all", size), &results, |bencher, results| {
            bencher.iter(|| black_box(combine_all(results.clone())));
        });

        group.bench_with_input(BenchmarkId::new("collect", size), &results, |bencher, results| {
            bencher.iter(|| {
                let collected: outcomes::Result<Vec<usize>> = results.clone().into_iter().collect();
                black_box(collected)
            });
        });
    }

    group.finish();
}

fn benchmark_mixed(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("mixed");

    for size in [10, 100, 1000] {
        let results = mixed_results(size);

        group.bench_with_input(BenchmarkId::new("combine_all", size), &results, |bencher, results| {
            bencher.iter(|| black_box(combine_all(results.clone())));
        });

        group.bench_with_input(BenchmarkId::new("collect", size), &results, |bencher, results| {
            bencher.iter(|| {
                let collected: outcomes::Result<Vec<usize>> = results.clone().into_iter().collect();
                black_box(collected)
            });
        });
    }

    group.finish();
}

// =============================================================================
// 2. Validation Grouping
// =============================================================================

fn benchmark_validation_grouping(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("validation_grouping");

    for violation_count in [1, 10, 100] {
        let violations: Vec<(String, String)> = (0..violation_count)
            .map(|index| (format!("Field{}", index % 5), format!("rule {index} failed")))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(violation_count),
            &violations,
            |bencher, violations| {
                bencher.iter(|| {
                    let outcome = ValidationOutcome::new((), violations.clone());
                    black_box(outcome.into_result())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_all_ok,
    benchmark_mixed,
    benchmark_validation_grouping
);
criterion_main!(benches);
