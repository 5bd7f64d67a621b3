//! Criterion benchmarks for the four scheduling algorithms.
//!
//! Uses seeded random workloads so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_cpu_sched::workload::WorkloadGenerator;
use u_cpu_sched::Algorithm;

fn bench_algorithms(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");
    for n in [100usize, 1_000, 10_000] {
        let tasks = WorkloadGenerator::new(42)
            .with_task_count(n)
            .with_arrival_range(0..=1_000)
            .with_burst_range(1..=50)
            .generate();

        let algorithms = [
            ("fcfs", Algorithm::Fcfs),
            ("sjf", Algorithm::Sjf),
            ("priority", Algorithm::Priority),
            ("round_robin_q4", Algorithm::RoundRobin { quantum: 4 }),
        ];
        for (name, algorithm) in algorithms {
            group.bench_with_input(BenchmarkId::new(name, n), &tasks, |b, tasks| {
                b.iter(|| algorithm.run(black_box(tasks)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);
