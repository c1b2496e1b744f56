//! Generation and clustering benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench generate
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rooted_rs::flip::{group_into_clusters, unrooted_canonical};
use rooted_rs::generator::Generator;
use rooted_rs::oeis::A000081;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for n in [6, 8, 10] {
        group.throughput(Throughput::Elements(A000081[n]));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            // Fresh cache per iteration, otherwise only the lookup is measured.
            b.iter(|| Generator::new().generate(n).len())
        });
    }
    group.finish();
}

fn bench_cluster(c: &mut Criterion) {
    let generator = Generator::new();
    let mut group = c.benchmark_group("group_into_clusters");
    group.sample_size(10);
    for n in [6, 8, 10] {
        let trees = generator.generate(n);
        group.throughput(Throughput::Elements(trees.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &trees, |b, trees| {
            b.iter(|| group_into_clusters(trees.iter()).len())
        });
    }
    group.finish();
}

fn bench_unrooted_canonical(c: &mut Criterion) {
    let generator = Generator::new();
    let trees = generator.generate(11);
    c.bench_function("unrooted_canonical/11", |b| {
        b.iter(|| trees.iter().take(64).map(|t| unrooted_canonical(t).len()).sum::<usize>())
    });
}

criterion_group!(benches, bench_generate, bench_cluster, bench_unrooted_canonical);
criterion_main!(benches);
