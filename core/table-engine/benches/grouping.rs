//! FILENAME: core/table-engine/benches/grouping.rs
//! Compares the linear-scan and hashed grouping strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use table_engine::{group_by, group_by_hashed, FloatKey};

fn energies(count: usize, distinct: usize) -> Vec<(usize, f64)> {
    (0..count)
        .map(|i| (i, ((i * 7) % distinct) as f64 * 0.5))
        .collect()
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by");

    for &(count, distinct) in &[(16, 4), (256, 16), (4096, 256)] {
        let records = energies(count, distinct);
        let label = format!("{}x{}", count, distinct);

        group.bench_with_input(BenchmarkId::new("linear", &label), &records, |b, records| {
            b.iter(|| group_by(black_box(records.iter()), |(_, energy)| *energy))
        });

        group.bench_with_input(BenchmarkId::new("hashed", &label), &records, |b, records| {
            b.iter(|| group_by_hashed(black_box(records.iter()), |(_, energy)| FloatKey(*energy)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_grouping);
criterion_main!(benches);
