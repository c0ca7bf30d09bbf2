use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use escape_field::{NeverCancel, Region, compute_escape_field, compute_escape_field_per_point};
use std::hint::black_box;

fn classic_region() -> Region {
    Region::new(-2.0, 1.0, -1.0, 1.0).expect("classic region is valid")
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_field");
    let region = classic_region();

    for &target_nx in &[200u32, 800] {
        group.bench_with_input(
            BenchmarkId::new("pruned", target_nx),
            &target_nx,
            |b, &nx| b.iter(|| compute_escape_field(black_box(region), nx, 256)),
        );

        group.bench_with_input(
            BenchmarkId::new("per_point", target_nx),
            &target_nx,
            |b, &nx| {
                b.iter(|| compute_escape_field_per_point(black_box(region), nx, 256, &NeverCancel))
            },
        );
    }

    group.finish();
}

/// Pruned and per-point on one rayon thread, so the comparison measures the
/// round loop itself rather than how well each strategy spreads over cores.
fn bench_classic_single_thread(c: &mut Criterion) {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .expect("single-thread pool builds");
    let region = classic_region();
    let mut group = c.benchmark_group("classic_1600_single_thread");
    group.sample_size(10);

    group.bench_function("pruned", |b| {
        b.iter(|| pool.install(|| compute_escape_field(black_box(region), 1600, 256)))
    });
    group.bench_function("per_point", |b| {
        b.iter(|| {
            pool.install(|| {
                compute_escape_field_per_point(black_box(region), 1600, 256, &NeverCancel)
            })
        })
    });

    group.finish();
}

fn bench_deep_budget(c: &mut Criterion) {
    // Seahorse valley: most points survive many rounds
    let region = Region::new(-0.76, -0.73, 0.09, 0.12).expect("seahorse region is valid");

    c.bench_function("escape_field_seahorse_2000", |b| {
        b.iter(|| compute_escape_field(black_box(region), 300, 2000))
    });
}

criterion_group!(
    benches,
    bench_strategies,
    bench_classic_single_thread,
    bench_deep_budget
);
criterion_main!(benches);
