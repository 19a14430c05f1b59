use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use fieldserve_catalog::PricingType;
use fieldserve_pricing::quote;

fn bench_quote(c: &mut Criterion) {
    let mut group = c.benchmark_group("pricing_quote");

    for &quantity in &[1i64, 100, 10_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::new("per_sqft", quantity),
            &quantity,
            |b, &qty| {
                b.iter(|| quote(black_box(20), PricingType::PerSqft, black_box(qty)).unwrap())
            },
        );
    }

    group.bench_function("fixed_with_floor", |b| {
        b.iter(|| quote(black_box(499), PricingType::Fixed, black_box(1)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_quote);
criterion_main!(benches);
