use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use storefront::{FilterState, project, toggle};
use storefront_catalog::{Catalog, Price, Product, SizeLabel};
use storefront_core::ProductId;

const SIZES: [&str; 12] = ["XS", "S", "M", "L", "XL", "XXL", "28", "30", "32", "34", "36", "42"];

/// Catalog of `n` products, each carrying a rotating window of four sizes.
fn synthetic_catalog(n: u32) -> Catalog {
    let products = (1..=n)
        .map(|i| {
            let start = i as usize % SIZES.len();
            let sizes = (0..4)
                .map(|k| SizeLabel::new(SIZES[(start + k) % SIZES.len()]).unwrap())
                .collect();
            Product::new(
                ProductId::try_from(i).unwrap(),
                format!("Product {i}"),
                Price::new(u64::from(i) * 100),
                format!("/img/{i}.jpg"),
                sizes,
                "bench",
            )
            .unwrap()
        })
        .collect();
    Catalog::new(products).unwrap()
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("project");
    let filter = toggle(&toggle(&FilterState::new(), "M"), "36");

    for n in [6u32, 100, 1_000, 10_000] {
        let catalog = synthetic_catalog(n);
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::new("two_sizes", n), &catalog, |b, catalog| {
            b.iter(|| project(black_box(catalog), black_box(&filter)).len())
        });
    }
    group.finish();
}

fn bench_size_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("size_index");
    for n in [6u32, 1_000, 10_000] {
        let catalog = synthetic_catalog(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &catalog, |b, catalog| {
            b.iter(|| black_box(catalog).size_index().len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_projection, bench_size_index);
criterion_main!(benches);
