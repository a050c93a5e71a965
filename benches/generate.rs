//! Benches full field generation at the classic 800x800 output shape.
#![expect(
    missing_docs,
    reason = "Its a benchmark and criterion macros don't add docs."
)]

use criterion::*;
use perlin_field::{FieldConfig, LatticeExtent, Normalization, generate_field};
use rand::{SeedableRng, rngs::SmallRng};

criterion_main!(benches);
criterion_group!(benches, generate);

const DOMAIN_SIZE: u32 = 40;
const CELL_RESOLUTION: u32 = 20;

fn config_with(normalization: Normalization) -> FieldConfig {
    FieldConfig {
        domain_size: DOMAIN_SIZE,
        cell_resolution: CELL_RESOLUTION,
        extent: LatticeExtent::Inclusive,
        normalization,
    }
}

fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("analytic", |bencher| {
        let config = config_with(Normalization::Analytic);
        bencher.iter(|| generate_field(&config, &mut SmallRng::seed_from_u64(black_box(0))));
    });

    group.bench_function("min-max", |bencher| {
        let config = config_with(Normalization::MinMax);
        bencher.iter(|| generate_field(&config, &mut SmallRng::seed_from_u64(black_box(0))));
    });
}
