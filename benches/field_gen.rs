//! Benchmarks for galaxy field generation.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use swirl::{GalaxyParams, ParticleField};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_generate");

    for count in [1_000u32, 10_000, 30_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let params = GalaxyParams::default().with_count(count);
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(7);
                black_box(ParticleField::generate_with(&params, &mut rng))
            })
        });
    }

    group.finish();
}

fn bench_sprite(c: &mut Criterion) {
    use swirl::SpriteTexture;

    c.bench_function("radial_glow_32", |b| {
        b.iter(|| black_box(SpriteTexture::radial_glow(32)))
    });
}

criterion_group!(benches, bench_generate, bench_sprite);
criterion_main!(benches);
