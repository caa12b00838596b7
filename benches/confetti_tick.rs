use confetti_greeting::animation_driver;
use confetti_greeting::physic_engine::{ParticleStore, PhysicConfig, Vec2};
use confetti_greeting::renderer_engine::{ConfettiShapes, PixelCanvas};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;

fn bench_physics(c: &mut Criterion) {
    let config = PhysicConfig::default();
    c.bench_function("store update (10 bursts)", |b| {
        b.iter_batched(
            || {
                let mut store = ParticleStore::with_seed(&config, 1);
                for i in 0..10 {
                    store.spawn_default_burst(Vec2::splat(100.0 * i as f32));
                }
                store
            },
            |mut store| black_box(store.update(1.0 / 60.0)),
            BatchSize::SmallInput,
        )
    });
}

fn bench_tick(c: &mut Criterion) {
    let config = PhysicConfig::default();
    let mut shapes = ConfettiShapes::default();
    let mut canvas = PixelCanvas::new(1024, 800);
    c.bench_function("tick + raster (1 burst, 1024x800)", |b| {
        b.iter_batched(
            || {
                let mut store = ParticleStore::with_seed(&config, 2);
                store.spawn_default_burst(Vec2::new(512.0, 400.0));
                store
            },
            |mut store| {
                black_box(animation_driver::tick(
                    &mut store,
                    &mut canvas,
                    &mut shapes,
                    1.0 / 60.0,
                ))
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_physics, bench_tick);
criterion_main!(benches);
