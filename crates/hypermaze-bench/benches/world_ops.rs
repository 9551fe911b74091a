//! Criterion benchmarks for the world's move and render cycle.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hypermaze_bench::{move_script, profile_3d, reference_profile, stress_profile};
use hypermaze_engine::MazeWorld;
use std::hint::black_box;

/// Benchmark: 1000 random key presses, each followed by a render pass.
fn bench_move_and_render(c: &mut Criterion) {
    for (name, config) in [
        ("3d_11", profile_3d(42)),
        ("4d_11", reference_profile(42)),
    ] {
        let ndim = config.ndim;
        let script = move_script(1000, ndim, 9);
        c.bench_function(&format!("move_and_render_{name}"), |b| {
            b.iter_batched(
                || MazeWorld::new(config.clone()).unwrap(),
                |mut world| {
                    for &request in &script {
                        black_box(world.handle_move_request(request).unwrap());
                        black_box(world.render_dirty());
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
}

/// Benchmark: world reset at the stress profile size.
fn bench_reset_stress(c: &mut Criterion) {
    let mut world = MazeWorld::new(stress_profile(42)).unwrap();
    c.bench_function("reset_4d_21", |b| {
        b.iter(|| {
            world.reset();
            black_box(world.reachable_count());
        });
    });
}

criterion_group!(benches, bench_move_and_render, bench_reset_stress);
criterion_main!(benches);
