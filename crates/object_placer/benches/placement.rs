mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use object_placer::prelude::*;

fn placement_pass_benches(c: &mut Criterion) {
    let modes = [
        ("random_in_box", PlacementMode::RandomInBox),
        ("random_in_cylinder", PlacementMode::RandomInCylinder),
        ("align_in_grid", PlacementMode::AlignInGrid),
        ("random_in_triangle", PlacementMode::RandomInTriangle),
    ];

    for (name, mode) in modes {
        let mut group = c.benchmark_group(format!("placement/{name}"));
        for &count in &common::OBJECT_COUNTS {
            group.throughput(common::objects(count));

            let config = PlacementConfig::new(mode)
                .with_box(BoxVolume::new(Vec3::ZERO, Vec3::new(100.0, 0.0, 100.0)))
                .with_grid(32, 32)
                .with_options(
                    PlacementOptions::default()
                        .with_random_offset(Vec3::splat(-0.5), Vec3::splat(0.5))
                        .with_random_scale(Vec3::splat(0.9), Vec3::splat(1.1)),
                );
            let ground = FlatGround::new(0.0);
            let ctx = PlacementContext::new().with_projector(&ground);
            let runner = PlacementRunner::try_new(config, ctx).expect("valid config");

            let mut list = common::scene_nodes(count);
            let mut rng = common::bench_rng(count as u64);

            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
                b.iter(|| {
                    let summary = runner.run(&mut list, &mut rng).expect("pass");
                    black_box(summary.placed);
                });
            });
        }
        group.finish();
    }
}

fn snapshot_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot/capture_apply");
    for &count in &common::OBJECT_COUNTS {
        group.throughput(common::objects(count));
        let mut list = common::scene_nodes(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let snapshot = TransformSnapshot::capture(&list, Space::World);
                black_box(snapshot.apply(&mut list, Space::World));
            });
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::placement_criterion();
    targets = placement_pass_benches, snapshot_benches
}
criterion_main!(benches);
