#![allow(dead_code)]

use std::time::Duration;

use criterion::{Criterion, Throughput};
use object_placer::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Target counts shared by the pass and snapshot groups.
pub const OBJECT_COUNTS: [usize; 3] = [64, 256, 1024];

pub fn placement_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(30)
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(3))
}

/// Throughput in placed objects (or drawn points) per iteration.
pub fn objects(count: usize) -> Throughput {
    Throughput::Elements(count.max(1) as u64)
}

/// Generator seeded per benchmark case so reruns draw the same positions.
pub fn bench_rng(case: u64) -> StdRng {
    StdRng::seed_from_u64(0x0B1E_C7 ^ case)
}

/// `count` fresh scene nodes named `Bench_000`, `Bench_001`, ...
pub fn scene_nodes(count: usize) -> Vec<SceneNode> {
    let mut pool = SceneNodePool::new("Bench");
    reconcile_count(Vec::new(), count, &mut pool, &mut ())
}
