use glam::{Vec2, Vec3};
use object_placer::prelude::*;
use object_placer_examples::{init_tracing, render_top_down_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Triangle floating above the ground; every point is snapped down onto it,
    // then each tree gets some size variation.
    let config = PlacementConfig::new(PlacementMode::RandomInTriangle)
        .with_triangle(IsoscelesTriangle::new(Vec3::new(0.0, 0.5, -40.0), 60.0, 90.0))
        .with_options(
            PlacementOptions::default()
                .with_surface_projection(1.0)
                .with_random_scale(Vec3::splat(0.8), Vec3::splat(1.25)),
        );

    let mut pool = SceneNodePool::new("Tree");
    let mut trees = reconcile_count(Vec::new(), 600, &mut pool, &mut ());

    let ground = FlatGround::new(0.0);
    let ctx = PlacementContext::new().with_projector(&ground);
    let mut sink = VecSink::new();
    let summary = PlacementRunner::try_new(config.clone(), ctx)?.run_with_events(
        &mut trees,
        &mut StdRng::seed_from_u64(31),
        &mut sink,
    )?;
    tracing::info!(
        "Placed {} trees, {} snapped to ground.",
        summary.placed,
        summary.projected
    );

    let rc = RenderConfig::new((1000, 1000), Vec2::new(100.0, 100.0))
        .with_point_style([90, 200, 110], 3);
    render_top_down_png(&trees, &config.outline(), &rc, "placement-triangle-on-ground.png")?;
    Ok(())
}
