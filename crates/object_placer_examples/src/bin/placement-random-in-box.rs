use glam::{Vec2, Vec3};
use object_placer::prelude::*;
use object_placer_examples::{init_tracing, render_top_down_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Grow the list of props to the configured count, then scatter them in a box.
    let config = PlacementConfig::new(PlacementMode::RandomInBox)
        .with_box(BoxVolume::new(Vec3::ZERO, Vec3::new(80.0, 0.0, 60.0)))
        .with_place_count(400)
        .with_options(PlacementOptions::default().without_surface_projection());

    let mut pool = SceneNodePool::new("Crate");
    let mut props = reconcile_count(Vec::new(), config.place_count, &mut pool, &mut ());

    let outline = config.outline();
    let runner = PlacementRunner::try_new(config, PlacementContext::new())?;
    let mut rng = StdRng::seed_from_u64(2025);
    let summary = runner.run(&mut props, &mut rng)?;
    tracing::info!("Placed {} props.", summary.placed);

    let rc = RenderConfig::new((1000, 1000), Vec2::new(100.0, 100.0));
    render_top_down_png(&props, &outline, &rc, "placement-random-in-box.png")?;
    Ok(())
}
