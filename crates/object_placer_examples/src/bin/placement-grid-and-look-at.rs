use glam::{Vec2, Vec3};
use object_placer::prelude::*;
use object_placer_examples::{init_tracing, render_top_down_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Seats on a 6 x 10 grid, nudged a little, all turned to face a stage.
    let config = PlacementConfig::new(PlacementMode::AlignInGrid)
        .with_box(BoxVolume::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(60.0, 0.0, 50.0)))
        .with_grid(6, 10)
        .with_options(
            PlacementOptions::plain().with_random_offset(Vec3::new(-0.5, 0.0, -0.5), Vec3::new(0.5, 0.0, 0.5)),
        );

    let mut pool = SceneNodePool::new("Seat");
    let mut seats = reconcile_count(Vec::new(), 60, &mut pool, &mut ());
    PlacementRunner::try_new(config.clone(), PlacementContext::new())?
        .run(&mut seats, &mut StdRng::seed_from_u64(60))?;

    let stage = Vec3::new(0.0, 0.0, 40.0);
    let turned = rotate_yaw_towards(&mut seats, stage);
    tracing::info!("Turned {turned} seats towards the stage.");

    let rc = RenderConfig::new((1000, 1000), Vec2::new(100.0, 100.0));
    render_top_down_png(&seats, &config.outline(), &rc, "placement-grid-and-look-at.png")?;
    Ok(())
}
