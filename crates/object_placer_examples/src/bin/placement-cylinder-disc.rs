use glam::{Vec2, Vec3};
use object_placer::prelude::*;
use object_placer_examples::{init_tracing, render_top_down_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Area-uniform disc: density should look even from the axis to the rim.
    let config = PlacementConfig::new(PlacementMode::RandomInCylinder)
        .with_cylinder(CylinderVolume::new(Vec3::ZERO, 45.0, 2.0))
        .with_options(PlacementOptions::plain());

    let mut pool = SceneNodePool::new("Stone");
    let mut stones = reconcile_count(Vec::new(), 1500, &mut pool, &mut ());

    let mut rng = StdRng::seed_from_u64(7);
    let summary = place(&config, &PlacementContext::new(), &mut stones, &mut rng, None)?;
    tracing::info!("Placed {} stones.", summary.placed);

    let rc = RenderConfig::new((1000, 1000), Vec2::new(100.0, 100.0)).with_point_style([200, 200, 120], 2);
    render_top_down_png(&stones, &config.outline(), &rc, "placement-cylinder-disc.png")?;
    Ok(())
}
