use glam::{Quat, Vec2, Vec3};
use object_placer::prelude::*;
use object_placer_examples::{init_tracing, render_top_down_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Props live under a scaled, rotated parent; bake them in world space.
    let parent = Transform::from_position(Vec3::new(10.0, 0.0, 5.0))
        .with_rotation(Quat::from_rotation_y(0.4))
        .with_scale(Vec3::splat(2.0));
    let mut pool = SceneNodePool::new("Barrel").with_parent(parent);
    let mut barrels = reconcile_count(Vec::new(), 40, &mut pool, &mut ());

    let scatter = PlacementConfig::new(PlacementMode::RandomInCylinder)
        .with_cylinder(CylinderVolume::new(Vec3::ZERO, 15.0, 0.0))
        .with_options(PlacementOptions::default().without_surface_projection());
    place(
        &scatter,
        &PlacementContext::new(),
        &mut barrels,
        &mut StdRng::seed_from_u64(1),
        None,
    )?;

    let dir = std::env::temp_dir().join("object_placer_presets");
    let mut store = RonSnapshotFiles::new(&dir).with_stem("BarrelLayout");
    let handle = bake_snapshot(&barrels, Space::World, &mut store)?;
    tracing::info!("Baked layout to {}", store.path_for(&handle).display());

    // Scramble the layout, then restore it from disk through a preset pass.
    place(
        &scatter,
        &PlacementContext::new(),
        &mut barrels,
        &mut StdRng::seed_from_u64(2),
        None,
    )?;
    let snapshot = store.load(&handle)?;
    let preset = PlacementConfig::new(PlacementMode::Preset).with_space(Space::World);
    let ctx = PlacementContext::new().with_snapshot(&snapshot);
    let summary = PlacementRunner::try_new(preset, ctx)?.run(&mut barrels, &mut StdRng::seed_from_u64(3))?;
    tracing::info!("Restored {} barrels.", summary.placed);

    let rc = RenderConfig::new((1000, 1000), Vec2::new(100.0, 100.0))
        .with_view_center(Vec2::new(10.0, 5.0));
    render_top_down_png(&barrels, &[], &rc, "snapshot-bake-and-restore.png")?;
    Ok(())
}
