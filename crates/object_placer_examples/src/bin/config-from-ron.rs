use glam::Vec2;
use object_placer::prelude::*;
use object_placer_examples::{init_tracing, render_top_down_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

const CONFIG: &str = r#"(
    mode: RandomInBox,
    box_volume: (center: (0.0, 0.0, 0.0), size: (70.0, 0.0, 30.0)),
    place_count: 120,
    options: (
        sample_rotation: true,
        min_rotation_euler: (0.0, -90.0, 0.0),
        max_rotation_euler: (0.0, 90.0, 0.0),
        project_onto_surface: false,
    ),
    range: (use_offset: true, offset: 20, count: 80),
)"#;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Only indices 20..100 are scattered; the first 20 stay at the origin.
    let config = PlacementConfig::from_ron_str(CONFIG)?;
    let mut pool = SceneNodePool::new("Fence");
    let mut fences = reconcile_count(Vec::new(), config.place_count, &mut pool, &mut ());

    let outline = config.outline();
    let mut sink = VecSink::new();
    let summary = PlacementRunner::try_new(config, PlacementContext::new())?.run_with_events(
        &mut fences,
        &mut StdRng::seed_from_u64(9),
        &mut sink,
    )?;
    tracing::info!(
        "Placed {}, skipped {}, {} events.",
        summary.placed,
        summary.skipped,
        sink.len()
    );

    let rc = RenderConfig::new((1000, 1000), Vec2::new(100.0, 100.0));
    render_top_down_png(&fences, &outline, &rc, "config-from-ron.png")?;
    Ok(())
}
