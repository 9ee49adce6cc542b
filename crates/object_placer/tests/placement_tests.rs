use glam::Vec3;
use object_placer::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn pool_of(n: usize) -> (SceneNodePool, Vec<SceneNode>) {
    let mut pool = SceneNodePool::new("Prop");
    let list = reconcile_count(Vec::new(), n, &mut pool, &mut ());
    (pool, list)
}

#[test]
fn every_volume_sample_lies_inside_its_volume() {
    let mut rng = StdRng::seed_from_u64(1234);
    let b = BoxVolume::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
    let c = CylinderVolume::new(Vec3::new(-1.0, 0.5, 2.0), 3.0, 2.0);
    let t = IsoscelesTriangle::new(Vec3::new(0.0, 1.0, 0.0), 5.0, 60.0);

    for _ in 0..2000 {
        assert!(b.contains(sample_in_box(&b, &mut rng)));
        assert!(c.contains(sample_in_cylinder(&c, &mut rng)));
        assert!(t.contains(sample_in_triangle(&t, &mut rng).expect("triangle")));
    }
}

#[test]
fn right_angle_triangle_example() {
    let t = IsoscelesTriangle::new(Vec3::ZERO, 4.0, 90.0);
    assert_eq!(t.p1(), Vec3::new(-2.0, 0.0, 0.0));
    assert_eq!(t.p2(), Vec3::new(2.0, 0.0, 0.0));
    assert!(t.p3().abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), 1e-5));

    let mut rng = StdRng::seed_from_u64(10_000);
    for _ in 0..10_000 {
        let p = t.sample_point(&mut rng).expect("triangle");
        assert!(t.contains(p));
    }
}

#[test]
fn grid_pass_wraps_when_more_targets_than_cells() {
    let (_, mut list) = pool_of(6);
    let config = PlacementConfig::new(PlacementMode::AlignInGrid)
        .with_box(BoxVolume::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 10.0)))
        .with_grid(2, 2)
        .with_options(PlacementOptions::plain());
    let runner = PlacementRunner::try_new(config, PlacementContext::new()).expect("runner");
    runner
        .run(&mut list, &mut StdRng::seed_from_u64(0))
        .expect("pass");
    assert_eq!(list[4].local.position, list[0].local.position);
    assert_eq!(list[5].local.position, list[1].local.position);
}

#[test]
fn reconcile_then_place_uses_the_whole_list() {
    let (mut pool, list) = pool_of(3);
    let config = PlacementConfig::new(PlacementMode::RandomInBox)
        .with_box(BoxVolume::new(Vec3::new(0.0, 10.0, 0.0), Vec3::new(20.0, 0.0, 20.0)))
        .with_place_count(8)
        .with_options(PlacementOptions::default().with_surface_projection(15.0));

    let mut list = reconcile_count(list, config.place_count, &mut pool, &mut ());
    assert_eq!(list.len(), 8);

    let ground = FlatGround::new(0.0);
    let ctx = PlacementContext::new().with_projector(&ground);
    let runner = PlacementRunner::try_new(config, ctx).expect("runner");
    let summary = runner
        .run(&mut list, &mut StdRng::seed_from_u64(3))
        .expect("pass");

    assert_eq!(summary.placed, 8);
    assert_eq!(summary.projected, 8);
    for node in &list {
        assert_eq!(node.local.position.y, 0.0);
        assert!(node.local.position.x.abs() <= 10.0);
    }

    let list = clear_placeables(list, &mut pool, &mut ());
    assert!(list.is_empty());
    assert_eq!(pool.destroyed_count(), 8);
}

#[test]
fn boxed_trait_objects_are_placeable() {
    let mut list: Vec<Box<dyn Placeable>> = vec![
        Box::new(SceneNode::new("a")),
        Box::new(SceneNode::new("b")),
    ];
    let config = PlacementConfig::new(PlacementMode::AlignInGrid)
        .with_box(BoxVolume::new(Vec3::ZERO, Vec3::new(4.0, 0.0, 2.0)))
        .with_grid(2, 1)
        .with_options(PlacementOptions::plain());
    place(
        &config,
        &PlacementContext::new(),
        &mut list,
        &mut StdRng::seed_from_u64(0),
        None,
    )
    .expect("pass");
    assert_eq!(list[0].local_transform().position, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(list[1].local_transform().position, Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn invalid_configs_are_rejected_up_front() {
    let config = PlacementConfig::new(PlacementMode::RandomInTriangle)
        .with_triangle(IsoscelesTriangle::new(Vec3::ZERO, 2.0, 0.0));
    assert!(matches!(
        PlacementRunner::try_new(config, PlacementContext::new()),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn fn_sink_sees_warnings_from_preset_passes() {
    let snapshot = TransformSnapshot::from_records(vec![TransformRecord::from(
        Transform::from_position(Vec3::ONE),
    )]);
    let (_, mut list) = pool_of(2);
    let mut warnings = Vec::new();
    {
        let mut sink = FnSink::new(|event| {
            if let PlacementEvent::Warning { message, .. } = event {
                warnings.push(message);
            }
        });
        let config = PlacementConfig::new(PlacementMode::Preset);
        let ctx = PlacementContext::new().with_snapshot(&snapshot);
        PlacementRunner::try_new(config, ctx)
            .expect("runner")
            .run_with_events(&mut list, &mut StdRng::seed_from_u64(0), &mut sink)
            .expect("pass");
    }
    assert_eq!(warnings.len(), 1);
    assert_eq!(list[0].local.position, Vec3::ONE);
}
