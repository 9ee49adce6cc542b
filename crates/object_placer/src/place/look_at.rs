//! Turn placed objects to face a point.
use glam::Vec3;

use crate::sampling::{euler_degrees_to_quat, quat_to_euler_degrees};
use crate::transform::Placeable;

/// Horizontal distance under which a target counts as straight above or below.
const MIN_HORIZONTAL_DISTANCE: f32 = 1e-6;

/// Replace the world yaw of every placeable with the yaw facing `target`
/// (forward is +Z), keeping world pitch and roll. Placeables directly above or
/// below the target are left alone. Returns how many were rotated.
pub fn rotate_yaw_towards<P: Placeable>(placeables: &mut [P], target: Vec3) -> usize {
    let mut rotated = 0;
    for placeable in placeables.iter_mut() {
        let world = placeable.world_transform();
        let to_target = target - world.position;
        if to_target.x.abs() < MIN_HORIZONTAL_DISTANCE && to_target.z.abs() < MIN_HORIZONTAL_DISTANCE
        {
            continue;
        }

        let mut euler = quat_to_euler_degrees(world.rotation);
        euler.y = to_target.x.atan2(to_target.z).to_degrees();
        placeable.set_world_pose(world.position, euler_degrees_to_quat(euler));
        rotated += 1;
    }
    rotated
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;
    use crate::transform::{SceneNode, Transform};

    #[test]
    fn faces_target_on_the_horizontal_plane() {
        let mut nodes = vec![SceneNode::new("a").with_local(Transform::from_position(Vec3::ZERO))];
        assert_eq!(rotate_yaw_towards(&mut nodes, Vec3::new(5.0, 3.0, 0.0)), 1);
        let forward = nodes[0].local.rotation * Vec3::Z;
        assert!(forward.abs_diff_eq(Vec3::X, 1e-5), "{forward:?}");
    }

    #[test]
    fn keeps_pitch_and_roll() {
        let start = euler_degrees_to_quat(Vec3::new(10.0, 0.0, 5.0));
        let mut nodes = vec![SceneNode::new("a").with_local(Transform::IDENTITY.with_rotation(start))];
        rotate_yaw_towards(&mut nodes, Vec3::new(0.0, 0.0, -4.0));
        let euler = quat_to_euler_degrees(nodes[0].local.rotation);
        assert!((euler.x - 10.0).abs() < 1e-3);
        assert!((euler.z - 5.0).abs() < 1e-3);
        assert!((euler.y.abs() - 180.0).abs() < 1e-3);
    }

    #[test]
    fn skips_targets_straight_above() {
        let mut nodes = vec![SceneNode::new("a")];
        assert_eq!(rotate_yaw_towards(&mut nodes, Vec3::new(0.0, 10.0, 0.0)), 0);
        assert_eq!(nodes[0].local.rotation, Quat::IDENTITY);
    }

    #[test]
    fn works_through_parent_transforms() {
        let parent = Transform::from_position(Vec3::new(10.0, 0.0, 0.0))
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        let mut nodes = vec![SceneNode::new("a").with_parent(parent)];
        rotate_yaw_towards(&mut nodes, Vec3::new(10.0, 0.0, 10.0));
        let world = nodes[0].world_transform();
        assert!((world.rotation * Vec3::Z).abs_diff_eq(Vec3::Z, 1e-5));
    }
}
