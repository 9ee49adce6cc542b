//! Per-object variation: random rotation, positional offset and scale multiplier.
//!
//! Euler angles are in degrees and follow the yaw-pitch-roll convention
//! (rotation about Z first, then X, then Y).
use glam::{EulerRot, Quat, Vec3};
use rand::RngCore;

use crate::sampling::{rand_range, rand_vec3};

/// Convert Euler angles in degrees (x = pitch, y = yaw, z = roll) to a rotation.
#[inline]
pub fn euler_degrees_to_quat(euler: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        euler.y.to_radians(),
        euler.x.to_radians(),
        euler.z.to_radians(),
    )
}

/// Inverse of [`euler_degrees_to_quat`].
#[inline]
pub fn quat_to_euler_degrees(rotation: Quat) -> Vec3 {
    let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
    Vec3::new(pitch.to_degrees(), yaw.to_degrees(), roll.to_degrees())
}

/// Rotation with each Euler angle drawn uniformly from `[min, max]` (degrees).
pub fn sample_rotation(min_euler: Vec3, max_euler: Vec3, rng: &mut dyn RngCore) -> Quat {
    let euler = Vec3::new(
        rand_range(rng, min_euler.x, max_euler.x),
        rand_range(rng, min_euler.y, max_euler.y),
        rand_range(rng, min_euler.z, max_euler.z),
    );
    euler_degrees_to_quat(euler)
}

/// Positional offset drawn uniformly per component.
pub fn sample_offset(min: Vec3, max: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    rand_vec3(rng, min, max)
}

/// Component-wise scale multiplier drawn uniformly per component.
pub fn sample_scale_multiplier(min: Vec3, max: Vec3, rng: &mut dyn RngCore) -> Vec3 {
    rand_vec3(rng, min, max)
}
