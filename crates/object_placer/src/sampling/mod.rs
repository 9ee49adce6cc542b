//! Sampling primitives used by the placement pass.
//!
//! - [`volume`]: random points inside a [`crate::volume`] shape.
//! - [`grid`]: deterministic cell centers for grid alignment.
//! - [`variation`]: per-object rotation, offset and scale jitter.
//!
//! Every sampler takes its randomness as an explicit `&mut dyn RngCore`, so a
//! seeded generator makes a pass reproducible.
use glam::Vec3;
use rand::RngCore;

use crate::error::Result;

pub mod grid;
pub mod variation;
pub mod volume;

pub use grid::{aligned_position, grid_cell};
pub use variation::{
    euler_degrees_to_quat, quat_to_euler_degrees, sample_offset, sample_rotation,
    sample_scale_multiplier,
};
pub use volume::{
    sample_in_box, sample_in_cylinder, sample_in_triangle, MAX_REJECTION_ATTEMPTS,
};

/// Trait for volumes that can produce a random interior point.
pub trait VolumeSampling {
    fn sample_point(&self, rng: &mut dyn RngCore) -> Result<Vec3>;
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Uniform value between `min` and `max`. Inverted ranges are allowed.
#[inline]
pub(crate) fn rand_range(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    min + (max - min) * rand01(rng)
}

/// Independently uniform per component between `min` and `max`.
#[inline]
pub(crate) fn rand_vec3(rng: &mut dyn RngCore, min: Vec3, max: Vec3) -> Vec3 {
    Vec3::new(
        rand_range(rng, min.x, max.x),
        rand_range(rng, min.y, max.y),
        rand_range(rng, min.z, max.z),
    )
}

#[cfg(test)]
pub(crate) mod test_rng {
    use rand::RngCore;

    /// Generator that returns the same word forever.
    pub struct FixedRng {
        pub value: u32,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value
        }

        fn next_u64(&mut self) -> u64 {
            self.value as u64
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 4];
            }
        }
    }
}
