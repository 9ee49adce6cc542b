//! Random points inside placement volumes.
use glam::Vec3;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::sampling::{rand01, rand_range, VolumeSampling};
use crate::volume::{BoxVolume, CylinderVolume, IsoscelesTriangle};

/// Upper bound on rejection draws for a single triangle sample.
pub const MAX_REJECTION_ATTEMPTS: usize = 10_000;

/// Uniform point inside `volume`, independently per axis over `[min, max]`.
pub fn sample_in_box(volume: &BoxVolume, rng: &mut dyn RngCore) -> Vec3 {
    let (min, max) = (volume.min(), volume.max());
    Vec3::new(
        rand_range(rng, min.x, max.x),
        rand_range(rng, min.y, max.y),
        rand_range(rng, min.z, max.z),
    )
}

/// Uniform point inside `volume`.
///
/// The disc is sampled by area (square-root radius), so there is no bias towards
/// the axis. Height is uniform over `[-height/2, height/2]` around the center.
pub fn sample_in_cylinder(volume: &CylinderVolume, rng: &mut dyn RngCore) -> Vec3 {
    let r = volume.radius * rand01(rng).sqrt();
    let theta = std::f32::consts::TAU * rand01(rng);
    let half_height = volume.height * 0.5;
    let y = rand_range(rng, -half_height, half_height);
    volume.center + Vec3::new(r * theta.cos(), y, r * theta.sin())
}

/// Uniform point strictly inside `volume`, by rejection from its XZ bounding rectangle.
///
/// Fails with [`Error::DegenerateVolume`] for zero-area or non-finite triangles, or
/// when [`MAX_REJECTION_ATTEMPTS`] draws were all rejected.
pub fn sample_in_triangle(volume: &IsoscelesTriangle, rng: &mut dyn RngCore) -> Result<Vec3> {
    let area = volume.area();
    if !area.is_finite() || area <= 0.0 {
        return Err(Error::DegenerateVolume {
            shape: "isosceles triangle",
            attempts: 0,
        });
    }

    // Drawn relative to the center so thin triangles far from the origin keep precision.
    let [p1, p2, p3] = volume.local_vertices();
    for _ in 0..MAX_REJECTION_ATTEMPTS {
        let offset = Vec3::new(rand_range(rng, p1.x, p2.x), 0.0, rand_range(rng, p1.z, p3.z));
        if volume.contains_local(offset) {
            return Ok(volume.center + offset);
        }
    }

    Err(Error::DegenerateVolume {
        shape: "isosceles triangle",
        attempts: MAX_REJECTION_ATTEMPTS,
    })
}

impl VolumeSampling for BoxVolume {
    fn sample_point(&self, rng: &mut dyn RngCore) -> Result<Vec3> {
        Ok(sample_in_box(self, rng))
    }
}

impl VolumeSampling for CylinderVolume {
    fn sample_point(&self, rng: &mut dyn RngCore) -> Result<Vec3> {
        Ok(sample_in_cylinder(self, rng))
    }
}

impl VolumeSampling for IsoscelesTriangle {
    fn sample_point(&self, rng: &mut dyn RngCore) -> Result<Vec3> {
        sample_in_triangle(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::test_rng::FixedRng;

    #[test]
    fn box_samples_stay_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = BoxVolume::new(Vec3::new(3.0, -1.0, 2.0), Vec3::new(4.0, 2.0, 0.0));
        for _ in 0..1000 {
            let p = sample_in_box(&b, &mut rng);
            assert!(b.contains(p), "{p:?} escaped {b:?}");
            assert_eq!(p.z, 2.0);
        }
    }

    #[test]
    fn cylinder_samples_stay_inside() {
        let mut rng = StdRng::seed_from_u64(11);
        let c = CylinderVolume::new(Vec3::new(-2.0, 5.0, 1.0), 3.0, 2.0);
        for _ in 0..1000 {
            let p = sample_in_cylinder(&c, &mut rng);
            assert!(c.contains(p), "{p:?} escaped {c:?}");
        }
    }

    #[test]
    fn cylinder_disc_has_no_center_bias() {
        // For an area-uniform disc of radius R the mean radial distance is 2R/3.
        let mut rng = StdRng::seed_from_u64(2024);
        let c = CylinderVolume::new(Vec3::ZERO, 1.0, 0.0);
        let n = 20_000;
        let mut sum = 0.0f32;
        let mut inner = 0usize;
        for _ in 0..n {
            let p = sample_in_cylinder(&c, &mut rng);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            sum += r;
            if r < 0.5 {
                inner += 1;
            }
        }
        let mean = sum / n as f32;
        assert!((mean - 2.0 / 3.0).abs() < 0.01, "mean radius {mean}");
        // The inner half-radius disc holds a quarter of the area.
        let inner_share = inner as f32 / n as f32;
        assert!((inner_share - 0.25).abs() < 0.02, "inner share {inner_share}");
    }

    #[test]
    fn triangle_samples_are_strictly_inside() {
        let mut rng = StdRng::seed_from_u64(99);
        let t = IsoscelesTriangle::new(Vec3::ZERO, 4.0, 90.0);
        for _ in 0..10_000 {
            let p = sample_in_triangle(&t, &mut rng).expect("valid triangle");
            assert!(t.contains(p));
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn triangle_samples_keep_center_height() {
        let mut rng = StdRng::seed_from_u64(3);
        let t = IsoscelesTriangle::new(Vec3::new(1.0, 4.0, -2.0), 3.0, 45.0);
        let p = sample_in_triangle(&t, &mut rng).expect("valid triangle");
        assert_eq!(p.y, 4.0);
    }

    #[test]
    fn thin_triangle_far_from_origin_still_samples() {
        let mut rng = StdRng::seed_from_u64(1000);
        let t = IsoscelesTriangle::new(Vec3::new(1000.0, 0.0, 1000.0), 0.01, 1.0);
        let h = t.height();
        for _ in 0..1000 {
            let p = sample_in_triangle(&t, &mut rng).expect("thin but valid triangle");
            let d = p - t.center;
            assert!(d.x.abs() <= 0.0051, "{d:?}");
            assert!(d.z >= -1e-4 && d.z <= h + 1e-4, "{d:?}");
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn zero_base_triangle_is_degenerate() {
        let mut rng = StdRng::seed_from_u64(1);
        let t = IsoscelesTriangle::new(Vec3::ZERO, 0.0, 45.0);
        let err = sample_in_triangle(&t, &mut rng).unwrap_err();
        assert!(matches!(err, Error::DegenerateVolume { attempts: 0, .. }));
    }

    #[test]
    fn zero_angle_triangle_is_degenerate() {
        let mut rng = StdRng::seed_from_u64(1);
        let t = IsoscelesTriangle::new(Vec3::ZERO, 2.0, 0.0);
        assert!(sample_in_triangle(&t, &mut rng).is_err());
    }

    #[test]
    fn rejection_loop_is_capped() {
        // A constant generator always proposes the base-left corner, which is never inside.
        let mut rng = FixedRng { value: 0 };
        let t = IsoscelesTriangle::new(Vec3::ZERO, 4.0, 90.0);
        let err = sample_in_triangle(&t, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            Error::DegenerateVolume {
                attempts: MAX_REJECTION_ATTEMPTS,
                ..
            }
        ));
    }

    #[test]
    fn trait_dispatch_matches_free_functions() {
        let b = BoxVolume::default();
        let mut rng_a = StdRng::seed_from_u64(5);
        let mut rng_b = StdRng::seed_from_u64(5);
        let via_trait = b.sample_point(&mut rng_a).expect("box never fails");
        assert_eq!(via_trait, sample_in_box(&b, &mut rng_b));
    }
}
