//! Placement volumes.
//!
//! Plain value types describing where objects may be placed, all expressed in the
//! local space of the placement parent:
//! - [`BoxVolume`]: axis-aligned box given by center and size.
//! - [`CylinderVolume`]: cylinder aligned to the local Y axis.
//! - [`IsoscelesTriangle`]: triangle in the XZ plane with its base on the X axis.
//!
//! Volumes are never validated on construction; degenerate shapes surface as
//! [`crate::error::Error::DegenerateVolume`] when sampled.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod outline;

/// Axis-aligned box described by its center and full size.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxVolume {
    pub center: Vec3,
    /// Full extent along each axis. Components are expected to be >= 0.
    pub size: Vec3,
}

impl BoxVolume {
    pub fn new(center: impl Into<Vec3>, size: impl Into<Vec3>) -> Self {
        Self {
            center: center.into(),
            size: size.into(),
        }
    }

    /// Build a box spanning `min..=max`.
    pub fn from_min_max(min: impl Into<Vec3>, max: impl Into<Vec3>) -> Self {
        let (min, max) = (min.into(), max.into());
        Self {
            center: (min + max) * 0.5,
            size: max - min,
        }
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.size * 0.5
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.size * 0.5
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Vec3) -> bool {
        let (min, max) = (self.min(), self.max());
        p.cmpge(min).all() && p.cmple(max).all()
    }
}

impl Default for BoxVolume {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ONE)
    }
}

/// Cylinder aligned to the local Y axis, centered at `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CylinderVolume {
    pub center: Vec3,
    pub radius: f32,
    pub height: f32,
}

impl CylinderVolume {
    pub fn new(center: impl Into<Vec3>, radius: f32, height: f32) -> Self {
        Self {
            center: center.into(),
            radius,
            height,
        }
    }

    /// Inclusive containment test with a small tolerance on the disc boundary.
    pub fn contains(&self, p: Vec3) -> bool {
        let d = p - self.center;
        let radial_sq = d.x * d.x + d.z * d.z;
        let r = self.radius * (1.0 + 1e-5);
        radial_sq <= r * r && d.y.abs() <= self.height * 0.5
    }
}

impl Default for CylinderVolume {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0, 0.0)
    }
}

/// Isosceles triangle in the XZ plane.
///
/// The base runs along X through `center`, and the apex sits on +Z at a distance of
/// `base_length * tan(apex_angle / 2)` from the base. All vertices share `center.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IsoscelesTriangle {
    pub center: Vec3,
    pub base_length: f32,
    /// Apex parameter in degrees, expected in (0, 180).
    pub apex_angle_degrees: f32,
}

impl IsoscelesTriangle {
    pub fn new(center: impl Into<Vec3>, base_length: f32, apex_angle_degrees: f32) -> Self {
        Self {
            center: center.into(),
            base_length,
            apex_angle_degrees,
        }
    }

    #[inline]
    pub fn apex_angle_radians(&self) -> f32 {
        self.apex_angle_degrees.to_radians()
    }

    /// Distance from the base to the apex along +Z.
    #[inline]
    pub fn height(&self) -> f32 {
        self.base_length * (self.apex_angle_radians() * 0.5).tan()
    }

    /// Left end of the base.
    #[inline]
    pub fn p1(&self) -> Vec3 {
        self.center - Vec3::new(self.base_length * 0.5, 0.0, 0.0)
    }

    /// Right end of the base.
    #[inline]
    pub fn p2(&self) -> Vec3 {
        self.center + Vec3::new(self.base_length * 0.5, 0.0, 0.0)
    }

    /// Apex.
    #[inline]
    pub fn p3(&self) -> Vec3 {
        self.center + Vec3::new(0.0, 0.0, self.height())
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.p1(), self.p2(), self.p3()]
    }

    /// Unsigned area in the XZ plane.
    pub fn area(&self) -> f32 {
        (self.base_length * self.height() * 0.5).abs()
    }

    /// Vertices relative to `center`, in the same order as [`Self::vertices`].
    pub fn local_vertices(&self) -> [Vec3; 3] {
        let half = self.base_length * 0.5;
        [
            Vec3::new(-half, 0.0, 0.0),
            Vec3::new(half, 0.0, 0.0),
            Vec3::new(0.0, 0.0, self.height()),
        ]
    }

    /// Strict same-side test: points on an edge are outside.
    pub fn contains(&self, p: Vec3) -> bool {
        self.contains_local(p - self.center)
    }

    /// [`Self::contains`] for a point given relative to `center`.
    pub fn contains_local(&self, offset: Vec3) -> bool {
        let [p1, p2, p3] = self.local_vertices();
        let d1 = edge_sign(offset, p1, p2);
        let d2 = edge_sign(offset, p2, p3);
        let d3 = edge_sign(offset, p3, p1);
        (d1 > 0.0 && d2 > 0.0 && d3 > 0.0) || (d1 < 0.0 && d2 < 0.0 && d3 < 0.0)
    }
}

impl Default for IsoscelesTriangle {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 3.0, 45.0)
    }
}

/// Orientation of `p` relative to the directed edge `a -> b`, projected on XZ.
#[inline]
fn edge_sign(p: Vec3, a: Vec3, b: Vec3) -> f32 {
    (p.x - b.x) * (a.z - b.z) - (a.x - b.x) * (p.z - b.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_min_max_follow_center_and_size() {
        let b = BoxVolume::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(b.min(), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(b.max(), Vec3::new(2.0, 4.0, 6.0));
        assert!(b.contains(Vec3::new(2.0, 4.0, 6.0)));
        assert!(!b.contains(Vec3::new(2.1, 4.0, 6.0)));
    }

    #[test]
    fn box_from_min_max_round_trips() {
        let b = BoxVolume::from_min_max(Vec3::new(-1.0, 0.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(b.center, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(b.size, Vec3::new(2.0, 2.0, 6.0));
    }

    #[test]
    fn thin_triangle_far_from_origin_keeps_interior() {
        let t = IsoscelesTriangle::new(Vec3::new(1000.0, 0.0, 1000.0), 0.01, 1.0);
        let inside = Vec3::new(0.0, 0.0, t.height() * 0.5);
        assert!(t.contains_local(inside));
        assert!(!t.contains_local(Vec3::new(0.004, 0.0, t.height() * 0.9)));
    }

    #[test]
    fn box_accepts_mint_vectors() {
        let b = BoxVolume::new(
            mint::Vector3 { x: 0.0, y: 0.0, z: 0.0 },
            mint::Vector3 { x: 1.0, y: 1.0, z: 1.0 },
        );
        assert_eq!(b, BoxVolume::default());
    }

    #[test]
    fn triangle_vertices_match_base_and_apex() {
        let t = IsoscelesTriangle::new(Vec3::ZERO, 4.0, 90.0);
        assert_eq!(t.p1(), Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(t.p2(), Vec3::new(2.0, 0.0, 0.0));
        let p3 = t.p3();
        assert_eq!(p3.x, 0.0);
        assert_eq!(p3.y, 0.0);
        assert!((p3.z - 4.0).abs() < 1e-5);
        assert!((t.area() - 8.0).abs() < 1e-4);
    }

    #[test]
    fn triangle_vertices_share_center_height() {
        let t = IsoscelesTriangle::new(Vec3::new(5.0, 7.5, -1.0), 2.0, 60.0);
        for v in t.vertices() {
            assert_eq!(v.y, 7.5);
        }
    }

    #[test]
    fn triangle_containment_is_strict() {
        let t = IsoscelesTriangle::new(Vec3::ZERO, 4.0, 90.0);
        assert!(t.contains(Vec3::new(0.0, 0.0, 1.0)));
        assert!(t.contains(Vec3::new(0.0, 123.0, 1.0)));
        // On the base edge.
        assert!(!t.contains(Vec3::new(0.0, 0.0, 0.0)));
        // On a vertex.
        assert!(!t.contains(Vec3::new(-2.0, 0.0, 0.0)));
        // Outside next to the slanted edge.
        assert!(!t.contains(Vec3::new(1.9, 0.0, 3.0)));
    }

    #[test]
    fn cylinder_contains_respects_radius_and_height() {
        let c = CylinderVolume::new(Vec3::new(1.0, 1.0, 1.0), 2.0, 4.0);
        assert!(c.contains(Vec3::new(3.0, 3.0, 1.0)));
        assert!(!c.contains(Vec3::new(3.0, 3.5, 1.0)));
        assert!(!c.contains(Vec3::new(2.5, 1.0, 2.5)));
    }
}
