//! Transforms and the [`Placeable`] abstraction.
//!
//! A [`Placeable`] is any object the placement pass can read and write: a scene
//! node, an ECS entity, an editor handle. The crate never owns placeables; it only
//! borrows them for the duration of a call.
use glam::{Quat, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position, rotation and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Map a point from this transform's local space to its parent space.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.position + self.rotation * (self.scale * p)
    }

    /// Map a point from parent space into this transform's local space.
    ///
    /// Zero scale components yield non-finite coordinates.
    #[inline]
    pub fn inverse_transform_point(&self, p: Vec3) -> Vec3 {
        (self.rotation.inverse() * (p - self.position)) / self.scale
    }

    /// Compose `self` (as parent) with `child`.
    ///
    /// The resulting scale is the component-wise product, which is exact only
    /// when the parent has no rotation relative to a non-uniform child scale.
    pub fn mul_transform(&self, child: &Transform) -> Transform {
        Transform {
            position: self.transform_point(child.position),
            rotation: (self.rotation * child.rotation).normalize(),
            scale: self.scale * child.scale,
        }
    }

    pub fn abs_diff_eq(&self, other: &Transform, max_abs_diff: f32) -> bool {
        self.position.abs_diff_eq(other.position, max_abs_diff)
            && same_rotation(self.rotation, other.rotation, max_abs_diff)
            && self.scale.abs_diff_eq(other.scale, max_abs_diff)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `q` and `-q` describe the same rotation.
#[inline]
/// `numerator / denominator` per component; components with a zero denominator keep
/// `fallback`.
pub(crate) fn divide_or_keep(numerator: Vec3, denominator: Vec3, fallback: Vec3) -> Vec3 {
    let div = |n: f32, d: f32, f: f32| if d == 0.0 { f } else { n / d };
    Vec3::new(
        div(numerator.x, denominator.x, fallback.x),
        div(numerator.y, denominator.y, fallback.y),
        div(numerator.z, denominator.z, fallback.z),
    )
}

pub(crate) fn same_rotation(a: Quat, b: Quat, max_abs_diff: f32) -> bool {
    a.abs_diff_eq(b, max_abs_diff) || a.abs_diff_eq(-b, max_abs_diff)
}

/// Coordinate space used when reading or writing transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Space {
    /// Relative to the placeable's parent.
    #[default]
    Local,
    /// Absolute; scale is the accumulated (lossy) world scale.
    World,
}

/// An object whose transform the placement pass can read and write.
pub trait Placeable {
    fn local_transform(&self) -> Transform;

    fn set_local_transform(&mut self, transform: Transform);

    /// World transform; `scale` is the lossy world scale.
    fn world_transform(&self) -> Transform;

    /// Set world position and rotation, leaving the local scale untouched.
    fn set_world_pose(&mut self, position: Vec3, rotation: Quat);

    /// World scale of the parent, or `None` for root objects.
    fn parent_world_scale(&self) -> Option<Vec3>;

    fn set_local_scale(&mut self, scale: Vec3) {
        let local = self.local_transform();
        self.set_local_transform(local.with_scale(scale));
    }

    fn set_local_pose(&mut self, position: Vec3, rotation: Quat) {
        let local = self.local_transform();
        self.set_local_transform(Transform {
            position,
            rotation,
            scale: local.scale,
        });
    }

    fn transform_in(&self, space: Space) -> Transform {
        match space {
            Space::Local => self.local_transform(),
            Space::World => self.world_transform(),
        }
    }
}

impl<P: Placeable + ?Sized> Placeable for Box<P> {
    fn local_transform(&self) -> Transform {
        (**self).local_transform()
    }

    fn set_local_transform(&mut self, transform: Transform) {
        (**self).set_local_transform(transform)
    }

    fn world_transform(&self) -> Transform {
        (**self).world_transform()
    }

    fn set_world_pose(&mut self, position: Vec3, rotation: Quat) {
        (**self).set_world_pose(position, rotation)
    }

    fn parent_world_scale(&self) -> Option<Vec3> {
        (**self).parent_world_scale()
    }
}

/// In-memory placeable: a named node with a local transform under an optional,
/// fixed parent world transform.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub local: Transform,
    pub parent: Option<Transform>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local: Transform::IDENTITY,
            parent: None,
        }
    }

    pub fn with_local(mut self, local: Transform) -> Self {
        self.local = local;
        self
    }

    pub fn with_parent(mut self, parent: Transform) -> Self {
        self.parent = Some(parent);
        self
    }
}

impl Placeable for SceneNode {
    fn local_transform(&self) -> Transform {
        self.local
    }

    fn set_local_transform(&mut self, transform: Transform) {
        self.local = transform;
    }

    fn world_transform(&self) -> Transform {
        match &self.parent {
            Some(parent) => parent.mul_transform(&self.local),
            None => self.local,
        }
    }

    fn set_world_pose(&mut self, position: Vec3, rotation: Quat) {
        match &self.parent {
            Some(parent) => {
                let unscaled = parent.rotation.inverse() * (position - parent.position);
                self.local.position = divide_or_keep(unscaled, parent.scale, self.local.position);
                self.local.rotation = (parent.rotation.inverse() * rotation).normalize();
            }
            None => {
                self.local.position = position;
                self.local.rotation = rotation;
            }
        }
    }

    fn parent_world_scale(&self) -> Option<Vec3> {
        self.parent.map(|p| p.scale)
    }
}
