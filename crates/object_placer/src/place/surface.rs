//! Surface projection: snapping placed positions onto walkable ground.
use glam::Vec3;

/// Finds the nearest surface point within `max_distance` of `position`.
///
/// Implementations return `None` when nothing lies within range; the placement
/// pass then keeps the unprojected position.
pub trait SurfaceProjector {
    fn project(&self, position: Vec3, max_distance: f32) -> Option<Vec3>;
}

/// No surface anywhere; every projection falls back to the input.
impl SurfaceProjector for () {
    #[inline]
    fn project(&self, _position: Vec3, _max_distance: f32) -> Option<Vec3> {
        None
    }
}

impl<F> SurfaceProjector for F
where
    F: Fn(Vec3, f32) -> Option<Vec3>,
{
    fn project(&self, position: Vec3, max_distance: f32) -> Option<Vec3> {
        self(position, max_distance)
    }
}

/// Infinite horizontal plane at `height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatGround {
    pub height: f32,
}

impl FlatGround {
    pub fn new(height: f32) -> Self {
        Self { height }
    }
}

impl SurfaceProjector for FlatGround {
    fn project(&self, position: Vec3, max_distance: f32) -> Option<Vec3> {
        if (position.y - self.height).abs() <= max_distance {
            Some(Vec3::new(position.x, self.height, position.z))
        } else {
            None
        }
    }
}

/// Project `position`, keeping it when no surface is in range. The flag tells
/// whether a surface was found.
pub fn project_or_keep(
    projector: &dyn SurfaceProjector,
    position: Vec3,
    max_distance: f32,
) -> (Vec3, bool) {
    match projector.project(position, max_distance) {
        Some(p) => (p, true),
        None => (position, false),
    }
}
