//! Placement configuration.
//!
//! [`PlacementConfig`] gathers everything a placement pass needs besides the targets
//! themselves: the mode, the volume for each mode, per-object variation
//! ([`PlacementOptions`]), the active index window ([`IndexRange`]) and the space
//! snapshots are applied in. With the `serde` feature every type here is
//! (de)serializable; the `ron` feature adds RON text helpers.
use std::ops::Range;

use glam::{Quat, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sampling::VolumeSampling;
use crate::transform::Space;
use crate::volume::outline::{
    box_edges, cylinder_rings, grid_lines, triangle_edges, LineSegment, CYLINDER_RING_SEGMENTS,
};
use crate::volume::{BoxVolume, CylinderVolume, IsoscelesTriangle};

/// How base positions are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlacementMode {
    /// Uniform random point in the box.
    #[default]
    RandomInBox,
    /// Uniform random point in the cylinder.
    RandomInCylinder,
    /// Replay a transform snapshot; options are ignored.
    Preset,
    /// Cell centers of a rows x columns grid over the box.
    AlignInGrid,
    /// Keep positions, only rotate (and optionally offset and scale).
    RotationOnly,
    /// Uniform random point in the isosceles triangle.
    RandomInTriangle,
}

/// Per-object variation applied on top of the base position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementOptions {
    /// Draw a random rotation instead of using `fixed_rotation`.
    pub sample_rotation: bool,
    pub fixed_rotation: Quat,
    /// Euler bounds in degrees.
    pub min_rotation_euler: Vec3,
    pub max_rotation_euler: Vec3,

    pub add_random_offset: bool,
    pub min_offset: Vec3,
    pub max_offset: Vec3,

    /// Multiply the current local scale by a random factor.
    pub multiply_random_scale: bool,
    pub min_scale: Vec3,
    pub max_scale: Vec3,

    /// Snap positions onto a surface through a [`crate::place::surface::SurfaceProjector`].
    pub project_onto_surface: bool,
    pub surface_sample_radius: f32,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            sample_rotation: true,
            fixed_rotation: Quat::IDENTITY,
            min_rotation_euler: Vec3::new(0.0, -180.0, 0.0),
            max_rotation_euler: Vec3::new(0.0, 180.0, 0.0),
            add_random_offset: false,
            min_offset: Vec3::ZERO,
            max_offset: Vec3::ZERO,
            multiply_random_scale: false,
            min_scale: Vec3::splat(0.9),
            max_scale: Vec3::splat(1.1),
            project_onto_surface: true,
            surface_sample_radius: 1.0,
        }
    }
}

impl PlacementOptions {
    /// Options that leave everything but the base position untouched.
    pub fn plain() -> Self {
        Self {
            sample_rotation: false,
            project_onto_surface: false,
            ..Self::default()
        }
    }

    pub fn with_fixed_rotation(mut self, rotation: Quat) -> Self {
        self.sample_rotation = false;
        self.fixed_rotation = rotation;
        self
    }

    pub fn with_rotation_range(mut self, min_euler: Vec3, max_euler: Vec3) -> Self {
        self.sample_rotation = true;
        self.min_rotation_euler = min_euler;
        self.max_rotation_euler = max_euler;
        self
    }

    pub fn with_random_offset(mut self, min: Vec3, max: Vec3) -> Self {
        self.add_random_offset = true;
        self.min_offset = min;
        self.max_offset = max;
        self
    }

    pub fn with_random_scale(mut self, min: Vec3, max: Vec3) -> Self {
        self.multiply_random_scale = true;
        self.min_scale = min;
        self.max_scale = max;
        self
    }

    pub fn with_surface_projection(mut self, sample_radius: f32) -> Self {
        self.project_onto_surface = true;
        self.surface_sample_radius = sample_radius;
        self
    }

    pub fn without_surface_projection(mut self) -> Self {
        self.project_onto_surface = false;
        self
    }

    fn validate(&self) -> Result<()> {
        let vectors = [
            ("min_rotation_euler", self.min_rotation_euler),
            ("max_rotation_euler", self.max_rotation_euler),
            ("min_offset", self.min_offset),
            ("max_offset", self.max_offset),
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
        ];
        for (name, v) in vectors {
            if !v.is_finite() {
                return Err(Error::InvalidConfig(format!("{name} must be finite")));
            }
        }
        if !self.fixed_rotation.is_finite() {
            return Err(Error::InvalidConfig("fixed_rotation must be finite".into()));
        }
        if self.project_onto_surface
            && !(self.surface_sample_radius.is_finite() && self.surface_sample_radius > 0.0)
        {
            return Err(Error::InvalidConfig(
                "surface_sample_radius must be > 0 when surface projection is enabled".into(),
            ));
        }
        Ok(())
    }
}

/// Window of target indices a pass touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexRange {
    /// When false, the whole list is used and `offset`/`count` are ignored.
    pub use_offset: bool,
    pub offset: usize,
    pub count: usize,
}

impl Default for IndexRange {
    fn default() -> Self {
        Self {
            use_offset: false,
            offset: 0,
            count: 50,
        }
    }
}

impl IndexRange {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn window(offset: usize, count: usize) -> Self {
        Self {
            use_offset: true,
            offset,
            count,
        }
    }

    /// Active indices for a list of length `len`. Never extends past `len`; an
    /// offset at or beyond `len` gives an empty range.
    pub fn resolve(&self, len: usize) -> Range<usize> {
        let (start, end) = if self.use_offset {
            (self.offset, self.offset.saturating_add(self.count))
        } else {
            (0, len)
        };
        let end = end.min(len);
        start..end.max(start)
    }
}

/// Full description of a placement setup.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlacementConfig {
    pub mode: PlacementMode,
    /// Volume for [`PlacementMode::RandomInBox`] and [`PlacementMode::AlignInGrid`].
    pub box_volume: BoxVolume,
    pub cylinder: CylinderVolume,
    pub triangle: IsoscelesTriangle,
    /// Grid cells along X.
    pub rows: usize,
    /// Grid cells along Z.
    pub columns: usize,
    pub options: PlacementOptions,
    pub range: IndexRange,
    /// Space snapshots are captured and applied in.
    pub space: Space,
    /// Desired number of placed objects, for count reconciliation.
    pub place_count: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            mode: PlacementMode::RandomInBox,
            box_volume: BoxVolume::default(),
            cylinder: CylinderVolume::default(),
            triangle: IsoscelesTriangle::default(),
            rows: 10,
            columns: 10,
            options: PlacementOptions::default(),
            range: IndexRange::default(),
            space: Space::Local,
            place_count: 50,
        }
    }
}

impl PlacementConfig {
    pub fn new(mode: PlacementMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn with_box(mut self, volume: BoxVolume) -> Self {
        self.box_volume = volume;
        self
    }

    pub fn with_cylinder(mut self, volume: CylinderVolume) -> Self {
        self.cylinder = volume;
        self
    }

    pub fn with_triangle(mut self, volume: IsoscelesTriangle) -> Self {
        self.triangle = volume;
        self
    }

    pub fn with_grid(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_options(mut self, options: PlacementOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_range(mut self, range: IndexRange) -> Self {
        self.range = range;
        self
    }

    pub fn with_space(mut self, space: Space) -> Self {
        self.space = space;
        self
    }

    pub fn with_place_count(mut self, place_count: usize) -> Self {
        self.place_count = place_count;
        self
    }

    /// Clamp grid dimensions to at least one cell.
    pub fn sanitized(mut self) -> Self {
        self.rows = self.rows.max(1);
        self.columns = self.columns.max(1);
        self
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Shape checks only apply to the volume the mode actually samples.
    pub fn validate(&self) -> Result<()> {
        self.options.validate()?;

        match self.mode {
            PlacementMode::RandomInBox | PlacementMode::AlignInGrid => {
                let b = &self.box_volume;
                if !b.center.is_finite() || !b.size.is_finite() {
                    return Err(Error::InvalidConfig("box volume must be finite".into()));
                }
                if b.size.min_element() < 0.0 {
                    return Err(Error::InvalidConfig("box size must be >= 0".into()));
                }
            }
            PlacementMode::RandomInCylinder => {
                let c = &self.cylinder;
                if !c.center.is_finite() || !c.radius.is_finite() || !c.height.is_finite() {
                    return Err(Error::InvalidConfig("cylinder must be finite".into()));
                }
                if c.radius < 0.0 || c.height < 0.0 {
                    return Err(Error::InvalidConfig(
                        "cylinder radius and height must be >= 0".into(),
                    ));
                }
            }
            PlacementMode::RandomInTriangle => {
                let t = &self.triangle;
                if !t.center.is_finite() {
                    return Err(Error::InvalidConfig("triangle center must be finite".into()));
                }
                if !(t.base_length.is_finite() && t.base_length > 0.0) {
                    return Err(Error::InvalidConfig(
                        "triangle base_length must be > 0".into(),
                    ));
                }
                if !(t.apex_angle_degrees > 0.0 && t.apex_angle_degrees < 180.0) {
                    return Err(Error::InvalidConfig(
                        "triangle apex_angle_degrees must be in (0, 180)".into(),
                    ));
                }
            }
            PlacementMode::Preset | PlacementMode::RotationOnly => {}
        }

        if self.mode == PlacementMode::AlignInGrid && (self.rows == 0 || self.columns == 0) {
            return Err(Error::InvalidConfig("rows and columns must be >= 1".into()));
        }

        Ok(())
    }

    /// Volume the current mode draws random positions from, if any.
    pub fn sampled_volume(&self) -> Option<&dyn VolumeSampling> {
        match self.mode {
            PlacementMode::RandomInBox => Some(&self.box_volume),
            PlacementMode::RandomInCylinder => Some(&self.cylinder),
            PlacementMode::RandomInTriangle => Some(&self.triangle),
            PlacementMode::AlignInGrid | PlacementMode::Preset | PlacementMode::RotationOnly => {
                None
            }
        }
    }

    /// Wireframe of the volume the current mode samples from.
    pub fn outline(&self) -> Vec<LineSegment> {
        match self.mode {
            PlacementMode::RandomInBox => box_edges(&self.box_volume),
            PlacementMode::RandomInCylinder => {
                cylinder_rings(&self.cylinder, CYLINDER_RING_SEGMENTS)
            }
            PlacementMode::AlignInGrid => grid_lines(&self.box_volume, self.rows, self.columns),
            PlacementMode::RandomInTriangle => triangle_edges(&self.triangle),
            PlacementMode::Preset | PlacementMode::RotationOnly => Vec::new(),
        }
    }

    #[cfg(feature = "ron")]
    pub fn from_ron_str(s: &str) -> Result<Self> {
        ron::from_str(s).map_err(|e| Error::Serialization(e.to_string()))
    }

    #[cfg(feature = "ron")]
    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| Error::Serialization(e.to_string()))
    }
}
