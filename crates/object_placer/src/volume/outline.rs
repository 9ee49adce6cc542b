//! Wireframe outlines for placement volumes.
//!
//! Produces line segments in the parent's local space so an editor or debug
//! renderer can draw the active volume. Nothing here draws.
use glam::Vec3;

use crate::volume::{BoxVolume, CylinderVolume, IsoscelesTriangle};

/// Number of segments used per cylinder ring.
pub const CYLINDER_RING_SEGMENTS: usize = 32;

/// A straight line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec3,
    pub end: Vec3,
}

impl LineSegment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// The 12 edges of a box.
pub fn box_edges(volume: &BoxVolume) -> Vec<LineSegment> {
    let (min, max) = (volume.min(), volume.max());
    let corner = |i: usize| {
        Vec3::new(
            if i & 1 == 0 { min.x } else { max.x },
            if i & 2 == 0 { min.y } else { max.y },
            if i & 4 == 0 { min.z } else { max.z },
        )
    };

    let mut edges = Vec::with_capacity(12);
    for i in 0..8usize {
        for bit in [1usize, 2, 4] {
            if i & bit == 0 {
                edges.push(LineSegment::new(corner(i), corner(i | bit)));
            }
        }
    }
    edges
}

/// Top and bottom rings of a cylinder, each a closed loop of `segments` lines.
pub fn cylinder_rings(volume: &CylinderVolume, segments: usize) -> Vec<LineSegment> {
    let segments = segments.max(3);
    let half_height = volume.height * 0.5;
    let mut lines = Vec::with_capacity(segments * 2);

    for y in [-half_height, half_height] {
        let ring: Vec<Vec3> = (0..segments)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / segments as f32;
                volume.center
                    + Vec3::new(angle.cos() * volume.radius, y, angle.sin() * volume.radius)
            })
            .collect();
        for i in 0..segments {
            lines.push(LineSegment::new(ring[i], ring[(i + 1) % segments]));
        }
    }

    lines
}

/// Grid lines through the cell centers of a `rows x columns` alignment grid.
///
/// Rows split the X extent and columns split the Z extent, matching
/// [`crate::sampling::grid::aligned_position`]. Lines lie at the box's mid-height.
pub fn grid_lines(volume: &BoxVolume, rows: usize, columns: usize) -> Vec<LineSegment> {
    let rows = rows.max(1);
    let columns = columns.max(1);
    let (min, max) = (volume.min(), volume.max());
    let cell_width = (max.x - min.x) / rows as f32;
    let cell_depth = (max.z - min.z) / columns as f32;
    let y = (min.y + max.y) * 0.5;

    let mut lines = Vec::with_capacity(rows + columns);
    for i in 0..rows {
        let x = min.x + cell_width * i as f32 + cell_width * 0.5;
        lines.push(LineSegment::new(
            Vec3::new(x, y, min.z),
            Vec3::new(x, y, max.z),
        ));
    }
    for i in 0..columns {
        let z = min.z + cell_depth * i as f32 + cell_depth * 0.5;
        lines.push(LineSegment::new(
            Vec3::new(min.x, y, z),
            Vec3::new(max.x, y, z),
        ));
    }
    lines
}

pub fn triangle_edges(volume: &IsoscelesTriangle) -> Vec<LineSegment> {
    let [p1, p2, p3] = volume.vertices();
    vec![
        LineSegment::new(p1, p2),
        LineSegment::new(p2, p3),
        LineSegment::new(p3, p1),
    ]
}
