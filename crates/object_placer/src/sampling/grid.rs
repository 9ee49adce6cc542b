//! Deterministic grid alignment inside a box.
use glam::Vec3;

use crate::volume::BoxVolume;

/// Row-major `(row, column)` cell for `index`.
///
/// Indices past `rows * columns` wrap around, so `index` and
/// `index + rows * columns` share a cell.
#[inline]
pub fn grid_cell(rows: usize, columns: usize, index: usize) -> (usize, usize) {
    debug_assert!(rows >= 1, "rows must be >= 1");
    debug_assert!(columns >= 1, "columns must be >= 1");
    ((index / columns) % rows, index % columns)
}

/// Center of cell `index` in a `rows x columns` grid laid over the XZ footprint of
/// `volume`, at the box's mid-height.
///
/// Rows divide the X extent and columns divide the Z extent. Callers clamp
/// `rows` and `columns` to at least 1 beforehand.
pub fn aligned_position(volume: &BoxVolume, rows: usize, columns: usize, index: usize) -> Vec3 {
    let (row, column) = grid_cell(rows, columns, index);
    let (min, max) = (volume.min(), volume.max());
    let cell_width = (max.x - min.x) / rows as f32;
    let cell_depth = (max.z - min.z) / columns as f32;

    Vec3::new(
        min.x + cell_width * row as f32 + cell_width * 0.5,
        (min.y + max.y) * 0.5,
        min.z + cell_depth * column as f32 + cell_depth * 0.5,
    )
}
