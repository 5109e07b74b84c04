//! Cell grid placement in the synthesis frame.
//!
//! Synthesis works Y-up: columns grow along +X, lines along +Z, and dots
//! stand on the plane `y = 0`. Within a cell, dots 1-2-3 run from the
//! line's leading edge (smallest Z) towards +Z in the left column, 4-5-6 in
//! the right column, so dot 1 faces the previous line.

use glam::Vec3;
use serde::Serialize;

use crate::config::Dimensions;
use crate::table::DOTS_PER_CELL;

const ROWS_PER_CELL: usize = 3;

/// World placement rules for one set of scaled dimensions.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    dims: Dimensions,
}

impl Layout {
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self { dims }
    }

    #[must_use]
    pub fn dims(&self) -> &Dimensions {
        &self.dims
    }

    /// World origin of the cell at grid coordinate (`column`, `line`).
    #[must_use]
    pub fn cell_origin(&self, column: usize, line: usize) -> Vec3 {
        #[allow(clippy::cast_precision_loss)]
        let (col, row) = (column as f32, line as f32);
        Vec3::new(col * self.dims.cell_spacing_x, 0.0, row * self.dims.line_spacing_y)
    }

    /// Offset of dot slot `slot` (dot number minus one) from its cell origin,
    /// `None` for a slot outside the cell.
    #[must_use]
    pub fn slot_offset(&self, slot: usize) -> Option<Vec3> {
        if slot >= DOTS_PER_CELL {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let (col, row) = ((slot / ROWS_PER_CELL) as f32, (slot % ROWS_PER_CELL) as f32);
        Some(Vec3::new(col * self.dims.dot_spacing_x, 0.0, row * self.dims.dot_spacing_y))
    }

    /// Span of every dot origin a grid of `columns` by `lines` cells can hold.
    #[must_use]
    pub fn footprint(&self, columns: usize, lines: usize) -> Option<Footprint> {
        if columns == 0 || lines == 0 {
            return None;
        }
        let first = self.cell_origin(0, 0) + self.slot_offset(0)?;
        let last = self.cell_origin(columns - 1, lines - 1) + self.slot_offset(DOTS_PER_CELL - 1)?;
        Some(Footprint { min_x: first.x, max_x: last.x, min_z: first.z, max_z: last.z })
    }
}

/// Axis-aligned span of dot origins in the grid plane, dot radius excluded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Footprint {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Footprint {
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn depth(&self) -> f32 {
        self.max_z - self.min_z
    }

    /// Grow to include `point`.
    #[must_use]
    pub fn including(self, point: Vec3) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            max_x: self.max_x.max(point.x),
            min_z: self.min_z.min(point.z),
            max_z: self.max_z.max(point.z),
        }
    }
}

/// Base plate sized around a footprint. Its top face is the plane `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Plate {
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub center_x: f32,
    pub center_z: f32,
}

impl Plate {
    /// Footprint plus one dot radius plus padding on every side.
    #[must_use]
    pub fn around(footprint: &Footprint, dims: &Dimensions) -> Self {
        Self {
            width: footprint.width() + 2.0 * (dims.dot_radius + dims.padding_x),
            depth: footprint.depth() + 2.0 * (dims.dot_radius + dims.padding_y),
            height: dims.base_height,
            center_x: f32::midpoint(footprint.min_x, footprint.max_x),
            center_z: f32::midpoint(footprint.min_z, footprint.max_z),
        }
    }

    #[must_use]
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.center_x - self.width / 2.0, -self.height, self.center_z - self.depth / 2.0)
    }

    #[must_use]
    pub fn max(&self) -> Vec3 {
        Vec3::new(self.center_x + self.width / 2.0, 0.0, self.center_z + self.depth / 2.0)
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
