//! Pixel layout of the rendered grid and pointer hit-testing.
//!
//! The grid is drawn from the SVG origin with square cells of
//! [`CELL_SIZE_PX`]. Pointer positions are measured from the SVG top-left corner.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::cell::CellId;
use crate::consts::{CELL_SIZE_PX, GRID_SIZE};

/// A point in SVG space (CSS pixels from the grid's top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Total width and height of the rendered grid in pixels.
#[must_use]
pub fn grid_extent_px() -> f64 {
    f64::from(GRID_SIZE) * CELL_SIZE_PX
}

/// The cell under `pt`, or `None` when the point is outside the grid.
#[must_use]
pub fn cell_at(pt: Point) -> Option<CellId> {
    if !pt.x.is_finite() || !pt.y.is_finite() || pt.x < 0.0 || pt.y < 0.0 {
        return None;
    }
    let extent = grid_extent_px();
    if pt.x >= extent || pt.y >= extent {
        return None;
    }
    let col = axis_index(pt.x)?;
    let row = axis_index(pt.y)?;
    CellId::new(col, row)
}

/// Top-left corner of a cell.
#[must_use]
pub fn cell_origin(cell: CellId) -> Point {
    Point {
        x: f64::from(cell.x()) * CELL_SIZE_PX,
        y: f64::from(cell.y()) * CELL_SIZE_PX,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn axis_index(px: f64) -> Option<u8> {
    let idx = (px / CELL_SIZE_PX).floor();
    if idx < f64::from(GRID_SIZE) {
        Some(idx as u8)
    } else {
        None
    }
}
