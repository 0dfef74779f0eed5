#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// cell_at
// =============================================================

#[test]
fn cell_at_origin_is_first_cell() {
    assert_eq!(cell_at(pt(0.0, 0.0)), CellId::new(0, 0));
}

#[test]
fn cell_at_maps_inside_pixels_to_cell() {
    assert_eq!(cell_at(pt(29.9, 29.9)), CellId::new(0, 0));
    assert_eq!(cell_at(pt(30.0, 0.0)), CellId::new(1, 0));
    assert_eq!(cell_at(pt(75.0, 100.0)), CellId::new(2, 3));
}

#[test]
fn cell_at_last_pixel_is_last_cell() {
    let edge = grid_extent_px() - 0.5;
    assert_eq!(cell_at(pt(edge, edge)), CellId::new(GRID_SIZE - 1, GRID_SIZE - 1));
}

#[test]
fn cell_at_outside_grid_is_none() {
    assert!(cell_at(pt(-1.0, 5.0)).is_none());
    assert!(cell_at(pt(5.0, -0.1)).is_none());
    assert!(cell_at(pt(grid_extent_px(), 5.0)).is_none());
    assert!(cell_at(pt(5.0, grid_extent_px() + 10.0)).is_none());
}

#[test]
fn cell_at_rejects_non_finite() {
    assert!(cell_at(pt(f64::NAN, 0.0)).is_none());
    assert!(cell_at(pt(0.0, f64::INFINITY)).is_none());
}

// =============================================================
// cell_origin / extent
// =============================================================

#[test]
fn grid_extent_is_780px() {
    assert_eq!(grid_extent_px(), 780.0);
}

#[test]
fn cell_origin_scales_by_cell_size() {
    let origin = cell_origin(CellId::new(3, 5).unwrap());
    assert_eq!(origin, pt(90.0, 150.0));
}

#[test]
fn cell_origin_round_trips_through_cell_at() {
    for cell in CellId::all() {
        let origin = cell_origin(cell);
        assert_eq!(cell_at(pt(origin.x + 1.0, origin.y + 1.0)), Some(cell));
    }
}
