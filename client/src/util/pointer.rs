//! Pointer-event helpers for the grid surface.
//!
//! Positions are taken relative to the SVG root's bounding box rather than the
//! event target, so the same math works whichever cell rect received the event
//! and while the pointer is captured outside the grid.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use grid::cell::CellId;
use grid::layout::{self, Point};

/// Convert client coordinates to grid-local coordinates.
#[must_use]
pub fn local_point(client_x: f64, client_y: f64, origin_left: f64, origin_top: f64) -> Point {
    Point::new(client_x - origin_left, client_y - origin_top)
}

/// Cell under the client position, if it lies on the grid.
#[must_use]
pub fn cell_at_client(client_x: f64, client_y: f64, origin_left: f64, origin_top: f64) -> Option<CellId> {
    layout::cell_at(local_point(client_x, client_y, origin_left, origin_top))
}

/// Cell under a pointer event on `surface`.
#[cfg(feature = "csr")]
pub fn event_cell(ev: &leptos::ev::PointerEvent, surface: &web_sys::Element) -> Option<CellId> {
    let rect = surface.get_bounding_client_rect();
    cell_at_client(f64::from(ev.client_x()), f64::from(ev.client_y()), rect.left(), rect.top())
}
