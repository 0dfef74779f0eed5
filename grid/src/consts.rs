//! Shared numeric constants for the grid crate.

// ── Grid ────────────────────────────────────────────────────────

/// Number of cells along each side of the square grid.
pub const GRID_SIZE: u8 = 26;

/// Side length of one rendered cell, in CSS pixels.
pub const CELL_SIZE_PX: f64 = 30.0;

// ── Animation ───────────────────────────────────────────────────

/// Delay between consecutive path highlights, in milliseconds.
pub const PATH_STEP_MS: u32 = 100;

// ── Colours ─────────────────────────────────────────────────────

/// Grid line colour.
pub const CELL_STROKE: &str = "#ddd";

/// SVG namespace used when creating cell elements.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
