//! Rendering seam: visual roles and the renderer trait.
//!
//! The engine never touches the DOM. It describes each repaint as a
//! `(CellId, CellRole)` pair and hands it to a [`CellRenderer`]. The browser
//! backend lives in [`crate::svg`]; tests use an in-memory recorder.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::cell::CellId;

/// How a cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CellRole {
    /// Plain, walkable cell.
    #[default]
    Empty,
    /// The start cell.
    Start,
    /// The end cell.
    End,
    /// Impassable cell.
    Barrier,
    /// Highlighted as part of a found path.
    Path,
}

impl CellRole {
    /// CSS fill colour for the role.
    #[must_use]
    pub fn fill(self) -> &'static str {
        match self {
            Self::Empty => "white",
            Self::Start => "green",
            Self::End => "red",
            Self::Barrier => "black",
            Self::Path => "blue",
        }
    }
}

/// A backend able to repaint individual cells.
pub trait CellRenderer {
    type Error;

    /// Draw `cell` with `role`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error when the repaint fails.
    fn paint(&mut self, cell: CellId, role: CellRole) -> Result<(), Self::Error>;

    /// Draw every cell as [`CellRole::Empty`].
    ///
    /// # Errors
    ///
    /// Stops at and returns the first failed repaint.
    fn reset_all(&mut self) -> Result<(), Self::Error> {
        for cell in CellId::all() {
            self.paint(cell, CellRole::Empty)?;
        }
        Ok(())
    }
}
