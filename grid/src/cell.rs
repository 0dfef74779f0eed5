//! Cell model: cell identities and the start/end/barrier store.
//!
//! `CellId` names one square of the fixed grid. `GridState` owns the three
//! roles a cell can hold (start, end, barrier) and enforces that a cell holds
//! at most one of them at a time. Path highlighting is purely visual and never
//! lives here; see [`crate::render::CellRole::Path`].

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::collections::HashSet;

use crate::consts::GRID_SIZE;
use crate::render::CellRole;

/// Coordinates of a single grid cell. Always inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId {
    x: u8,
    y: u8,
}

impl CellId {
    /// Build a cell id, returning `None` when either coordinate is off the grid.
    #[must_use]
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if x < GRID_SIZE && y < GRID_SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Build a cell id from signed wire coordinates.
    #[must_use]
    pub fn from_wire(x: i64, y: i64) -> Option<Self> {
        let (Ok(x), Ok(y)) = (u8::try_from(x), u8::try_from(y)) else {
            return None;
        };
        Self::new(x, y)
    }

    /// Column index.
    #[must_use]
    pub fn x(self) -> u8 {
        self.x
    }

    /// Row index.
    #[must_use]
    pub fn y(self) -> u8 {
        self.y
    }

    /// The `"x-y"` string id used for DOM lookups.
    #[must_use]
    pub fn key(self) -> String {
        format!("{}-{}", self.x, self.y)
    }

    /// The `[x, y]` pair used on the wire.
    #[must_use]
    pub fn as_pair(self) -> [u8; 2] {
        [self.x, self.y]
    }

    /// Every cell of the grid, column-major (`x` outer, `y` inner).
    pub fn all() -> impl Iterator<Item = CellId> {
        (0..GRID_SIZE).flat_map(|x| (0..GRID_SIZE).map(move |y| CellId { x, y }))
    }
}

/// The editable content of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridState {
    /// The start cell, if placed.
    pub start: Option<CellId>,
    /// The end cell, if placed.
    pub end: Option<CellId>,
    /// Impassable cells.
    pub barriers: HashSet<CellId>,
}

impl GridState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The role the cell currently holds.
    #[must_use]
    pub fn role_of(&self, cell: CellId) -> CellRole {
        if self.start == Some(cell) {
            CellRole::Start
        } else if self.end == Some(cell) {
            CellRole::End
        } else if self.barriers.contains(&cell) {
            CellRole::Barrier
        } else {
            CellRole::Empty
        }
    }

    /// Whether the cell is a barrier.
    #[must_use]
    pub fn is_barrier(&self, cell: CellId) -> bool {
        self.barriers.contains(&cell)
    }

    /// Whether both endpoints are placed.
    #[must_use]
    pub fn has_endpoints(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Drop every role from the cell. Returns the role it held.
    pub fn vacate(&mut self, cell: CellId) -> CellRole {
        let role = self.role_of(cell);
        match role {
            CellRole::Start => self.start = None,
            CellRole::End => self.end = None,
            CellRole::Barrier => {
                self.barriers.remove(&cell);
            }
            CellRole::Empty | CellRole::Path => {}
        }
        role
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
        self.barriers.clear();
    }

    /// Barrier cells in a stable order, for logging and tests.
    #[must_use]
    pub fn sorted_barriers(&self) -> Vec<CellId> {
        let mut cells: Vec<CellId> = self.barriers.iter().copied().collect();
        cells.sort();
        cells
    }
}
