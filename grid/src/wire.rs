//! Wire DTOs for the external pathfinding service.
//!
//! DESIGN
//! ======
//! Field names mirror the service's JSON contract (`isBarrier`, `isStart`,
//! `isEnd`) so serde output can be posted as-is. The `grid` array is indexed
//! `grid[x][y]`: the outer array walks columns.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::cell::{CellId, GridState};
use crate::consts::GRID_SIZE;
use crate::error::EditorError;

/// One cell of the serialized grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRecord {
    pub x: u8,
    pub y: u8,
    pub is_barrier: bool,
    /// Always `false`; the service reads the endpoints from `start`/`end`.
    pub is_start: bool,
    /// Always `false`; the service reads the endpoints from `start`/`end`.
    pub is_end: bool,
}

/// Body of `POST /find-path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRequest {
    pub grid: Vec<Vec<CellRecord>>,
    pub start: [u8; 2],
    pub end: [u8; 2],
}

impl PathRequest {
    /// Serialize the grid for a search. Returns `None` unless both endpoints are set.
    #[must_use]
    pub fn from_grid(state: &GridState) -> Option<Self> {
        let (start, end) = (state.start?, state.end?);
        let grid = (0..GRID_SIZE)
            .map(|x| {
                (0..GRID_SIZE)
                    .map(|y| CellRecord {
                        x,
                        y,
                        is_barrier: CellId::new(x, y).is_some_and(|cell| state.is_barrier(cell)),
                        is_start: false,
                        is_end: false,
                    })
                    .collect()
            })
            .collect();
        Some(Self { grid, start: start.as_pair(), end: end.as_pair() })
    }

    /// Number of barrier records in the payload.
    #[must_use]
    pub fn barrier_count(&self) -> usize {
        self.grid.iter().flatten().filter(|rec| rec.is_barrier).count()
    }
}

/// Reply from `POST /find-path`.
///
/// A reachable end yields `path`; otherwise the service explains itself in `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    #[serde(default)]
    pub path: Option<Vec<[i64; 2]>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PathResponse {
    /// Decode a response body.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Decode`] if the body is not a JSON object of the expected shape.
    pub fn from_json(body: &str) -> Result<Self, EditorError> {
        serde_json::from_str(body).map_err(|e| EditorError::Decode(e.to_string()))
    }

    /// The path as grid cells, or `None` when the service reported no path.
    ///
    /// An empty path counts as no path.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidPathCell`] for the first coordinate that is off the grid.
    pub fn cells(&self) -> Result<Option<Vec<CellId>>, EditorError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(None);
        };
        if path.is_empty() {
            return Ok(None);
        }
        path.iter()
            .map(|&[x, y]| CellId::from_wire(x, y).ok_or(EditorError::InvalidPathCell { x, y }))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}
