//! Local UI chrome state (brush indicator, pending commands, search status).
//!
//! DESIGN
//! ======
//! Controls never touch the editor directly. Each command bumps a `*_seq`
//! counter; the grid host watches the counters and drives the editor, then
//! writes back what the controls should display.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use grid::input::Brush;

/// Where the most recent search stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    /// A request is in flight.
    Searching,
    /// A path of `cells` cells, start and end included, is being drawn.
    Found { cells: usize },
    /// The service found no path.
    Unreachable,
    /// The request or its reply failed.
    Failed,
}

/// UI state shared between the controls and the grid host.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Brush most recently chosen in the controls.
    pub requested_brush: Brush,
    pub brush_seq: u64,
    /// Brush the editor reports as active; drives the `selected` class.
    pub active_brush: Brush,
    pub clear_seq: u64,
    pub find_path_seq: u64,
    pub search: SearchStatus,
}

impl UiState {
    /// Ask the editor to switch brushes.
    pub fn request_brush(&mut self, brush: Brush) {
        self.requested_brush = brush;
        self.brush_seq = self.brush_seq.wrapping_add(1);
    }

    /// Ask the editor to clear the grid.
    pub fn request_clear(&mut self) {
        self.clear_seq = self.clear_seq.wrapping_add(1);
    }

    /// Ask the editor to start a search.
    pub fn request_find_path(&mut self) {
        self.find_path_seq = self.find_path_seq.wrapping_add(1);
    }

    /// Status line shown under the controls.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.search {
            SearchStatus::Idle => String::new(),
            SearchStatus::Searching => "Searching...".to_owned(),
            SearchStatus::Found { cells } => format!("Path found: {cells} cells"),
            SearchStatus::Unreachable => "No path".to_owned(),
            SearchStatus::Failed => "Search failed".to_owned(),
        }
    }
}
