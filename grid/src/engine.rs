use std::collections::HashSet;
use std::fmt::Debug;

use crate::animation::{AnimationPlan, AnimationTicket};
use crate::cell::{CellId, GridState};
use crate::error::EditorError;
use crate::input::{Brush, Button, PointerAction};
use crate::render::{CellRenderer, CellRole};
use crate::wire::{PathRequest, PathResponse};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Fallback notification when the service reports no path without a message.
pub const NO_PATH_MESSAGE: &str = "No path found.";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Repaint one cell.
    Paint { cell: CellId, role: CellRole },
    /// Repaint every cell as empty.
    ResetAll,
    /// The active brush changed; move the control indicator.
    BrushChanged(Brush),
    /// Drop any pending animation timers.
    CancelAnimation,
}

/// A validated search, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub request: PathRequest,
    pub ticket: AnimationTicket,
    /// Cleanup the host must apply before sending.
    pub actions: Vec<Action>,
}

/// What to do with a pathfinding reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Highlight the path.
    Animate(AnimationPlan),
    /// No path exists; show the service's message.
    Unreachable(String),
    /// The grid was cleared or a newer search started; ignore the reply.
    Superseded,
}

/// Core editor state: all logic that doesn't depend on the DOM.
///
/// Separated from `Editor` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct EditorCore {
    pub grid: GridState,
    pub brush: Brush,
    pub pointer: PointerAction,
    /// Cells currently drawn with the path highlight.
    highlighted: HashSet<CellId>,
    /// Bumped whenever running animations must stop painting.
    epoch: u64,
}

impl EditorCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Brush ---

    /// Select the brush applied by primary presses.
    pub fn set_brush(&mut self, brush: Brush) -> Vec<Action> {
        self.brush = brush;
        vec![Action::BrushChanged(brush)]
    }

    // --- Painting ---

    /// Apply the active brush to `cell`.
    pub fn paint_cell(&mut self, cell: CellId) -> Vec<Action> {
        match self.brush {
            Brush::None => Vec::new(),
            Brush::Start => self.place_endpoint(cell, CellRole::Start),
            Brush::End => self.place_endpoint(cell, CellRole::End),
            Brush::Barrier => self.place_barrier(cell),
        }
    }

    /// Remove a barrier from `cell`. Start and end cells are never erased.
    pub fn erase_cell(&mut self, cell: CellId) -> Vec<Action> {
        if !self.grid.barriers.remove(&cell) {
            return Vec::new();
        }
        self.highlighted.remove(&cell);
        vec![Action::Paint { cell, role: CellRole::Empty }]
    }

    fn place_endpoint(&mut self, cell: CellId, role: CellRole) -> Vec<Action> {
        let slot = if role == CellRole::Start { self.grid.start } else { self.grid.end };
        if slot == Some(cell) && !self.highlighted.contains(&cell) {
            return Vec::new();
        }

        let mut actions = Vec::new();
        if let Some(prev) = slot.filter(|prev| *prev != cell) {
            self.highlighted.remove(&prev);
            actions.push(Action::Paint { cell: prev, role: CellRole::Empty });
        }
        self.grid.vacate(cell);
        self.highlighted.remove(&cell);
        if role == CellRole::Start {
            self.grid.start = Some(cell);
        } else {
            self.grid.end = Some(cell);
        }
        actions.push(Action::Paint { cell, role });
        actions
    }

    fn place_barrier(&mut self, cell: CellId) -> Vec<Action> {
        match self.grid.role_of(cell) {
            CellRole::Start | CellRole::End => Vec::new(),
            CellRole::Barrier if !self.highlighted.contains(&cell) => Vec::new(),
            _ => {
                self.grid.barriers.insert(cell);
                self.highlighted.remove(&cell);
                vec![Action::Paint { cell, role: CellRole::Barrier }]
            }
        }
    }

    // --- Pointer gestures ---

    /// Start a paint (primary) or erase (secondary) gesture on `cell`.
    pub fn on_pointer_down(&mut self, cell: CellId, button: Button) -> Vec<Action> {
        match button {
            Button::Primary => {
                self.pointer = PointerAction::Painting;
                self.paint_cell(cell)
            }
            Button::Secondary => {
                self.pointer = PointerAction::Erasing;
                self.erase_cell(cell)
            }
            Button::Middle | Button::Other => Vec::new(),
        }
    }

    /// Continue the current gesture over `cell`.
    pub fn on_pointer_move(&mut self, cell: CellId) -> Vec<Action> {
        match self.pointer {
            PointerAction::Idle => Vec::new(),
            PointerAction::Painting => self.paint_cell(cell),
            PointerAction::Erasing => self.erase_cell(cell),
        }
    }

    /// End any gesture, whichever button was released.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.pointer = PointerAction::Idle;
        Vec::new()
    }

    // --- Clear ---

    /// Reset the grid to empty and stop any running animation.
    pub fn clear_grid(&mut self) -> Vec<Action> {
        self.grid.clear();
        self.pointer = PointerAction::Idle;
        self.highlighted.clear();
        self.epoch = self.epoch.wrapping_add(1);
        log::debug!("grid cleared; animation epoch now {}", self.epoch);
        vec![Action::CancelAnimation, Action::ResetAll]
    }

    // --- Search ---

    /// Validate the grid and build the request for a new search.
    ///
    /// Any running animation is cancelled and its highlights are repainted
    /// with the cells' own roles.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::MissingEndpoints`] unless both start and end are placed.
    pub fn begin_search(&mut self) -> Result<PendingSearch, EditorError> {
        let request = PathRequest::from_grid(&self.grid).ok_or(EditorError::MissingEndpoints)?;
        self.epoch = self.epoch.wrapping_add(1);

        let mut stale: Vec<CellId> = self.highlighted.drain().collect();
        stale.sort();
        let mut actions = vec![Action::CancelAnimation];
        actions.extend(stale.into_iter().map(|cell| Action::Paint { cell, role: self.grid.role_of(cell) }));

        Ok(PendingSearch { request, ticket: self.ticket(), actions })
    }

    /// Turn the service reply for `ticket` into an outcome.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidPathCell`] if the path leaves the grid.
    pub fn complete_search(
        &self,
        ticket: AnimationTicket,
        response: &PathResponse,
    ) -> Result<SearchOutcome, EditorError> {
        if !self.is_current(ticket) {
            log::debug!("discarding reply for superseded search {ticket:?}");
            return Ok(SearchOutcome::Superseded);
        }
        match response.cells()? {
            Some(path) => Ok(SearchOutcome::Animate(AnimationPlan::from_path(ticket, &path))),
            None => Ok(SearchOutcome::Unreachable(
                response
                    .message
                    .clone()
                    .unwrap_or_else(|| NO_PATH_MESSAGE.to_owned()),
            )),
        }
    }

    /// Settle the search identified by `ticket` with the service round trip's result.
    ///
    /// A stale ticket yields [`SearchOutcome::Superseded`] whether the round
    /// trip succeeded or failed, so only the newest search reports anything.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error of a current search, or
    /// [`EditorError::InvalidPathCell`] if its path leaves the grid.
    pub fn settle_search(
        &self,
        ticket: AnimationTicket,
        result: Result<PathResponse, EditorError>,
    ) -> Result<SearchOutcome, EditorError> {
        if !self.is_current(ticket) {
            log::debug!("discarding result for superseded search {ticket:?}");
            return Ok(SearchOutcome::Superseded);
        }
        self.complete_search(ticket, &result?)
    }

    /// Highlight one path cell, unless the animation has been cancelled.
    pub fn path_step(&mut self, ticket: AnimationTicket, cell: CellId) -> Vec<Action> {
        if !self.is_current(ticket) {
            return Vec::new();
        }
        self.highlighted.insert(cell);
        vec![Action::Paint { cell, role: CellRole::Path }]
    }

    // --- Queries ---

    /// Ticket of the newest search.
    #[must_use]
    pub fn ticket(&self) -> AnimationTicket {
        AnimationTicket(self.epoch)
    }

    /// Whether `ticket` still owns the grid's animation.
    #[must_use]
    pub fn is_current(&self, ticket: AnimationTicket) -> bool {
        ticket == self.ticket()
    }

    /// Whether `cell` is drawn with the path highlight.
    #[must_use]
    pub fn is_highlighted(&self, cell: CellId) -> bool {
        self.highlighted.contains(&cell)
    }

    /// What `cell` looks like right now.
    #[must_use]
    pub fn visual_role(&self, cell: CellId) -> CellRole {
        if self.highlighted.contains(&cell) {
            CellRole::Path
        } else {
            self.grid.role_of(cell)
        }
    }
}

/// The full editor. Wraps `EditorCore` and owns the renderer.
///
/// Each input method applies the resulting repaints and returns the actions
/// only the host can perform (brush indicator, timer cancellation).
pub struct Editor<R: CellRenderer> {
    renderer: R,
    pub core: EditorCore,
}

impl<R> Editor<R>
where
    R: CellRenderer,
    R::Error: Debug,
{
    /// Create an editor drawing through `renderer`.
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self { renderer, core: EditorCore::new() }
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn apply(&mut self, actions: Vec<Action>) -> Vec<Action> {
        let mut host = Vec::new();
        for action in actions {
            match action {
                Action::Paint { cell, role } => {
                    if let Err(err) = self.renderer.paint(cell, role) {
                        log::error!("repaint of cell {} failed: {err:?}", cell.key());
                    }
                }
                Action::ResetAll => {
                    if let Err(err) = self.renderer.reset_all() {
                        log::error!("grid reset failed: {err:?}");
                    }
                }
                Action::BrushChanged(_) | Action::CancelAnimation => host.push(action),
            }
        }
        host
    }

    // --- Delegated inputs ---

    pub fn set_brush(&mut self, brush: Brush) -> Vec<Action> {
        let actions = self.core.set_brush(brush);
        self.apply(actions)
    }

    pub fn on_pointer_down(&mut self, cell: CellId, button: Button) -> Vec<Action> {
        let actions = self.core.on_pointer_down(cell, button);
        self.apply(actions)
    }

    pub fn on_pointer_move(&mut self, cell: CellId) -> Vec<Action> {
        let actions = self.core.on_pointer_move(cell);
        self.apply(actions)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let actions = self.core.on_pointer_up();
        self.apply(actions)
    }

    pub fn clear_grid(&mut self) -> Vec<Action> {
        let actions = self.core.clear_grid();
        self.apply(actions)
    }

    /// Validate and start a search; stale highlights are repainted immediately.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::MissingEndpoints`] unless both start and end are placed.
    pub fn begin_search(&mut self) -> Result<PendingSearch, EditorError> {
        let mut pending = self.core.begin_search()?;
        pending.actions = self.apply(std::mem::take(&mut pending.actions));
        Ok(pending)
    }

    /// See [`EditorCore::complete_search`].
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidPathCell`] if the path leaves the grid.
    pub fn complete_search(
        &self,
        ticket: AnimationTicket,
        response: &PathResponse,
    ) -> Result<SearchOutcome, EditorError> {
        self.core.complete_search(ticket, response)
    }

    /// See [`EditorCore::settle_search`].
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error of a current search, or
    /// [`EditorError::InvalidPathCell`] if its path leaves the grid.
    pub fn settle_search(
        &self,
        ticket: AnimationTicket,
        result: Result<PathResponse, EditorError>,
    ) -> Result<SearchOutcome, EditorError> {
        self.core.settle_search(ticket, result)
    }

    pub fn path_step(&mut self, ticket: AnimationTicket, cell: CellId) -> Vec<Action> {
        let actions = self.core.path_step(ticket, cell);
        self.apply(actions)
    }
}
