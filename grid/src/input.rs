//! Input model: brushes, mouse buttons, and the pointer state machine.
//!
//! `Brush` captures what a primary-button press paints. `PointerAction` is the
//! gesture tracked between pointer-down and pointer-up; a single enum keeps
//! painting and erasing mutually exclusive.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Which brush is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Brush {
    /// Nothing selected; primary presses do nothing.
    #[default]
    None,
    /// Place the start cell.
    Start,
    /// Place the end cell.
    End,
    /// Paint barrier cells.
    Barrier,
}

impl Brush {
    /// All brushes that have a control in the UI.
    pub const SELECTABLE: [Brush; 3] = [Brush::Start, Brush::End, Brush::Barrier];

    /// Human-readable label for the brush control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Start => "Start",
            Self::End => "End",
            Self::Barrier => "Barrier",
        }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
    /// Back, forward, or any other auxiliary button.
    Other,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Other,
        }
    }
}

/// The gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerAction {
    /// No button held.
    #[default]
    Idle,
    /// Primary button held: moving paints with the active brush.
    Painting,
    /// Secondary button held: moving erases barriers.
    Erasing,
}

impl PointerAction {
    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }
}
