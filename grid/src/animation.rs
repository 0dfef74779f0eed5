//! Path animation plans and cancellation tickets.
//!
//! A returned path is highlighted one cell at a time. The plan only says which
//! cell lights up when; the host owns the timers. Each plan carries the
//! [`AnimationTicket`] of the search that produced it, and the engine refuses
//! to paint steps whose ticket is no longer current.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use crate::cell::CellId;
use crate::consts::PATH_STEP_MS;

/// Identifies the search whose animation may still paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnimationTicket(pub(crate) u64);

/// One scheduled highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationStep {
    pub cell: CellId,
    /// Delay from the start of the animation.
    pub delay_ms: u32,
}

/// Every highlight of one path, in firing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationPlan {
    pub ticket: AnimationTicket,
    pub steps: Vec<AnimationStep>,
}

impl AnimationPlan {
    /// Build the plan for a start-to-end path.
    ///
    /// The last cell is the end cell and keeps its end marker, so it gets no step.
    #[must_use]
    pub fn from_path(ticket: AnimationTicket, path: &[CellId]) -> Self {
        let body = path.split_last().map_or(&[][..], |(_, rest)| rest);
        let steps = body
            .iter()
            .zip(0u32..)
            .map(|(&cell, i)| AnimationStep { cell, delay_ms: i.saturating_mul(PATH_STEP_MS) })
            .collect();
        Self { ticket, steps }
    }

    /// Whether the plan paints nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Delay of the last step, or zero for an empty plan.
    #[must_use]
    pub fn duration_ms(&self) -> u32 {
        self.steps.last().map_or(0, |step| step.delay_ms)
    }
}
