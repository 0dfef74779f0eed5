//! Timer bookkeeping for path animations.
//!
//! The editor decides what each step paints and ignores steps from cancelled
//! searches; this module only owns the timer handles. Dropping a
//! `gloo_timers::callback::Timeout` clears it, so cancelling is dropping.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use grid::animation::{AnimationPlan, AnimationStep};

/// Pending timers of the running animation.
///
/// Generic over the handle so scheduling and cancellation are testable
/// without a browser; the grid host uses `Timeout`.
#[derive(Debug)]
pub struct PathAnimator<H> {
    handles: Vec<H>,
}

impl<H> Default for PathAnimator<H> {
    fn default() -> Self {
        Self { handles: Vec::new() }
    }
}

impl<H> PathAnimator<H> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any running animation with `plan`.
    ///
    /// `start_timer` is called once per step and returns the handle that
    /// keeps that step's timer alive.
    pub fn schedule<F>(&mut self, plan: &AnimationPlan, mut start_timer: F)
    where
        F: FnMut(AnimationStep) -> H,
    {
        self.cancel();
        self.handles = plan.steps.iter().map(|step| start_timer(*step)).collect();
        log::debug!("scheduled {} path steps over {}ms", self.handles.len(), plan.duration_ms());
    }

    /// Drop every pending timer.
    pub fn cancel(&mut self) {
        if !self.handles.is_empty() {
            log::debug!("cancelling {} path timers", self.handles.len());
        }
        self.handles.clear();
    }

    /// Number of timers held, fired or not.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.handles.len()
    }
}
