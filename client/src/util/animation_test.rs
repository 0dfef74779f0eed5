use std::cell::Cell;
use std::rc::Rc;

use grid::cell::CellId;
use grid::engine::EditorCore;

use super::*;

/// Handle that counts how many timers were dropped.
struct Probe(Rc<Cell<usize>>);

impl Drop for Probe {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

fn cell(x: u8, y: u8) -> CellId {
    CellId::new(x, y).unwrap()
}

fn plan(len: u8) -> AnimationPlan {
    let path: Vec<CellId> = (0..len).map(|x| cell(x, 0)).collect();
    AnimationPlan::from_path(EditorCore::new().ticket(), &path)
}

// =============================================================
// Scheduling
// =============================================================

#[test]
fn schedule_starts_one_timer_per_step() {
    let mut animator = PathAnimator::new();
    let mut delays = Vec::new();
    animator.schedule(&plan(4), |step| delays.push(step.delay_ms));
    assert_eq!(delays, vec![0, 100, 200]);
    assert_eq!(animator.pending(), 3);
}

#[test]
fn schedule_passes_cells_in_path_order() {
    let mut animator = PathAnimator::new();
    let mut cells = Vec::new();
    animator.schedule(&plan(3), |step| cells.push(step.cell));
    assert_eq!(cells, vec![cell(0, 0), cell(1, 0)]);
}

#[test]
fn schedule_of_single_cell_path_starts_nothing() {
    let mut animator: PathAnimator<()> = PathAnimator::new();
    animator.schedule(&plan(1), |_| ());
    assert_eq!(animator.pending(), 0);
}

// =============================================================
// Cancellation
// =============================================================

#[test]
fn cancel_drops_every_handle() {
    let dropped = Rc::new(Cell::new(0));
    let mut animator = PathAnimator::new();
    animator.schedule(&plan(5), |_| Probe(Rc::clone(&dropped)));
    assert_eq!(dropped.get(), 0);

    animator.cancel();
    assert_eq!(dropped.get(), 4);
    assert_eq!(animator.pending(), 0);
}

#[test]
fn rescheduling_drops_the_previous_animation() {
    let first = Rc::new(Cell::new(0));
    let second = Rc::new(Cell::new(0));
    let mut animator = PathAnimator::new();
    animator.schedule(&plan(3), |_| Probe(Rc::clone(&first)));
    animator.schedule(&plan(4), |_| Probe(Rc::clone(&second)));

    assert_eq!(first.get(), 2);
    assert_eq!(second.get(), 0);
    assert_eq!(animator.pending(), 3);
}

#[test]
fn cancel_when_idle_is_harmless() {
    let mut animator: PathAnimator<Probe> = PathAnimator::new();
    animator.cancel();
    assert_eq!(animator.pending(), 0);
}
