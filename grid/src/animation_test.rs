use super::*;

fn cell(x: u8, y: u8) -> CellId {
    CellId::new(x, y).unwrap()
}

#[test]
fn plan_skips_end_cell_and_staggers_by_100ms() {
    let path = [cell(0, 0), cell(0, 1), cell(0, 2)];
    let plan = AnimationPlan::from_path(AnimationTicket(1), &path);
    assert_eq!(
        plan.steps,
        vec![
            AnimationStep { cell: cell(0, 0), delay_ms: 0 },
            AnimationStep { cell: cell(0, 1), delay_ms: 100 },
        ]
    );
    assert!(plan.steps.iter().all(|s| s.cell != cell(0, 2)));
}

#[test]
fn plan_keeps_ticket() {
    let plan = AnimationPlan::from_path(AnimationTicket(7), &[cell(1, 1), cell(1, 2)]);
    assert_eq!(plan.ticket, AnimationTicket(7));
}

#[test]
fn plan_for_single_cell_path_is_empty() {
    let plan = AnimationPlan::from_path(AnimationTicket(1), &[cell(4, 4)]);
    assert!(plan.is_empty());
    assert_eq!(plan.duration_ms(), 0);
}

#[test]
fn plan_for_empty_path_is_empty() {
    let plan = AnimationPlan::from_path(AnimationTicket(1), &[]);
    assert!(plan.is_empty());
}

#[test]
fn plan_duration_is_last_step_delay() {
    let path: Vec<CellId> = (0..10).map(|y| cell(3, y)).collect();
    let plan = AnimationPlan::from_path(AnimationTicket(2), &path);
    assert_eq!(plan.steps.len(), 9);
    assert_eq!(plan.duration_ms(), 800);
}

#[test]
fn plan_preserves_path_order() {
    let path = [cell(5, 5), cell(4, 5), cell(4, 4), cell(3, 4)];
    let plan = AnimationPlan::from_path(AnimationTicket(3), &path);
    let cells: Vec<CellId> = plan.steps.iter().map(|s| s.cell).collect();
    assert_eq!(cells, vec![cell(5, 5), cell(4, 5), cell(4, 4)]);
}
