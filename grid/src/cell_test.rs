use super::*;

fn cell(x: u8, y: u8) -> CellId {
    CellId::new(x, y).unwrap()
}

// =============================================================
// CellId
// =============================================================

#[test]
fn cell_id_accepts_grid_bounds() {
    assert!(CellId::new(0, 0).is_some());
    assert!(CellId::new(GRID_SIZE - 1, GRID_SIZE - 1).is_some());
}

#[test]
fn cell_id_rejects_off_grid() {
    assert!(CellId::new(GRID_SIZE, 0).is_none());
    assert!(CellId::new(0, GRID_SIZE).is_none());
    assert!(CellId::new(255, 255).is_none());
}

#[test]
fn cell_id_from_wire_rejects_negative_and_large() {
    assert_eq!(CellId::from_wire(3, 4), Some(cell(3, 4)));
    assert!(CellId::from_wire(-1, 0).is_none());
    assert!(CellId::from_wire(0, 26).is_none());
    assert!(CellId::from_wire(1_000, 0).is_none());
}

#[test]
fn cell_id_key_is_x_dash_y() {
    assert_eq!(cell(3, 17).key(), "3-17");
    assert_eq!(cell(0, 0).key(), "0-0");
}

#[test]
fn cell_id_pair_and_accessors() {
    let c = cell(5, 9);
    assert_eq!(c.x(), 5);
    assert_eq!(c.y(), 9);
    assert_eq!(c.as_pair(), [5, 9]);
}

#[test]
fn cell_id_all_covers_grid_column_major() {
    let all: Vec<CellId> = CellId::all().collect();
    assert_eq!(all.len(), usize::from(GRID_SIZE) * usize::from(GRID_SIZE));
    assert_eq!(all[0], cell(0, 0));
    assert_eq!(all[1], cell(0, 1));
    assert_eq!(all[usize::from(GRID_SIZE)], cell(1, 0));
}

// =============================================================
// GridState
// =============================================================

#[test]
fn grid_state_default_is_empty() {
    let state = GridState::new();
    assert!(state.start.is_none());
    assert!(state.end.is_none());
    assert!(state.barriers.is_empty());
    assert!(!state.has_endpoints());
}

#[test]
fn grid_state_role_of_reports_each_role() {
    let mut state = GridState::new();
    state.start = Some(cell(0, 0));
    state.end = Some(cell(2, 2));
    state.barriers.insert(cell(1, 1));
    assert_eq!(state.role_of(cell(0, 0)), CellRole::Start);
    assert_eq!(state.role_of(cell(2, 2)), CellRole::End);
    assert_eq!(state.role_of(cell(1, 1)), CellRole::Barrier);
    assert_eq!(state.role_of(cell(5, 5)), CellRole::Empty);
    assert!(state.has_endpoints());
}

#[test]
fn grid_state_vacate_drops_role() {
    let mut state = GridState::new();
    state.start = Some(cell(0, 0));
    state.barriers.insert(cell(1, 1));

    assert_eq!(state.vacate(cell(0, 0)), CellRole::Start);
    assert!(state.start.is_none());

    assert_eq!(state.vacate(cell(1, 1)), CellRole::Barrier);
    assert!(!state.is_barrier(cell(1, 1)));

    assert_eq!(state.vacate(cell(4, 4)), CellRole::Empty);
}

#[test]
fn grid_state_clear_removes_everything() {
    let mut state = GridState::new();
    state.start = Some(cell(0, 0));
    state.end = Some(cell(1, 0));
    state.barriers.insert(cell(3, 3));
    state.clear();
    assert_eq!(state, GridState::default());
}

#[test]
fn grid_state_sorted_barriers_is_stable() {
    let mut state = GridState::new();
    state.barriers.insert(cell(4, 1));
    state.barriers.insert(cell(0, 9));
    state.barriers.insert(cell(4, 0));
    assert_eq!(state.sorted_barriers(), vec![cell(0, 9), cell(4, 0), cell(4, 1)]);
}
