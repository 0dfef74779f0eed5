use super::*;

#[test]
fn local_point_subtracts_surface_origin() {
    let pt = local_point(150.0, 95.0, 50.0, 20.0);
    assert_eq!(pt, Point::new(100.0, 75.0));
}

#[test]
fn cell_at_client_maps_through_offset_surface() {
    // Surface at (10, 40); client (10 + 2*30 + 5, 40 + 7*30 + 29).
    assert_eq!(cell_at_client(75.0, 279.0, 10.0, 40.0), CellId::new(2, 7));
}

#[test]
fn cell_at_client_left_of_surface_is_none() {
    assert_eq!(cell_at_client(9.0, 100.0, 10.0, 40.0), None);
}

#[test]
fn cell_at_client_past_far_edge_is_none() {
    assert_eq!(cell_at_client(10.0 + 780.0, 50.0, 10.0, 40.0), None);
}

#[test]
fn cell_at_client_last_pixel_is_last_cell() {
    assert_eq!(cell_at_client(779.5, 779.5, 0.0, 0.0), CellId::new(25, 25));
}
