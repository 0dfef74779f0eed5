use super::*;

// =============================================================
// Brush
// =============================================================

#[test]
fn brush_default_is_none() {
    assert_eq!(Brush::default(), Brush::None);
}

#[test]
fn brush_selectable_excludes_none() {
    assert!(!Brush::SELECTABLE.contains(&Brush::None));
    assert_eq!(Brush::SELECTABLE.len(), 3);
}

#[test]
fn brush_labels() {
    assert_eq!(Brush::Start.label(), "Start");
    assert_eq!(Brush::End.label(), "End");
    assert_eq!(Brush::Barrier.label(), "Barrier");
    assert_eq!(Brush::None.label(), "None");
}

#[test]
fn brush_all_variants_distinct() {
    let variants = [Brush::None, Brush::Start, Brush::End, Brush::Barrier];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
}

#[test]
fn button_from_dom_auxiliary_buttons_are_other() {
    assert_eq!(Button::from_dom(3), Button::Other);
    assert_eq!(Button::from_dom(4), Button::Other);
    assert_eq!(Button::from_dom(-1), Button::Other);
}

// =============================================================
// PointerAction
// =============================================================

#[test]
fn pointer_action_default_is_idle() {
    assert_eq!(PointerAction::default(), PointerAction::Idle);
    assert!(!PointerAction::Idle.is_active());
}

#[test]
fn pointer_action_painting_and_erasing_are_active() {
    assert!(PointerAction::Painting.is_active());
    assert!(PointerAction::Erasing.is_active());
    assert_ne!(PointerAction::Painting, PointerAction::Erasing);
}
