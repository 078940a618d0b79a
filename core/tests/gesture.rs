use std::f32::consts::FRAC_PI_2;

use dinopuzzle_core::{layout, GestureController, GestureIntent};

#[test]
fn small_drag_translates_by_contact_delta() {
    let mut pieces = layout(3, 600.0);
    pieces[4].pos = (310.0, 290.0);
    let mut gesture = GestureController::new();

    let down = gesture.contact_down(315.0, 295.0, 0.0, Some(&pieces[4]));
    assert_eq!(down, GestureIntent::DragBegin { piece_id: 4 });

    let moved = gesture.contact_move(325.0, 300.0, &pieces);
    assert_eq!(
        moved,
        GestureIntent::Translate {
            piece_id: 4,
            pos: (320.0, 295.0),
        }
    );
    assert!(!gesture.is_rotating());
}

#[test]
fn crossing_threshold_latches_rotation_for_the_contact() {
    let mut pieces = layout(3, 600.0);
    pieces[4].pos = (300.0, 300.0);
    let mut gesture = GestureController::new();
    gesture.contact_down(310.0, 300.0, 0.0, Some(&pieces[4]));

    // 30 units of travel, past the 20-unit threshold.
    let latched = gesture.contact_move(340.0, 300.0, &pieces);
    assert!(gesture.is_rotating());
    match latched {
        GestureIntent::Rotate { piece_id, rot } => {
            assert_eq!(piece_id, 4);
            assert!(rot.abs() < 1e-5);
        }
        other => panic!("expected rotation, got {other:?}"),
    }

    // A sweep to directly below the center is a quarter turn.
    let swept = gesture.contact_move(300.0, 340.0, &pieces);
    match swept {
        GestureIntent::Rotate { rot, .. } => assert!((rot - FRAC_PI_2).abs() < 1e-4),
        other => panic!("expected rotation, got {other:?}"),
    }

    // Back inside the threshold radius: still rotating, never a translate.
    let near = gesture.contact_move(312.0, 301.0, &pieces);
    assert!(matches!(near, GestureIntent::Rotate { .. }));
    assert!(gesture.is_rotating());
}

#[test]
fn rotation_sweep_adds_to_starting_rotation() {
    let mut pieces = layout(3, 600.0);
    pieces[4].pos = (300.0, 300.0);
    pieces[4].rot = FRAC_PI_2;
    let mut gesture = GestureController::new();
    gesture.contact_down(310.0, 300.0, 0.0, Some(&pieces[4]));
    let swept = gesture.contact_move(300.0, 340.0, &pieces);
    match swept {
        GestureIntent::Rotate { rot, .. } => assert!((rot - FRAC_PI_2 * 2.0).abs() < 1e-4),
        other => panic!("expected rotation, got {other:?}"),
    }
}

#[test]
fn down_on_empty_space_is_ignored() {
    let pieces = layout(3, 600.0);
    let mut gesture = GestureController::new();
    let down = gesture.contact_down(10.0, 10.0, 0.0, None);
    assert_eq!(down, GestureIntent::Ignored);
    let moved = gesture.contact_move(30.0, 30.0, &pieces);
    assert_eq!(moved, GestureIntent::Ignored);
    assert_eq!(gesture.contact_up(), GestureIntent::Ignored);
}

#[test]
fn second_down_while_dragging_is_ignored() {
    let pieces = layout(3, 600.0);
    let mut gesture = GestureController::new();
    gesture.contact_down(300.0, 300.0, 0.0, Some(&pieces[4]));
    let second = gesture.contact_down(100.0, 100.0, 0.1, Some(&pieces[0]));
    assert_eq!(second, GestureIntent::Ignored);
    assert_eq!(gesture.active_piece(), Some(4));
}

#[test]
fn up_releases_the_dragged_piece() {
    let pieces = layout(3, 600.0);
    let mut gesture = GestureController::new();
    gesture.contact_down(300.0, 300.0, 0.0, Some(&pieces[4]));
    assert_eq!(gesture.contact_up(), GestureIntent::Release { piece_id: 4 });
    assert_eq!(gesture.active_piece(), None);
}

#[test]
fn cancel_behaves_like_release() {
    let pieces = layout(3, 600.0);
    let mut gesture = GestureController::new();
    gesture.contact_down(300.0, 300.0, 0.0, Some(&pieces[4]));
    gesture.contact_move(308.0, 300.0, &pieces);
    assert_eq!(
        gesture.contact_cancel(),
        GestureIntent::Release { piece_id: 4 }
    );
    assert_eq!(gesture.active_piece(), None);
}

#[test]
fn quick_second_tap_becomes_a_rotate_command() {
    let pieces = layout(3, 600.0);
    let mut gesture = GestureController::new();
    gesture.contact_down(300.0, 300.0, 0.0, Some(&pieces[4]));
    gesture.contact_up();
    let tap = gesture.contact_down(305.0, 302.0, 0.1, Some(&pieces[4]));
    assert_eq!(tap, GestureIntent::TapRotate { piece_id: 4 });
    // The command does not open a drag.
    assert_eq!(gesture.active_piece(), None);
}

#[test]
fn slow_second_tap_starts_a_fresh_drag() {
    let pieces = layout(3, 600.0);
    let mut gesture = GestureController::new();
    gesture.contact_down(300.0, 300.0, 0.0, Some(&pieces[4]));
    gesture.contact_up();
    let down = gesture.contact_down(300.0, 300.0, 0.5, Some(&pieces[4]));
    assert_eq!(down, GestureIntent::DragBegin { piece_id: 4 });
}

#[test]
fn distant_second_tap_starts_a_fresh_drag() {
    let pieces = layout(3, 600.0);
    let mut gesture = GestureController::new();
    gesture.contact_down(300.0, 300.0, 0.0, Some(&pieces[4]));
    gesture.contact_up();
    let down = gesture.contact_down(350.0, 300.0, 0.1, Some(&pieces[4]));
    assert_eq!(down, GestureIntent::DragBegin { piece_id: 4 });
}

#[test]
fn third_tap_after_rotate_is_a_first_tap_again() {
    let pieces = layout(3, 600.0);
    let mut gesture = GestureController::new();
    gesture.contact_down(300.0, 300.0, 0.0, Some(&pieces[4]));
    gesture.contact_up();
    gesture.contact_down(300.0, 300.0, 0.1, Some(&pieces[4]));
    // Tap record was consumed; the next down starts a drag, not another
    // quarter turn.
    let down = gesture.contact_down(300.0, 300.0, 0.2, Some(&pieces[4]));
    assert_eq!(down, GestureIntent::DragBegin { piece_id: 4 });
}
