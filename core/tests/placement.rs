use std::f32::consts::{FRAC_PI_2, TAU};

use dinopuzzle_core::placement::evaluate_release;
use dinopuzzle_core::{board_complete, is_placed, layout, snap_to_target, Difficulty, GameRules};

fn easy_rules() -> GameRules {
    GameRules::for_difficulty(Difficulty::Easy, 600.0)
}

#[test]
fn center_piece_within_threshold_counts_as_placed() {
    let rules = easy_rules();
    let mut pieces = layout(rules.grid_size, rules.board_size);
    // Piece 4 targets (300, 300); threshold is 50.
    pieces[4].pos = (320.0, 310.0);
    pieces[4].rot = 0.0;
    assert!(is_placed(&pieces[4], rules.snap_threshold));
}

#[test]
fn quarter_turned_piece_is_rejected_even_on_target() {
    let rules = easy_rules();
    let mut pieces = layout(rules.grid_size, rules.board_size);
    pieces[4].pos = pieces[4].target;
    pieces[4].rot = FRAC_PI_2;
    assert!(!is_placed(&pieces[4], rules.snap_threshold));
}

#[test]
fn full_turn_counts_as_zero_rotation() {
    let rules = easy_rules();
    let mut pieces = layout(rules.grid_size, rules.board_size);
    pieces[4].rot = TAU;
    assert!(is_placed(&pieces[4], rules.snap_threshold));
    pieces[4].rot = -0.05;
    assert!(is_placed(&pieces[4], rules.snap_threshold));
    pieces[4].rot = 0.2;
    assert!(!is_placed(&pieces[4], rules.snap_threshold));
}

#[test]
fn distance_exactly_at_threshold_is_rejected() {
    let rules = easy_rules();
    let mut pieces = layout(rules.grid_size, rules.board_size);
    pieces[4].pos = (300.0 + rules.snap_threshold, 300.0);
    assert!(!is_placed(&pieces[4], rules.snap_threshold));
    pieces[4].pos = (300.0 + rules.snap_threshold - 0.01, 300.0);
    assert!(is_placed(&pieces[4], rules.snap_threshold));
}

#[test]
fn snap_alignment_is_exact() {
    let rules = easy_rules();
    let mut pieces = layout(rules.grid_size, rules.board_size);
    pieces[0].pos = (110.0, 92.0);
    pieces[0].rot = 0.05;
    snap_to_target(&mut pieces[0]);
    assert_eq!(pieces[0].pos, pieces[0].target);
    assert_eq!(pieces[0].rot, 0.0);
    assert!(is_placed(&pieces[0], rules.snap_threshold));
}

#[test]
fn placement_is_idempotent() {
    let rules = easy_rules();
    let mut pieces = layout(rules.grid_size, rules.board_size);
    pieces[2].pos = (510.0, 95.0);
    let first = evaluate_release(&mut pieces, 2, rules.snap_threshold);
    assert!(first.placed);
    let again = evaluate_release(&mut pieces, 2, rules.snap_threshold);
    assert!(again.placed);
    assert_eq!(pieces[2].pos, pieces[2].target);
}

#[test]
fn release_far_from_target_leaves_piece_alone() {
    let rules = easy_rules();
    let mut pieces = layout(rules.grid_size, rules.board_size);
    pieces[4].pos = (120.0, 480.0);
    let outcome = evaluate_release(&mut pieces, 4, rules.snap_threshold);
    assert!(!outcome.placed);
    assert!(!outcome.complete);
    assert_eq!(pieces[4].pos, (120.0, 480.0));
}

#[test]
fn release_of_unknown_piece_is_a_no_op() {
    let rules = easy_rules();
    let mut pieces = layout(rules.grid_size, rules.board_size);
    let outcome = evaluate_release(&mut pieces, 99, rules.snap_threshold);
    assert!(!outcome.placed);
    assert!(!outcome.complete);
}

#[test]
fn completion_requires_every_piece() {
    let rules = easy_rules();
    let mut pieces = layout(rules.grid_size, rules.board_size);
    assert!(board_complete(&pieces, rules.snap_threshold));
    pieces[7].pos = (100.0, 100.0);
    assert!(!board_complete(&pieces, rules.snap_threshold));
}

#[test]
fn last_release_reports_completion() {
    let rules = easy_rules();
    let mut pieces = layout(rules.grid_size, rules.board_size);
    pieces[8].pos = (485.0, 510.0);
    let outcome = evaluate_release(&mut pieces, 8, rules.snap_threshold);
    assert!(outcome.placed);
    assert!(outcome.complete);
}
