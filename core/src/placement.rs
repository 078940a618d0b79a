use crate::game::{angle_matches, distance, ROTATION_PLACE_TOLERANCE};
use crate::piece::Piece;

/// A piece counts as placed when it sits within the snap threshold of
/// its target and its rotation is within tolerance of zero modulo full
/// turns. Pure predicate, no mutation.
pub fn is_placed(piece: &Piece, snap_threshold: f32) -> bool {
    if distance(piece.pos, piece.target) >= snap_threshold {
        return false;
    }
    angle_matches(piece.rot, 0.0, ROTATION_PLACE_TOLERANCE)
}

/// Exact alignment, eliminating residual floating drift.
pub fn snap_to_target(piece: &mut Piece) {
    piece.pos = piece.target;
    piece.rot = 0.0;
}

pub fn board_complete(pieces: &[Piece], snap_threshold: f32) -> bool {
    pieces.iter().all(|piece| is_placed(piece, snap_threshold))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementOutcome {
    pub placed: bool,
    pub complete: bool,
}

/// Placement event: evaluate a released piece, snapping it on success
/// and re-checking board completion. Completion is only scanned here,
/// never continuously.
pub fn evaluate_release(
    pieces: &mut [Piece],
    piece_id: usize,
    snap_threshold: f32,
) -> PlacementOutcome {
    let placed = pieces
        .get(piece_id)
        .map(|piece| is_placed(piece, snap_threshold))
        .unwrap_or(false);
    if !placed {
        return PlacementOutcome {
            placed: false,
            complete: false,
        };
    }
    if let Some(piece) = pieces.get_mut(piece_id) {
        snap_to_target(piece);
    }
    PlacementOutcome {
        placed: true,
        complete: board_complete(pieces, snap_threshold),
    }
}
