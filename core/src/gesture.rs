use crate::game::{distance, DOUBLE_TAP_SLOP, DOUBLE_TAP_WINDOW_SECS, ROTATE_DISTANCE_THRESHOLD};
use crate::piece::Piece;

#[derive(Clone, Copy, Debug)]
struct TapSample {
    x: f32,
    y: f32,
    at: f64,
}

/// State captured at contact-down for the active drag. `rotating` is a
/// one-way latch: once cumulative contact displacement exceeds the
/// threshold the gesture rotates for the rest of the contact and never
/// reverts to translation.
#[derive(Clone, Copy, Debug)]
pub struct DragState {
    pub piece_id: usize,
    pub start_x: f32,
    pub start_y: f32,
    pub start_pos: (f32, f32),
    pub start_rot: f32,
    pub rotating: bool,
}

/// Discrete intent decoded from one raw pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureIntent {
    Ignored,
    DragBegin { piece_id: usize },
    Translate { piece_id: usize, pos: (f32, f32) },
    Rotate { piece_id: usize, rot: f32 },
    Release { piece_id: usize },
    TapRotate { piece_id: usize },
}

/// Single-pointer gesture interpreter. At most one piece is driven at
/// a time; downs arriving while a contact is active are ignored.
#[derive(Debug, Default)]
pub struct GestureController {
    drag: Option<DragState>,
    last_tap: Option<TapSample>,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_piece(&self) -> Option<usize> {
        self.drag.map(|drag| drag.piece_id)
    }

    pub fn is_rotating(&self) -> bool {
        self.drag.map(|drag| drag.rotating).unwrap_or(false)
    }

    /// `hit` is the topmost piece under the contact point, if any. A
    /// down within the double-tap window and slop of the previous down
    /// becomes a quarter-turn command and never starts a drag.
    pub fn contact_down(
        &mut self,
        x: f32,
        y: f32,
        now: f64,
        hit: Option<&Piece>,
    ) -> GestureIntent {
        if self.drag.is_some() {
            return GestureIntent::Ignored;
        }
        if let Some(tap) = self.last_tap {
            let within_window = now - tap.at < DOUBLE_TAP_WINDOW_SECS;
            let within_slop = distance((x, y), (tap.x, tap.y)) <= DOUBLE_TAP_SLOP;
            if within_window && within_slop {
                self.last_tap = None;
                return match hit {
                    Some(piece) => GestureIntent::TapRotate { piece_id: piece.id },
                    None => GestureIntent::Ignored,
                };
            }
        }
        self.last_tap = Some(TapSample { x, y, at: now });
        match hit {
            Some(piece) => {
                self.drag = Some(DragState {
                    piece_id: piece.id,
                    start_x: x,
                    start_y: y,
                    start_pos: piece.pos,
                    start_rot: piece.rot,
                    rotating: false,
                });
                GestureIntent::DragBegin { piece_id: piece.id }
            }
            None => GestureIntent::Ignored,
        }
    }

    /// `pieces` must be indexed by piece id. While translating, the
    /// piece follows the contact delta; once rotating, the angle swept
    /// around the piece's (now frozen) center is added to the rotation
    /// it had at contact-down.
    pub fn contact_move(&mut self, x: f32, y: f32, pieces: &[Piece]) -> GestureIntent {
        let Some(drag) = self.drag.as_mut() else {
            return GestureIntent::Ignored;
        };
        let Some(piece) = pieces.get(drag.piece_id) else {
            return GestureIntent::Ignored;
        };
        if !drag.rotating {
            let moved = distance((x, y), (drag.start_x, drag.start_y));
            if moved > ROTATE_DISTANCE_THRESHOLD {
                drag.rotating = true;
            }
        }
        if drag.rotating {
            let center = piece.pos;
            let angle_start = (drag.start_y - center.1).atan2(drag.start_x - center.0);
            let angle_now = (y - center.1).atan2(x - center.0);
            GestureIntent::Rotate {
                piece_id: drag.piece_id,
                rot: drag.start_rot + (angle_now - angle_start),
            }
        } else {
            GestureIntent::Translate {
                piece_id: drag.piece_id,
                pos: (
                    drag.start_pos.0 + (x - drag.start_x),
                    drag.start_pos.1 + (y - drag.start_y),
                ),
            }
        }
    }

    pub fn contact_up(&mut self) -> GestureIntent {
        match self.drag.take() {
            Some(drag) => GestureIntent::Release {
                piece_id: drag.piece_id,
            },
            None => GestureIntent::Ignored,
        }
    }

    /// Cancellation is treated identically to a normal release, so the
    /// piece always ends in a well-defined resting transform.
    pub fn contact_cancel(&mut self) -> GestureIntent {
        self.contact_up()
    }
}
