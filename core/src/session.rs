use crate::board::{layout, scramble, GameRules};
use crate::game::{normalize_angle, ROTATION_STEP};
use crate::gesture::{GestureController, GestureIntent};
use crate::piece::Piece;
use crate::placement::evaluate_release;
use crate::snapshot::{GameSnapshot, PuzzleInfo, SessionState, SnapshotError, GAME_SNAPSHOT_VERSION};

/// Fire-and-forget feedback events for the host (sounds, haptics).
/// Injected so gesture and placement logic stay testable without a
/// live audio subsystem.
pub trait FeedbackSink {
    fn piece_placed(&mut self, piece_id: usize);
    fn piece_rotated(&mut self, piece_id: usize);
}

pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn piece_placed(&mut self, _piece_id: usize) {}
    fn piece_rotated(&mut self, _piece_id: usize) {}
}

/// One puzzle game: pieces, gesture interpretation, placement, and the
/// 1 Hz elapsed-time counter. Everything runs on the caller's thread;
/// pointer callbacks and `tick` must not interleave.
pub struct GameSession {
    rules: GameRules,
    puzzle: PuzzleInfo,
    seed: u32,
    pieces: Vec<Piece>,
    draw_order: Vec<usize>,
    gesture: GestureController,
    feedback: Box<dyn FeedbackSink>,
    elapsed_secs: u64,
    running: bool,
    complete: bool,
    complete_event: bool,
}

impl GameSession {
    pub fn new(rules: GameRules, puzzle: PuzzleInfo, seed: u32) -> Self {
        Self::with_feedback(rules, puzzle, seed, Box::new(NullFeedback))
    }

    pub fn with_feedback(
        rules: GameRules,
        puzzle: PuzzleInfo,
        seed: u32,
        feedback: Box<dyn FeedbackSink>,
    ) -> Self {
        let mut session = Self {
            rules,
            puzzle,
            seed,
            pieces: Vec::new(),
            draw_order: Vec::new(),
            gesture: GestureController::new(),
            feedback,
            elapsed_secs: 0,
            running: false,
            complete: false,
            complete_event: false,
        };
        session.rebuild();
        session
    }

    fn rebuild(&mut self) {
        let mut pieces = layout(self.rules.grid_size, self.rules.board_size);
        scramble(&mut pieces, self.seed, &self.rules);
        self.draw_order = (0..pieces.len()).collect();
        self.pieces = pieces;
        self.elapsed_secs = 0;
        self.complete = false;
        self.complete_event = false;
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn puzzle(&self) -> &PuzzleInfo {
        &self.puzzle
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Live piece collection, indexed by piece id.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Render order, back to front. Identity never changes; dragging a
    /// piece only raises it here.
    pub fn draw_order(&self) -> &[usize] {
        &self.draw_order
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn selected_piece(&self) -> Option<usize> {
        self.gesture.active_piece()
    }

    /// One-shot completion notification; true exactly once per
    /// completed session.
    pub fn take_complete_event(&mut self) -> bool {
        std::mem::take(&mut self.complete_event)
    }

    pub fn start(&mut self) {
        self.elapsed_secs = 0;
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// 1 Hz timer callback from the host. Frozen once complete.
    pub fn tick(&mut self) {
        if self.running && !self.complete {
            self.elapsed_secs += 1;
        }
    }

    /// Stop the timer first, then rebuild the board; a tick must never
    /// observe the collection mid-rebuild.
    pub fn reset(&mut self, rules: GameRules, puzzle: PuzzleInfo, seed: u32) {
        self.stop();
        self.rules = rules;
        self.puzzle = puzzle;
        self.seed = seed;
        self.gesture = GestureController::new();
        self.rebuild();
        self.start();
    }

    /// Topmost piece under a board-local point.
    pub fn piece_at(&self, x: f32, y: f32) -> Option<usize> {
        let tile = self.rules.tile_size();
        self.draw_order
            .iter()
            .rev()
            .copied()
            .find(|&id| self.pieces[id].contains((x, y), tile))
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, now: f64) {
        if self.complete {
            return;
        }
        let hit = self.piece_at(x, y);
        let hit_piece = hit.map(|id| &self.pieces[id]);
        let intent = self.gesture.contact_down(x, y, now, hit_piece);
        self.apply(intent);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if self.complete {
            return;
        }
        let intent = self.gesture.contact_move(x, y, &self.pieces);
        self.apply(intent);
    }

    pub fn pointer_up(&mut self) {
        let intent = self.gesture.contact_up();
        if !self.complete {
            self.apply(intent);
        }
    }

    pub fn pointer_cancel(&mut self) {
        let intent = self.gesture.contact_cancel();
        if !self.complete {
            self.apply(intent);
        }
    }

    fn apply(&mut self, intent: GestureIntent) {
        match intent {
            GestureIntent::Ignored => {}
            GestureIntent::DragBegin { piece_id } => self.raise_piece(piece_id),
            GestureIntent::Translate { piece_id, pos } => {
                if let Some(piece) = self.pieces.get_mut(piece_id) {
                    piece.pos = pos;
                }
            }
            GestureIntent::Rotate { piece_id, rot } => {
                if let Some(piece) = self.pieces.get_mut(piece_id) {
                    piece.rot = rot;
                }
            }
            GestureIntent::TapRotate { piece_id } => {
                if let Some(piece) = self.pieces.get_mut(piece_id) {
                    piece.rot = normalize_angle(piece.rot + ROTATION_STEP);
                    self.feedback.piece_rotated(piece_id);
                }
            }
            GestureIntent::Release { piece_id } => {
                let outcome =
                    evaluate_release(&mut self.pieces, piece_id, self.rules.snap_threshold);
                if outcome.placed {
                    self.feedback.piece_placed(piece_id);
                }
                if outcome.complete {
                    self.complete = true;
                    self.complete_event = true;
                    self.stop();
                }
            }
        }
    }

    fn raise_piece(&mut self, piece_id: usize) {
        if let Some(idx) = self.draw_order.iter().position(|id| *id == piece_id) {
            let id = self.draw_order.remove(idx);
            self.draw_order.push(id);
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            version: GAME_SNAPSHOT_VERSION,
            rules: self.rules,
            puzzle: self.puzzle.clone(),
            state: SessionState {
                positions: self.pieces.iter().map(|piece| piece.pos).collect(),
                rotations: self.pieces.iter().map(|piece| piece.rot).collect(),
                draw_order: self.draw_order.iter().map(|id| *id as u32).collect(),
                elapsed_secs: self.elapsed_secs,
                complete: self.complete,
                seed: self.seed,
            },
        }
    }

    /// Rebuild a session from a snapshot. The timer is left stopped;
    /// the host restarts it when the game resumes.
    pub fn restore(
        snapshot: &GameSnapshot,
        feedback: Box<dyn FeedbackSink>,
    ) -> Result<Self, SnapshotError> {
        if snapshot.version != GAME_SNAPSHOT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                expected: GAME_SNAPSHOT_VERSION,
                found: snapshot.version,
            });
        }
        let total = snapshot.rules.piece_count();
        let state = &snapshot.state;
        for found in [
            state.positions.len(),
            state.rotations.len(),
            state.draw_order.len(),
        ] {
            if found != total {
                return Err(SnapshotError::LengthMismatch {
                    expected: total,
                    found,
                });
            }
        }
        let mut draw_order = Vec::with_capacity(total);
        let mut seen = vec![false; total];
        for &id in &state.draw_order {
            let idx = id as usize;
            if idx >= total {
                return Err(SnapshotError::InvalidPieceId { id, total });
            }
            if seen[idx] {
                return Err(SnapshotError::DuplicatePieceId { id });
            }
            seen[idx] = true;
            draw_order.push(idx);
        }
        let mut pieces = layout(snapshot.rules.grid_size, snapshot.rules.board_size);
        for (piece, (pos, rot)) in pieces
            .iter_mut()
            .zip(state.positions.iter().zip(state.rotations.iter()))
        {
            piece.pos = *pos;
            piece.rot = *rot;
        }
        Ok(Self {
            rules: snapshot.rules,
            puzzle: snapshot.puzzle.clone(),
            seed: state.seed,
            pieces,
            draw_order,
            gesture: GestureController::new(),
            feedback,
            elapsed_secs: state.elapsed_secs,
            running: false,
            complete: state.complete,
            complete_event: false,
        })
    }
}
