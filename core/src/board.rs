use rkyv::{Archive, Deserialize, Serialize};

use crate::game::{rand_range, rand_unit, BOARD_SIZE_DEFAULT, ROTATION_STEP, SNAP_DISTANCE_RATIO};
use crate::piece::{Piece, Region};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

pub const DIFFICULTIES: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

impl Difficulty {
    pub fn grid_size(self) -> u32 {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Medium => 4,
            Difficulty::Hard => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// Fixed per-session geometry and tolerances. External callers may
/// build arbitrary tuples; `for_difficulty` derives the snap threshold
/// from the tile size, so coarser grids get a larger tolerance.
#[derive(Clone, Copy, Debug, PartialEq, Archive, Serialize, Deserialize)]
pub struct GameRules {
    pub grid_size: u32,
    pub board_size: f32,
    pub snap_threshold: f32,
}

impl GameRules {
    pub fn for_difficulty(difficulty: Difficulty, board_size: f32) -> Self {
        assert!(board_size > 0.0, "board size must be positive");
        let grid_size = difficulty.grid_size();
        let tile = board_size / grid_size as f32;
        Self {
            grid_size,
            board_size,
            snap_threshold: tile * SNAP_DISTANCE_RATIO,
        }
    }

    pub fn tile_size(&self) -> f32 {
        self.board_size / self.grid_size as f32
    }

    pub fn piece_count(&self) -> usize {
        (self.grid_size * self.grid_size) as usize
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::for_difficulty(Difficulty::Easy, BOARD_SIZE_DEFAULT)
    }
}

/// Partition a square board into a row-major grid of pieces, each
/// sitting at its target transform with a normalized image region.
pub fn layout(grid_size: u32, board_size: f32) -> Vec<Piece> {
    assert!(grid_size > 0, "grid size must be positive");
    assert!(board_size > 0.0, "board size must be positive");
    let tile = board_size / grid_size as f32;
    let frac = 1.0 / grid_size as f32;
    let mut pieces = Vec::with_capacity((grid_size * grid_size) as usize);
    for row in 0..grid_size {
        for col in 0..grid_size {
            let target = (tile * (col as f32 + 0.5), tile * (row as f32 + 0.5));
            pieces.push(Piece {
                id: (row * grid_size + col) as usize,
                row,
                col,
                target,
                pos: target,
                rot: 0.0,
                region: Region {
                    x: col as f32 * frac,
                    y: row as f32 * frac,
                    w: frac,
                    h: frac,
                },
            });
        }
    }
    pieces
}

/// Random positions keeping every piece fully inside the board bounds.
pub fn scramble_positions(seed: u32, grid_size: u32, board_size: f32) -> Vec<(f32, f32)> {
    let tile = board_size / grid_size as f32;
    let min = tile * 0.5;
    let mut max = board_size - tile * 0.5;
    if max < min {
        max = min;
    }
    let total = (grid_size * grid_size) as usize;
    let mut positions = Vec::with_capacity(total);
    for id in 0..total {
        let salt = (id as u32) << 1;
        let x = rand_range(seed, salt, min, max);
        let y = rand_range(seed, salt + 1, min, max);
        positions.push((x, y));
    }
    positions
}

/// Quarter-turn-only random rotations. Correctness is checked modulo
/// full turns, so four discrete states keep the tap-rotate gesture
/// sufficient to reach zero.
pub fn scramble_rotations(seed: u32, total: usize) -> Vec<f32> {
    let mut rotations = Vec::with_capacity(total);
    for id in 0..total {
        let salt = 0xC001_u32 + id as u32;
        let quarter = (rand_unit(seed, salt) * 4.0).floor().min(3.0);
        rotations.push(quarter * ROTATION_STEP);
    }
    rotations
}

pub fn scramble(pieces: &mut [Piece], seed: u32, rules: &GameRules) {
    let positions = scramble_positions(seed, rules.grid_size, rules.board_size);
    let rotations = scramble_rotations(seed, pieces.len());
    for (piece, (pos, rot)) in pieces
        .iter_mut()
        .zip(positions.into_iter().zip(rotations.into_iter()))
    {
        piece.pos = pos;
        piece.rot = rot;
    }
}
