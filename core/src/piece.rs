use crate::game::rotate_vec;

/// Normalized sub-rectangle of the source image backing one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// One tile of the sliced puzzle image. Identity, target transform and
/// image region are fixed at layout time; position and rotation move
/// with gesture input. A piece is correct only at its target position
/// with zero rotation modulo full turns.
#[derive(Clone, Debug)]
pub struct Piece {
    pub id: usize,
    pub row: u32,
    pub col: u32,
    pub target: (f32, f32),
    pub pos: (f32, f32),
    pub rot: f32,
    pub region: Region,
}

impl Piece {
    /// Hit test against the piece's square footprint, honoring the
    /// current rotation. `tile_size` is the square's side length.
    pub fn contains(&self, point: (f32, f32), tile_size: f32) -> bool {
        let half = tile_size * 0.5;
        let dx = point.0 - self.pos.0;
        let dy = point.1 - self.pos.1;
        let (lx, ly) = rotate_vec(dx, dy, -self.rot);
        lx.abs() <= half && ly.abs() <= half
    }
}
