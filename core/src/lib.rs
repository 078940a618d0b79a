pub mod board;
pub mod catalog;
pub mod codec;
pub mod game;
pub mod gesture;
pub mod piece;
pub mod placement;
pub mod session;
pub mod snapshot;

pub use board::{layout, scramble, Difficulty, GameRules};
pub use codec::{decode, encode};
pub use gesture::{GestureController, GestureIntent};
pub use piece::{Piece, Region};
pub use placement::{board_complete, is_placed, snap_to_target, PlacementOutcome};
pub use session::{FeedbackSink, GameSession, NullFeedback};
pub use snapshot::{
    validate_image_ref, GameSnapshot, PuzzleImageRef, PuzzleInfo, SessionState, SnapshotError,
    GAME_SNAPSHOT_VERSION,
};
