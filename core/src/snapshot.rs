use std::fmt;

use rkyv::{Archive, Deserialize, Serialize};

use crate::board::GameRules;

pub const GAME_SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
pub enum PuzzleImageRef {
    BuiltIn { slug: String },
    Private { hash: String },
}

pub fn validate_image_ref(image_ref: &PuzzleImageRef) -> Result<(), SnapshotError> {
    match image_ref {
        PuzzleImageRef::BuiltIn { slug } if slug.trim().is_empty() => {
            Err(SnapshotError::EmptyImageRef)
        }
        PuzzleImageRef::Private { hash } if hash.trim().is_empty() => {
            Err(SnapshotError::EmptyImageRef)
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
pub struct PuzzleInfo {
    pub label: String,
    pub image_ref: PuzzleImageRef,
}

impl PuzzleInfo {
    pub fn built_in(label: &str, slug: &str) -> Self {
        Self {
            label: label.to_string(),
            image_ref: PuzzleImageRef::BuiltIn {
                slug: slug.to_string(),
            },
        }
    }
}

/// Mutable half of a session: everything a restore needs on top of the
/// rules to rebuild the piece collection.
#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
pub struct SessionState {
    pub positions: Vec<(f32, f32)>,
    pub rotations: Vec<f32>,
    pub draw_order: Vec<u32>,
    pub elapsed_secs: u64,
    pub complete: bool,
    pub seed: u32,
}

#[derive(Debug, Clone, Archive, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u32,
    pub rules: GameRules,
    pub puzzle: PuzzleInfo,
    pub state: SessionState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    VersionMismatch { expected: u32, found: u32 },
    LengthMismatch { expected: usize, found: usize },
    InvalidPieceId { id: u32, total: usize },
    DuplicatePieceId { id: u32 },
    EmptyImageRef,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::VersionMismatch { expected, found } => {
                write!(f, "snapshot version {found}, expected {expected}")
            }
            SnapshotError::LengthMismatch { expected, found } => {
                write!(f, "snapshot holds {found} pieces, expected {expected}")
            }
            SnapshotError::InvalidPieceId { id, total } => {
                write!(f, "piece id {id} out of range for {total} pieces")
            }
            SnapshotError::DuplicatePieceId { id } => {
                write!(f, "piece id {id} repeated in draw order")
            }
            SnapshotError::EmptyImageRef => write!(f, "missing puzzle image reference"),
        }
    }
}

impl std::error::Error for SnapshotError {}
