//! Common types: board errors and placement targets.

use super::bitboard::BitBoardError;

/// Board origin at which a shape's mask (0, 0) cell is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct PlacementTarget {
    pub row: usize,
    pub col: usize,
}

impl PlacementTarget {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Placement would leave the board or cover an occupied cell.
    InvalidPlacement { row: usize, col: usize },
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidPlacement { row, col } => {
                write!(f, "Invalid placement at ({}, {})", row, col)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
