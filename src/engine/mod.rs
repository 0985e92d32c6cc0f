//! Block-filling game engine (no_std compatible)
//!
//! This module contains the pure game logic with zero heap allocation and no
//! I/O: the bitboard grid, the shape catalog, the automatic placement policy
//! and the turn/clearing state machine. Timers, rendering and input live
//! outside of it and drive it through [`GameEngine`].

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod policy;
pub mod queue;
pub mod rows;
pub mod shape;

// Re-export commonly used types
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, BoardState};
pub use common::{BoardError, PlacementTarget};
pub use config::*;
pub use game::{
    ClickOutcome, CommitOutcome, EngineStatus, GameEngine, GameOverReason, GameSnapshot,
    PendingPlacement, TickOutcome,
};
pub use policy::{find_best_position, placement_score, valid_targets};
pub use queue::{CyclingShapes, RandomShapes, ShapeQueue, ShapeSource};
pub use rows::RowSet;
pub use shape::Shape;
