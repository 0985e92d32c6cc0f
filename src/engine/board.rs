//! Game board state: a 12×12 occupancy grid built on `BitBoard`.

use super::bitboard::BitBoard;
use super::common::{BoardError, PlacementTarget};
use super::config::BOARD_SIZE;
use super::rows::RowSet;
use super::shape::Shape;
use core::fmt;

pub type BB = BitBoard<u16, BOARD_SIZE>;

/// Serializable occupancy snapshot, one bit-packed word per row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct BoardState {
    pub rows: [u16; BOARD_SIZE],
}

impl BoardState {
    pub fn occupied(&self, row: usize, col: usize) -> bool {
        col < BOARD_SIZE && self.rows.get(row).is_some_and(|r| (r >> col) & 1 == 1)
    }
}

/// Occupancy grid. Cells are either empty or occupied; nothing else is
/// tracked per cell.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: BB,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board { cells: BB::new() }
    }

    /// Build a board from bit-packed rows (bit `c` of `rows[r]` = cell (r, c)).
    pub fn from_rows(rows: [u16; BOARD_SIZE]) -> Self {
        Board {
            cells: BB::from_rows(rows),
        }
    }

    /// Board size along each axis.
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Underlying bitboard.
    pub fn cells(&self) -> BB {
        self.cells
    }

    /// True if (row, col) is occupied. Out-of-range cells read as empty.
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col).unwrap_or(false)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.count_ones()
    }

    /// True iff `shape` anchored at (`row`, `col`) stays within the board and
    /// every filled mask cell lands on an empty board cell.
    pub fn can_place(&self, shape: &Shape, row: usize, col: usize) -> bool {
        self.cells.fits(shape.rows(), shape.width(), row, col)
    }

    /// Occupy every filled mask cell of `shape` anchored at `target`.
    ///
    /// Callers must have checked [`Board::can_place`]; an unchecked target is
    /// rejected with `InvalidPlacement` and the board is left untouched.
    pub fn place(&mut self, shape: &Shape, target: PlacementTarget) -> Result<(), BoardError> {
        let PlacementTarget { row, col } = target;
        if !self.can_place(shape, row, col) {
            return Err(BoardError::InvalidPlacement { row, col });
        }
        self.cells.overlay(shape.rows(), shape.width(), row, col)?;
        Ok(())
    }

    /// Copy of this board with `shape` placed at `target`.
    pub fn with_placed(&self, shape: &Shape, target: PlacementTarget) -> Result<Board, BoardError> {
        let mut next = *self;
        next.place(shape, target)?;
        Ok(next)
    }

    /// True iff every cell of `row` is occupied.
    pub fn is_row_complete(&self, row: usize) -> bool {
        self.cells.is_row_full(row)
    }

    /// True iff no cell of `row` is occupied.
    pub fn is_row_empty(&self, row: usize) -> bool {
        self.cells.is_row_empty(row)
    }

    /// Rows whose every cell is occupied.
    pub fn detect_completed_rows(&self) -> RowSet {
        (0..BOARD_SIZE).filter(|&r| self.is_row_complete(r)).collect()
    }

    /// Empty a single cell.
    pub fn clear_cell(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        self.cells.clear(row, col)?;
        Ok(())
    }

    /// Empty the whole board.
    pub fn clear(&mut self) {
        self.cells = BB::new();
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{\n{}\n}}", self.cells)
    }
}

impl From<&Board> for BoardState {
    fn from(b: &Board) -> Self {
        BoardState {
            rows: b.cells.into_rows(),
        }
    }
}

impl From<BoardState> for Board {
    fn from(state: BoardState) -> Self {
        Board::from_rows(state.rows)
    }
}
