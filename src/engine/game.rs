use super::{
    bitboard::BitBoardError,
    board::{Board, BoardState},
    common::{BoardError, PlacementTarget},
    config::{BOARD_SIZE, QUEUE_LEN},
    policy,
    queue::{ShapeQueue, ShapeSource},
    rows::RowSet,
    shape::Shape,
};

/// Where the turn engine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum EngineStatus {
    /// Ready to place on the next tick.
    Idle,
    /// A placement was chosen and awaits its deferred commit; ticks are ignored.
    Placing,
    /// Terminal until reset.
    GameOver,
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameOverReason {
    /// The shape due next fit nowhere on the board.
    NoValidPlacement,
    /// The player clicked an occupied cell outside every completed row.
    IllegalMove,
}

/// A placement decided by a tick and waiting to be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPlacement {
    pub shape: Shape,
    pub target: PlacementTarget,
    /// Engine generation at decision time; a reset in between makes it stale.
    pub generation: u64,
}

/// Result of [`GameEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Game over or a placement already in flight.
    Ignored,
    /// A target was found; commit it after the placement delay.
    Scheduled(PendingPlacement),
    /// No valid target for the current shape: the game just ended.
    GameOver,
}

/// Result of [`GameEngine::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The placement belongs to a game that has since been reset.
    Stale,
    Committed {
        shape: Shape,
        target: PlacementTarget,
        /// Rows that are fully occupied right after this placement.
        completed: RowSet,
    },
}

/// Result of [`GameEngine::click_cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The game is over; clicks have no effect.
    Ignored,
    /// Empty cell outside the completed rows.
    NoOp,
    /// One cell of a completed row was cleared; the row still has cells left.
    Cleared { row: usize, col: usize },
    /// The last cell of a completed row was cleared and the row was scored.
    RowCleared { row: usize, score: u32 },
    /// Occupied cell outside the completed rows: the game just ended.
    IllegalMove,
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub board: BoardState,
    pub completed_rows: RowSet,
    pub score: u32,
    pub status: EngineStatus,
    pub game_over_reason: Option<GameOverReason>,
    pub queue: [Shape; QUEUE_LEN],
    pub cursor: usize,
    pub placements: u32,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.status == EngineStatus::GameOver
    }
}

/// Turn engine and clearing rules over one board.
///
/// Every mutation goes through `tick`, `commit`, `click_cell` or `reset`;
/// each leaves the state consistent on return.
pub struct GameEngine<S: ShapeSource> {
    board: Board,
    queue: ShapeQueue,
    completed: RowSet,
    score: u32,
    status: EngineStatus,
    reason: Option<GameOverReason>,
    generation: u64,
    placements: u32,
    source: S,
}

impl<S: ShapeSource> GameEngine<S> {
    /// Start a game on an empty board with a freshly dealt queue.
    pub fn new(mut source: S) -> Self {
        let queue = ShapeQueue::new(&mut source);
        Self {
            board: Board::new(),
            queue,
            completed: RowSet::new(),
            score: 0,
            status: EngineStatus::Idle,
            reason: None,
            generation: 0,
            placements: 0,
            source,
        }
    }

    /// Start a game from an existing board, e.g. a constructed position.
    /// Rows that are already full count as completed.
    pub fn with_board(source: S, board: Board) -> Self {
        let mut engine = Self::new(source);
        engine.completed = board.detect_completed_rows();
        engine.board = board;
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn queue(&self) -> &ShapeQueue {
        &self.queue
    }

    pub fn completed_rows(&self) -> RowSet {
        self.completed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> EngineStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == EngineStatus::GameOver
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.reason
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Placements committed since the game started.
    pub fn placements(&self) -> u32 {
        self.placements
    }

    /// Host timer tick: decide where the current queue shape goes.
    ///
    /// Nothing is mutated on the board here; the decision is returned as a
    /// [`PendingPlacement`] to hand back to [`GameEngine::commit`] once the
    /// placement delay has elapsed.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != EngineStatus::Idle {
            return TickOutcome::Ignored;
        }
        let shape = self.queue.current();
        match policy::find_best_position(&self.board, &shape) {
            Some(target) => {
                log::debug!(
                    "placing {} at ({}, {})",
                    shape.name(),
                    target.row,
                    target.col
                );
                self.status = EngineStatus::Placing;
                TickOutcome::Scheduled(PendingPlacement {
                    shape,
                    target,
                    generation: self.generation,
                })
            }
            None => {
                log::info!("no room for {}, game over", shape.name());
                self.end(GameOverReason::NoValidPlacement);
                TickOutcome::GameOver
            }
        }
    }

    /// Apply a placement previously returned by [`GameEngine::tick`].
    ///
    /// Placements from before the last reset are dropped as `Stale`. An error
    /// means the placement was never valid for this board, which is a bug in
    /// the caller and ends the session.
    pub fn commit(&mut self, pending: PendingPlacement) -> Result<CommitOutcome, BoardError> {
        if pending.generation != self.generation || self.status != EngineStatus::Placing {
            log::debug!("dropping stale placement of {}", pending.shape.name());
            return Ok(CommitOutcome::Stale);
        }
        self.board.place(&pending.shape, pending.target)?;
        self.placements += 1;

        let completed = self.board.detect_completed_rows();
        self.completed.merge(completed);
        self.queue.advance(&mut self.source);
        self.status = EngineStatus::Idle;

        for row in completed.iter() {
            log::debug!("row {} completed", row);
        }
        Ok(CommitOutcome::Committed {
            shape: pending.shape,
            target: pending.target,
            completed,
        })
    }

    /// The player's only move: click a cell.
    pub fn click_cell(&mut self, row: usize, col: usize) -> Result<ClickOutcome, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BitBoardError::IndexOutOfBounds { row, col }.into());
        }
        if self.is_game_over() {
            return Ok(ClickOutcome::Ignored);
        }
        if !self.completed.contains(row) {
            if self.board.is_occupied(row, col) {
                log::info!("illegal click at ({}, {}), game over", row, col);
                self.end(GameOverReason::IllegalMove);
                return Ok(ClickOutcome::IllegalMove);
            }
            return Ok(ClickOutcome::NoOp);
        }

        self.board.clear_cell(row, col)?;
        if self.board.is_row_empty(row) {
            self.completed.remove(row);
            self.score += 1;
            log::info!("row {} cleared, score {}", row, self.score);
            return Ok(ClickOutcome::RowCleared {
                row,
                score: self.score,
            });
        }
        Ok(ClickOutcome::Cleared { row, col })
    }

    /// Return everything to a fresh game. Placements still in flight become
    /// stale.
    pub fn reset(&mut self) {
        self.board.clear();
        self.queue = ShapeQueue::new(&mut self.source);
        self.completed = RowSet::new();
        self.score = 0;
        self.status = EngineStatus::Idle;
        self.reason = None;
        self.placements = 0;
        self.generation = self.generation.wrapping_add(1);
        log::debug!("reset to generation {}", self.generation);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: BoardState::from(&self.board),
            completed_rows: self.completed,
            score: self.score,
            status: self.status,
            game_over_reason: self.reason,
            queue: *self.queue.slots(),
            cursor: self.queue.cursor(),
            placements: self.placements,
        }
    }

    fn end(&mut self, reason: GameOverReason) {
        if self.status != EngineStatus::GameOver {
            self.status = EngineStatus::GameOver;
            self.reason = Some(reason);
        }
    }
}
