#![cfg(feature = "std")]

//! Headless games: ticks and commits back to back, with every completed row
//! cleared as soon as it appears.

use crate::engine::{
    config::BOARD_SIZE, ClickOutcome, CommitOutcome, GameEngine, GameOverReason, ShapeSource,
    TickOutcome,
};

/// Summary of a headless game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SimReport {
    pub score: u32,
    pub placements: u32,
    pub ticks: u32,
    /// `None` if the tick limit was reached first.
    pub reason: Option<GameOverReason>,
}

/// Click every occupied cell of every completed row. Returns rows scored.
pub fn clear_completed_rows<S: ShapeSource>(engine: &mut GameEngine<S>) -> anyhow::Result<u32> {
    let mut scored = 0;
    for row in engine.completed_rows().iter() {
        for col in 0..BOARD_SIZE {
            if !engine.board().is_occupied(row, col) {
                continue;
            }
            if let ClickOutcome::RowCleared { .. } = engine
                .click_cell(row, col)
                .map_err(|e| anyhow::anyhow!(e))?
            {
                scored += 1;
            }
        }
    }
    Ok(scored)
}

/// Play until game over or `max_ticks`, whichever comes first.
pub fn run_headless<S: ShapeSource>(
    engine: &mut GameEngine<S>,
    max_ticks: u32,
) -> anyhow::Result<SimReport> {
    let mut ticks = 0;
    while ticks < max_ticks && !engine.is_game_over() {
        ticks += 1;
        match engine.tick() {
            TickOutcome::Scheduled(pending) => {
                if let CommitOutcome::Committed { .. } =
                    engine.commit(pending).map_err(|e| anyhow::anyhow!(e))?
                {
                    clear_completed_rows(engine)?;
                }
            }
            TickOutcome::GameOver | TickOutcome::Ignored => {}
        }
    }
    Ok(SimReport {
        score: engine.score(),
        placements: engine.placements(),
        ticks,
        reason: engine.game_over_reason(),
    })
}
