#![cfg(feature = "std")]

use crate::engine::{
    config::{BOARD_SIZE, QUEUE_LEN},
    EngineStatus, GameOverReason, GameSnapshot,
};

/// Column label used on screen and accepted by the command parser.
pub fn column_label(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Text grid of the board. Occupied cells in completed rows are drawn as `#`
/// so the player can tell which cells are safe to click.
pub fn render_board(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..BOARD_SIZE {
        out.push(' ');
        out.push(column_label(c));
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let completed = snapshot.completed_rows.contains(r);
        out.push_str(&format!(" {:2} ", r + 1));
        for c in 0..BOARD_SIZE {
            let ch = match (snapshot.board.occupied(r, c), completed) {
                (true, true) => '#',
                (true, false) => 'o',
                (false, _) => '.',
            };
            out.push(' ');
            out.push(ch);
        }
        if completed {
            out.push_str("  <- clear me");
        }
        out.push('\n');
    }
    out
}

/// The three preview shapes side by side, the one due next marked with `>`.
pub fn render_queue(snapshot: &GameSnapshot) -> String {
    let height = snapshot.queue.iter().map(|s| s.height()).max().unwrap_or(0);
    let mut out = String::new();
    for i in 0..QUEUE_LEN {
        let marker = if i == snapshot.cursor { '>' } else { ' ' };
        out.push(marker);
        out.push_str(&format!("{:<10}", snapshot.queue[i].name()));
    }
    out.push('\n');
    for r in 0..height {
        for shape in snapshot.queue.iter() {
            out.push(' ');
            for c in 0..9 {
                out.push(if shape.filled(r, c) { '■' } else { ' ' });
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// Score line, or the game-over banner with the final score.
pub fn render_status(snapshot: &GameSnapshot) -> String {
    match snapshot.status {
        EngineStatus::GameOver => {
            let why = match snapshot.game_over_reason {
                Some(GameOverReason::NoValidPlacement) => "the next shape does not fit",
                Some(GameOverReason::IllegalMove) => "clicked a block outside a completed row",
                None => "game ended",
            };
            format!(
                "Game Over! Final Score: {} ({})\nType `reset` to play again or `quit`.",
                snapshot.score,
                why
            )
        }
        EngineStatus::Placing => format!("Score: {}  (placing...)", snapshot.score),
        EngineStatus::Idle => format!("Score: {}", snapshot.score),
    }
}

/// Full frame: status, board and queue.
pub fn render(snapshot: &GameSnapshot) -> String {
    format!(
        "{}\n\n{}\n{}",
        render_status(snapshot),
        render_board(snapshot),
        render_queue(snapshot)
    )
}
