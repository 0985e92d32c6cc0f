#![cfg(feature = "std")]

//! Text command parsing and the blocking stdin reader used by the `blockfill` binary.

use std::io::{self, BufRead};

use crate::engine::config::BOARD_SIZE;
use crate::session::{Command, SessionHandle};

/// Parse a cell given as `A5` (column letter, 1-based row) or `5 1`
/// (1-based row then column).
pub fn parse_cell(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }

    let mut parts = input.split_whitespace();
    if let (Some(r), Some(c), None) = (parts.next(), parts.next(), parts.next()) {
        let row = parse_index(r, "row")?;
        let col = parse_index(c, "column")?;
        return Ok((row, col));
    }

    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-L", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-L", col_ch));
    }
    let row_str: String = chars.collect();
    let row = parse_index(&row_str, "row")?;
    Ok((row, col))
}

fn parse_index(s: &str, what: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("Invalid {} '{}' - must be a number 1-{}", what, s, BOARD_SIZE))?;
    if n == 0 || n > BOARD_SIZE {
        return Err(format!("{} {} out of bounds - must be 1-{}", what, n, BOARD_SIZE));
    }
    Ok(n - 1)
}

/// Map one line of user input to a session command.
pub fn parse_command(line: &str) -> Result<Command, String> {
    match line.trim().to_ascii_lowercase().as_str() {
        "reset" | "r" | "restart" => Ok(Command::Reset),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => parse_cell(line).map(|(row, col)| Command::Click { row, col }),
    }
}

/// Read commands from stdin until EOF or `quit`, forwarding them to the
/// session. Runs on a blocking thread.
pub fn read_commands(handle: SessionHandle) -> anyhow::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(command) => {
                handle.blocking_send(command)?;
                if command == Command::Quit {
                    return Ok(());
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }
    handle.blocking_send(Command::Quit)
}
