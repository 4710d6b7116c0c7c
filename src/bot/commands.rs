//! Inbound message grammar: a tiny whitespace-delimited command parser.
//!
//! Two shapes are recognized, both case-sensitive:
//! - the exact message `start` begins a new game;
//! - `<PLAYER> <COL> <ROW>` attempts a move, where `<PLAYER>` is `X` or `O`
//!   and the coordinates are base-10 integers.
//!
//! The wire order is column-then-row but the engine speaks row-then-col;
//! the parser performs that reorder so it can never be done inconsistently
//! downstream. Anything else produces a [`ParseCommandError`], which the
//! session turns into user-visible text — no parse failure is fatal.

use log::trace;
use thiserror::Error;

use super::game::Player;

/// A well-formed inbound command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin a new game, discarding any game in progress.
    Start,
    /// Claim the cell at (row, col) for `player`.
    Turn {
        player: Player,
        row: usize,
        col: usize,
    },
}

/// Why an inbound line failed to parse as a command.
///
/// Every coordinate coercion failure — non-numeric token, negative number,
/// overflow — is folded into [`Coordinate`](Self::Coordinate); callers treat
/// them all as one invalid turn.
#[derive(Debug, Error)]
pub enum ParseCommandError {
    #[error("expected 3 tokens, got {0}")]
    TokenCount(usize),
    #[error("unrecognized player token {0:?}")]
    Player(String),
    #[error("coordinate is not a valid cell index: {0}")]
    Coordinate(#[from] std::num::ParseIntError),
}

/// Minimal inbound line parser.
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, raw: &str) -> Result<Command, ParseCommandError> {
        if raw == "start" {
            trace!("parsed start command");
            return Ok(Command::Start);
        }
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let [mark, col, row] = tokens[..] else {
            return Err(ParseCommandError::TokenCount(tokens.len()));
        };
        let player = match mark {
            "X" => Player::X,
            "O" => Player::O,
            other => return Err(ParseCommandError::Player(other.to_string())),
        };
        // Wire order is column first; the engine takes row first.
        let col: usize = col.parse()?;
        let row: usize = row.parse()?;
        trace!("parsed turn: {} at row={} col={}", player, row, col);
        Ok(Command::Turn { player, row, col })
    }
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new()
    }
}
