//! Game session management: one user, at most one game in progress.
//!
//! [`GameSession`] is the state machine between the messaging harness and
//! the rules engine. It owns the engine for the duration of a game, parses
//! each inbound line, applies legal moves, and renders replies back through
//! a callback injected at construction — the session never knows the
//! transport, which keeps it trivially testable with a capturing closure.
//!
//! State transitions:
//! - idle, `start` → active with a fresh empty board (reply: the field)
//! - active, legal move → field reply; if that move ends the game, an
//!   outcome reply follows and the session returns to idle
//! - active, illegal or malformed input → `Invalid turn`, state untouched
//! - idle, anything but `start` → `Game is not started`
//!
//! Processing is synchronous: each inbound message is fully handled (parsed,
//! applied, rendered, replied) before the call returns. A harness serving
//! several users must create one session per user.

use chrono::{DateTime, Utc};
use log::{debug, info};

use super::commands::{Command, CommandParser};
use super::game::{Player, TicTacToe};
use crate::logutil::escape_log;

/// Reply sent for any non-`start` message while no game is in progress.
pub const REPLY_NOT_STARTED: &str = "Game is not started";
/// Reply sent for malformed input and rule-rejected moves alike.
pub const REPLY_INVALID_TURN: &str = "Invalid turn";

/// Outbound message callback, supplied by the harness at construction.
pub type SendMessage = Box<dyn FnMut(String) + Send>;

/// A single user's tic-tac-toe session.
pub struct GameSession {
    id: String,
    parser: CommandParser,
    game: Option<TicTacToe>,
    send_message: SendMessage,
    started_at: DateTime<Utc>,
    last_activity: DateTime<Utc>,
}

impl GameSession {
    /// Create a session with no game in progress. `id` only labels log
    /// lines; `send_message` receives every outbound reply.
    pub fn new(id: impl Into<String>, send_message: SendMessage) -> Self {
        let now = Utc::now();
        GameSession {
            id: id.into(),
            parser: CommandParser::new(),
            game: None,
            send_message,
            started_at: now,
            last_activity: now,
        }
    }

    /// Handle one inbound message, sending replies through the callback.
    pub fn handle_message(&mut self, message: &str) {
        self.last_activity = Utc::now();
        debug!("session {}: inbound '{}'", self.id, escape_log(message));

        match self.parser.parse(message) {
            Ok(Command::Start) => self.start_game(),
            Ok(Command::Turn { .. }) | Err(_) if self.game.is_none() => {
                self.send(REPLY_NOT_STARTED.to_string());
            }
            Ok(Command::Turn { player, row, col }) => self.make_turn(player, row, col),
            Err(err) => {
                debug!("session {}: rejected input: {}", self.id, err);
                self.send(REPLY_INVALID_TURN.to_string());
            }
        }
    }

    /// Whether a game is currently in progress.
    pub fn is_active(&self) -> bool {
        self.game.is_some()
    }

    /// When the session was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the session last handled a message.
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_activity
    }

    fn start_game(&mut self) {
        if self.game.is_some() {
            debug!("session {}: restart discards game in progress", self.id);
        }
        let game = TicTacToe::new();
        self.send(render_field(&game));
        self.game = Some(game);
        info!("session {}: game started", self.id);
    }

    fn make_turn(&mut self, player: Player, row: usize, col: usize) {
        // Take the game out; it is returned unless this move finishes it.
        let Some(mut game) = self.game.take() else {
            self.send(REPLY_NOT_STARTED.to_string());
            return;
        };
        if !game.can_make_turn(player, row, col) {
            debug!(
                "session {}: rejected turn {} at row={} col={}",
                self.id, player, row, col
            );
            self.send(REPLY_INVALID_TURN.to_string());
            self.game = Some(game);
            return;
        }
        game.make_turn(player, row, col);
        self.send(render_field(&game));
        if !game.is_finished() {
            self.game = Some(game);
            return;
        }
        let outcome = match game.winner() {
            Some(winner) => format!("Game is finished, {} wins", winner),
            None => "Game is finished, draw".to_string(),
        };
        info!(
            "session {}: {} after {}s",
            self.id,
            outcome,
            (self.last_activity - self.started_at).num_seconds()
        );
        self.send(outcome);
        // Dropping the taken game returns the session to idle.
    }

    fn send(&mut self, text: String) {
        (self.send_message)(text);
    }
}

/// Serialize the grid as 3 lines of 3 characters, `.` for empty cells,
/// rows joined by newlines with no trailing newline.
fn render_field(game: &TicTacToe) -> String {
    let mut out = String::with_capacity(11);
    for (index, row) in game.field().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        for cell in row {
            match cell {
                Some(player) => out.push_str(player.name()),
                None => out.push('.'),
            }
        }
    }
    out
}
