//! # Bot Core Module
//!
//! The transport-agnostic heart of tictacbot: everything needed to run one
//! tic-tac-toe conversation, and nothing about how messages travel.
//!
//! ## Components
//!
//! - [`game`] - 3x3 board and rules engine (legality, win/draw detection)
//! - [`commands`] - inbound message grammar and parser
//! - [`session`] - per-user session state machine and reply rendering
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Harness        │ ← console loop, tests, any chat transport
//! └─────────────────┘
//!          │ one text line in / callback out
//! ┌─────────────────┐
//! │  GameSession    │ ← parse, dispatch, render
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  TicTacToe      │ ← board state and rules
//! └─────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tictacbot::bot::GameSession;
//!
//! let mut session = GameSession::new("docs", Box::new(|reply| println!("{reply}")));
//! session.handle_message("start");
//! session.handle_message("X 1 1");
//! ```
//!
//! Each session serves exactly one user; a harness dispatching multiple
//! conversations creates one independent session per user.

pub mod commands;
pub mod game;
pub mod session;

pub use game::{Cell, Player, TicTacToe};
pub use session::GameSession;
