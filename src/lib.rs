//! # Tictacbot - a tic-tac-toe game bot for text chat
//!
//! Tictacbot implements the server side of a two-player tic-tac-toe session
//! driven entirely by textual messages: it interprets inbound commands,
//! keeps the authoritative board, validates and applies moves, detects the
//! end of the game, and renders human-readable status text back.
//!
//! ## Features
//!
//! - **Transport-agnostic core**: the session talks to the world through a
//!   single inbound call and a single outbound callback, so any chat
//!   harness (or a test closure) can drive it.
//! - **Engine-enforced legality**: range, occupancy, turn order and
//!   terminal state are all checked in one place.
//! - **Terse wire protocol**: `start` begins a game; `X 1 2` claims column
//!   1, row 2 for player X.
//! - **Console harness included**: a small tokio stdin/stdout pump for
//!   playing locally, with TOML configuration and file logging.
//!
//! ## Quick Start
//!
//! ```rust
//! use tictacbot::bot::GameSession;
//!
//! let mut session = GameSession::new("demo", Box::new(|reply| println!("{reply}")));
//! session.handle_message("start");   // prints the empty field
//! session.handle_message("X 1 1");   // X takes the center
//! ```
//!
//! ## Module Organization
//!
//! - [`bot`] - Core game engine, command grammar, and session controller
//! - [`console`] - Stdin/stdout messaging harness
//! - [`config`] - Configuration management
//! - [`logutil`] - Log sanitization helpers

pub mod bot;
pub mod config;
pub mod console;
pub mod logutil;
