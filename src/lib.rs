//! # Connect Four
//!
//! Rules engine for Connect Four: a fixed-size vertical-drop board, piece
//! placement with gravity, and four-in-a-row detection across rows, columns
//! and both diagonals. A small line-oriented shell drives it from a terminal.
//!
//! ## Modules
//!
//! - [`game`]: Board engine, players, turn-keeping game state
//! - [`ui`]: Text shell: prompts, input parsing, board dump
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
