//! Core Connect Four game logic: board with gravity placement and win scan,
//! player types, and the turn-keeping game state.

mod board;
mod player;
mod scan;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use scan::{Direction, WIN_LENGTH};
pub use state::{GameOutcome, GameState};
