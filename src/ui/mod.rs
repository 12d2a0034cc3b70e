//! Text shell: draws the board as `-`/`x`/`o` rows, reads 1-based column
//! choices and announces the result.

mod app;
mod prompt;

pub use app::App;
pub use prompt::parse_column;
