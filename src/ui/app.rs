use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::game::{GameOutcome, GameState};

use super::prompt::parse_column;

/// Line-oriented game loop: draws the board, asks the current player for a
/// column and reports the outcome.
pub struct App<R, W> {
    game_state: GameState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(game_state: GameState, input: R, output: W) -> Self {
        App {
            game_state,
            input,
            output,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop. Returns `None` if input ends before the game
    /// does.
    pub fn run(&mut self) -> io::Result<Option<GameOutcome>> {
        loop {
            self.game_state.board().draw(&mut self.output)?;

            if !self.take_turn()? {
                info!("input closed before the game finished");
                return Ok(None);
            }

            if let Some(outcome) = self.game_state.outcome() {
                self.announce(outcome)?;
                return Ok(Some(outcome));
            }
        }
    }

    /// Keep asking until the current player's piece is placed. Returns false
    /// on end of input.
    fn take_turn(&mut self) -> io::Result<bool> {
        loop {
            let Some(column) = self.read_column()? else {
                return Ok(false);
            };

            match self.game_state.apply_move(column) {
                Ok(()) => return Ok(true),
                Err(err) => {
                    debug!(column, %err, "move rejected, asking again");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Prompt once, then read lines until one names a column on the board.
    fn read_column(&mut self) -> io::Result<Option<usize>> {
        let cols = self.game_state.board().cols();
        writeln!(
            self.output,
            "Player {}, select a column(1-{})",
            self.game_state.current_player().number(),
            cols
        )?;
        self.output.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_column(&line, cols) {
                Ok(column) => return Ok(Some(column)),
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn announce(&mut self, outcome: GameOutcome) -> io::Result<()> {
        match outcome {
            GameOutcome::Winner(player) => writeln!(
                self.output,
                "Congratulations! Player {} wins!",
                player.number()
            ),
            GameOutcome::Draw => writeln!(self.output, "It's a draw! The board is full."),
        }
    }

    /// Hand back the output sink, mostly for inspecting a finished session.
    pub fn into_output(self) -> W {
        self.output
    }
}
