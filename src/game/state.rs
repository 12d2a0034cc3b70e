use tracing::debug;

use crate::error::MoveError;

use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Turn bookkeeping around a [`Board`]: whose move it is and how the game
/// ended. The board itself only knows cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state on a default 6x7 board
    pub fn initial() -> Self {
        Self::with_board(Board::default())
    }

    /// Start a game on the given board. Player 1 moves first.
    pub fn with_board(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::One,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Play the current player's piece into `column`.
    ///
    /// A rejected move leaves both the board and the turn unchanged.
    pub fn apply_move(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        self.board.place_piece(player, column)?;
        debug!(player = player.number(), column, "piece placed");

        if self.board.is_game_over() {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        if let Some(outcome) = self.outcome {
            debug!(?outcome, "game finished");
        }

        self.current_player = player.other();

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::One);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::initial();
        state.apply_move(3).unwrap();

        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.board().get(5, 3), Cell::Occupied(Player::One));
    }

    #[test]
    fn test_full_column_keeps_turn() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state.apply_move(0).unwrap();
        }
        assert_eq!(state.current_player(), Player::One);

        let before = state.clone();
        assert_eq!(
            state.apply_move(0),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(state, before);
        assert!(!state.legal_actions().contains(&0));
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Player 1 builds the bottom row, player 2 stacks on top
        for col in 0..4 {
            state.apply_move(col).unwrap();
            if col < 3 {
                state.apply_move(col).unwrap();
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::One)));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw() {
        // Column order that fills a 6x7 board without four in a row
        let mut state = GameState::initial();
        let pattern = [
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, 4, 5, 4, 5,
            4, 5, 5, 4, 5, 4, 5, 4, 6, 6, 6, 6, 6, 6,
        ];

        for (i, &col) in pattern.iter().enumerate() {
            assert!(!state.is_terminal(), "game ended early at move {i}");
            state.apply_move(col).unwrap();
        }

        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert!(state.board().is_full());
    }

    #[test]
    fn test_custom_board() {
        let mut state = GameState::with_board(Board::new(4, 4).unwrap());
        assert_eq!(state.legal_actions(), vec![0, 1, 2, 3]);
        assert_eq!(
            state.apply_move(4),
            Err(MoveError::InvalidColumn { column: 4, cols: 4 })
        );
        assert_eq!(state.current_player(), Player::One);
    }
}
