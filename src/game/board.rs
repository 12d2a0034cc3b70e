use std::fmt;
use std::io::{self, Write};

use crate::error::{BoardError, MoveError};

use super::player::Player;
use super::scan;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Symbol used in the textual board dump
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Occupied(player) => player.symbol(),
        }
    }

    fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '-' => Some(Cell::Empty),
            'x' => Some(Cell::Occupied(Player::One)),
            'o' => Some(Cell::Occupied(Player::Two)),
            _ => None,
        }
    }
}

/// Fixed-size vertical-drop grid. Row 0 is the top, row `rows - 1` the bottom.
///
/// Occupied cells in a column always form a contiguous run resting on the
/// bottom row; the only way to change the grid is [`Board::place_piece`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }

        Ok(Self::empty(rows, cols))
    }

    /// Caller guarantees `rows * cols` does not overflow.
    fn empty(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Parse a textual dump (one string per row, top to bottom, using the
    /// symbols produced by [`Board::render`]).
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Result<Self, BoardError> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.as_ref().chars().count());
        let mut board = Board::new(rows, cols)?;

        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }

            for (col, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol)
                    .ok_or(BoardError::UnknownSymbol { row, col, symbol })?;
                board.cells[row * cols + col] = cell;
            }
        }

        // Nothing may float above an empty cell
        for row in 0..rows - 1 {
            for col in 0..cols {
                if !board.get(row, col).is_empty() && board.get(row + 1, col).is_empty() {
                    return Err(BoardError::FloatingPiece { row, col });
                }
            }
        }

        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    fn bottom_row(&self, row: usize) -> bool {
        row == self.rows - 1
    }

    fn piece_under(&self, row: usize, col: usize) -> bool {
        !self.get(row + 1, col).is_empty()
    }

    /// A cell accepts a piece when it is empty and rests on the bottom row or
    /// on another piece.
    fn placeable(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_empty() && (self.bottom_row(row) || self.piece_under(row, col))
    }

    /// Row a piece dropped into `col` would land in, or `None` if the column
    /// is full or out of range.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.placeable(row, col))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        !self.get(0, col).is_empty()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.is_column_full(col))
    }

    /// Drop a piece for `player` into `col`. It lands on top of the existing
    /// stack; the grid is untouched on error.
    pub fn place_piece(&mut self, player: Player, col: usize) -> Result<(), MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }

        let row = self
            .landing_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row * self.cols + col] = Cell::Occupied(player);
        Ok(())
    }

    /// Render a single row as its symbols
    pub fn render_row(&self, row: usize) -> String {
        (0..self.cols).map(|col| self.get(row, col).symbol()).collect()
    }

    /// Rows top to bottom: `-` for empty, `x` for player 1, `o` for player 2.
    pub fn render(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.rows).map(move |row| self.render_row(row))
    }

    /// Write every rendered row followed by a newline.
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.render() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Player owning four aligned pieces, if any.
    pub fn winner(&self) -> Option<Player> {
        scan::find_winner(self)
    }

    /// True once any player has four in a row horizontally, vertically or
    /// diagonally. A full board without such a run is not game over.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.render().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(&line)?;
        }
        Ok(())
    }
}
