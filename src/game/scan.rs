//! Run-length win scan shared by all four line directions.

use super::board::{Board, Cell};
use super::player::Player;

/// Number of aligned pieces needed to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right within a row
    Horizontal,
    /// Top to bottom within a column
    Vertical,
    /// ↘
    DiagonalDownRight,
    /// ↙
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// `(row_step, col_step)` between consecutive cells of a line.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// First cell of every line running in this direction. Each line of a
    /// `rows × cols` grid starts at exactly one of the returned cells.
    pub fn origins(self, rows: usize, cols: usize) -> Vec<(usize, usize)> {
        match self {
            Direction::Horizontal => (0..rows).map(|row| (row, 0)).collect(),
            Direction::Vertical => (0..cols).map(|col| (0, col)).collect(),
            // Left edge, then the rest of the top row
            Direction::DiagonalDownRight => (0..rows)
                .map(|row| (row, 0))
                .chain((1..cols).map(|col| (0, col)))
                .collect(),
            // Top row, then the rest of the right edge
            Direction::DiagonalDownLeft => (0..cols)
                .map(|col| (0, col))
                .chain((1..rows).map(|row| (row, cols - 1)))
                .collect(),
        }
    }

    /// Number of cells on the line starting at `origin`.
    pub fn line_len(self, origin: (usize, usize), rows: usize, cols: usize) -> usize {
        let (row, col) = origin;
        match self {
            Direction::Horizontal => cols - col,
            Direction::Vertical => rows - row,
            Direction::DiagonalDownRight => (rows - row).min(cols - col),
            Direction::DiagonalDownLeft => (rows - row).min(col + 1),
        }
    }
}

/// Cells of one line, walked from its origin until it leaves the board.
pub struct Line<'a> {
    board: &'a Board,
    row: isize,
    col: isize,
    step: (isize, isize),
}

impl<'a> Line<'a> {
    pub fn new(board: &'a Board, origin: (usize, usize), direction: Direction) -> Self {
        Line {
            board,
            row: origin.0 as isize,
            col: origin.1 as isize,
            step: direction.step(),
        }
    }
}

impl Iterator for Line<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.row < 0 || self.col < 0 {
            return None;
        }
        let (row, col) = (self.row as usize, self.col as usize);
        if row >= self.board.rows() || col >= self.board.cols() {
            return None;
        }
        self.row += self.step.0;
        self.col += self.step.1;
        Some(self.board.get(row, col))
    }
}

/// Walk a sequence of cells and return the owner of the first run of
/// `WIN_LENGTH` equal, non-empty cells.
pub fn run_winner(cells: impl IntoIterator<Item = Cell>) -> Option<Player> {
    let mut last = Cell::Empty;
    let mut run = 0;

    for cell in cells {
        if cell == last {
            run += 1;
        } else {
            last = cell;
            run = 1;
        }

        if run >= WIN_LENGTH {
            if let Cell::Occupied(player) = last {
                return Some(player);
            }
        }
    }

    None
}

/// Scan every line of the board in every direction, stopping at the first
/// winning run.
pub fn find_winner(board: &Board) -> Option<Player> {
    let (rows, cols) = (board.rows(), board.cols());

    Direction::ALL.iter().find_map(|&direction| {
        direction
            .origins(rows, cols)
            .into_iter()
            .filter(|&origin| direction.line_len(origin, rows, cols) >= WIN_LENGTH)
            .find_map(|origin| run_winner(Line::new(board, origin, direction)))
    })
}
