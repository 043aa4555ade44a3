//! Core domain types: marks, squares and the 3x3 board.

use super::position::Position;
use super::rules;
use derive_more::{Display, Error};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// A player's mark.
///
/// `X` is always the first mark to move, `O` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Mark {
    /// First player's mark.
    #[display("X")]
    X,
    /// Second player's mark.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A mark identifier that names neither `X` nor `O`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown mark type {given:?} (expected \"X\" or \"O\")")]
pub struct InvalidMarkType {
    /// The identifier that failed to parse.
    #[error(not(source))]
    pub given: String,
}

impl FromStr for Mark {
    type Err = InvalidMarkType;

    /// Validates a mark identifier. Only the exact strings `X` and `O` match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(Mark::X),
            "O" => Ok(Mark::O),
            other => Err(InvalidMarkType {
                given: other.to_string(),
            }),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// The 3x3 board.
///
/// Squares only ever go from `Empty` to `Occupied`. The only way back is
/// [`Board::clear`], which resets every square at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Places `mark` at `(row, col)`.
    ///
    /// Returns `false` without touching the board if the coordinates are off
    /// the board or the square is already taken.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        match Position::from_row_col(row, col) {
            Some(pos) => self.place(pos, mark),
            None => {
                debug!("Coordinates off the board");
                false
            }
        }
    }

    /// Places `mark` at `pos` if the square is empty.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> bool {
        let square = &mut self.squares[pos.to_index()];
        if *square != Square::Empty {
            debug!(?square, "Square already occupied");
            return false;
        }
        *square = Square::Occupied(mark);
        true
    }

    /// Overwrites a square without any checks.
    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns the mark at `(row, col)`, or `None` if empty or off the board.
    pub fn mark_at(&self, row: usize, col: usize) -> Option<Mark> {
        Position::from_row_col(row, col).and_then(|pos| self.square(pos).mark())
    }

    /// Returns the square at `pos`.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.square(pos) == Square::Empty
    }

    /// Positions still open for a move, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::iter().filter(|&pos| self.is_empty(pos)).collect()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Iterates over occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Mark)> + '_ {
        Position::iter().filter_map(|pos| self.square(pos).mark().map(|mark| (pos, mark)))
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Resets every square to `Empty`.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns the mark owning a complete line, if any.
    ///
    /// Lines are scanned rows first, then columns, then the main diagonal and
    /// the anti-diagonal. The first complete line wins.
    pub fn check_win(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Full board with no complete line.
    pub fn check_draw(&self) -> bool {
        rules::is_draw(self)
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.mark_at(row, col) {
                    Some(mark) => mark.to_string(),
                    None => ".".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
