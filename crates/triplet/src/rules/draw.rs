//! Draw detection.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winning line.
///
/// A move that fills the board and completes a line is a win, never a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    fn fill(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                if let Ok(mark) = c.to_string().parse::<Mark>() {
                    assert!(board.place_mark(row, col, mark));
                }
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::X);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = fill(["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = fill(["XXX", "OO.", "..."]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = fill(["XOX", "OXO", "OXX"]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert!(!is_draw(&board));
    }
}
