//! Win detection.

use super::WINNING_LINES;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// Checks the board for a winner.
///
/// Returns `Some(mark)` if that mark occupies all three squares of any
/// winning line. Fixed cost: at most 8 lines of 3 squares.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Checks whether the given mark has won.
#[instrument]
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    check_winner(board) == Some(mark)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::X));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert!(is_winner(&board, Mark::X));
        assert!(!is_winner(&board, Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::O));
        board.set(Position::Center, Square::Occupied(Mark::O));
        board.set(Position::BottomRight, Square::Occupied(Mark::O));
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::X));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected_for_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for line in WINNING_LINES {
                let mut board = Board::new();
                for pos in line {
                    board.set(pos, Square::Occupied(mark));
                }
                assert_eq!(check_winner(&board), Some(mark), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::O));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        assert_eq!(check_winner(&board), None);
    }
}
