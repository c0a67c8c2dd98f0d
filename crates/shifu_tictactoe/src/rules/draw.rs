//! Draw detection.

use super::win::check_winner;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// Delegates to [`Board::is_full`] so fullness has one definition.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks if the board is a draw: full with no winner.
///
/// The winner check takes precedence, so a full board where someone
/// won is never a draw.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Mark, Square};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O - full, no winner.
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::O));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        board.set(Position::MiddleLeft, Square::Occupied(Mark::O));
        board.set(Position::Center, Square::Occupied(Mark::X));
        board.set(Position::MiddleRight, Square::Occupied(Mark::X));
        board.set(Position::BottomLeft, Square::Occupied(Mark::O));
        board.set(Position::BottomCenter, Square::Occupied(Mark::X));
        board.set(Position::BottomRight, Square::Occupied(Mark::O));

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_a_draw() {
        // X X X / O O X / O X O - full, X wins the top row.
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::X));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        board.set(Position::MiddleLeft, Square::Occupied(Mark::O));
        board.set(Position::Center, Square::Occupied(Mark::O));
        board.set(Position::MiddleRight, Square::Occupied(Mark::X));
        board.set(Position::BottomLeft, Square::Occupied(Mark::O));
        board.set(Position::BottomCenter, Square::Occupied(Mark::X));
        board.set(Position::BottomRight, Square::Occupied(Mark::O));

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
