//! Game rules: winning lines, win detection, draw detection.
//!
//! Rules are pure functions over a [`Board`], separated from board
//! storage so the engine and the heuristic selector evaluate the same
//! definitions.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, is_winner};

use crate::position::Position;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Defined once and shared by win detection and the heuristic selector
/// so the two can never drift apart.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_position_appears_in_expected_line_count() {
        // Corners sit on 3 lines, edges on 2, the center on 4.
        let count = |pos: Position| {
            WINNING_LINES
                .iter()
                .filter(|line| line.contains(&pos))
                .count()
        };
        assert_eq!(count(Position::TopLeft), 3);
        assert_eq!(count(Position::TopCenter), 2);
        assert_eq!(count(Position::Center), 4);
        assert_eq!(count(Position::BottomRight), 3);
    }
}
