//! Board positions.

use crate::types::Board;
use serde::{Deserialize, Serialize};

/// A position on the 3x3 board, row-major from the top-left.
///
/// Players address positions by the digits 1-9; internally positions
/// index the board as 0-8. The enum makes out-of-range positions
/// unrepresentable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (digit 1).
    TopLeft,
    /// Top-center (digit 2).
    TopCenter,
    /// Top-right (digit 3).
    TopRight,
    /// Middle-left (digit 4).
    MiddleLeft,
    /// Center (digit 5).
    Center,
    /// Middle-right (digit 6).
    MiddleRight,
    /// Bottom-left (digit 7).
    BottomLeft,
    /// Bottom-center (digit 8).
    BottomCenter,
    /// Bottom-right (digit 9).
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Display label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts the position to its board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates a position from a board index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Position::ALL.get(index).copied()
    }

    /// Creates a position from the 1-9 digit shown to the human.
    pub fn from_digit(digit: u32) -> Option<Self> {
        if (1..=9).contains(&digit) {
            Self::from_index(digit as usize - 1)
        } else {
            None
        }
    }

    /// The 1-9 digit shown to the human for this position.
    pub fn digit(self) -> u32 {
        self.to_index() as u32 + 1
    }

    /// Returns the positions of all empty squares on the board.
    pub fn open_on(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|&pos| board.is_empty(pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
