//! First-class move actions.
//!
//! Moves are domain events, not side effects: they carry the acting
//! mark and the target position, and can be validated, logged, and
//! replayed independently of the board they apply to.

use crate::position::Position;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark making the move.
    pub mark: Mark,
    /// The target position.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Error rejecting a move.
///
/// Illegal moves are explicit rejections, never silent no-ops, so the
/// caller can re-prompt or log. None of these are fatal: both the
/// human input loop and the selector recover at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0.label())]
    SquareOccupied(Position),

    /// It is not this mark's turn.
    #[display("it is not {_0}'s turn")]
    WrongMark(Mark),

    /// The round has already ended; no further moves are accepted.
    #[display("the round is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
