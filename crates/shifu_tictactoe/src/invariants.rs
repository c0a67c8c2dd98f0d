//! First-class invariants over round state.
//!
//! Invariants are logical properties that must hold after every applied
//! move. They are checked in debug builds by the engine and exercised
//! directly in tests.

use crate::game::Game;
use crate::types::{Board, Square};
use tracing::warn;

/// A logical property that must hold for a round.
pub trait Invariant {
    /// Checks if the invariant holds for the given round.
    fn holds(game: &Game) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: squares are write-once.
///
/// Replaying the move history onto a fresh board must find every target
/// square empty and must reconstruct the current board exactly.
pub struct MonotonicBoard;

impl Invariant for MonotonicBoard {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for action in game.history() {
            if reconstructed.get(action.position) != Square::Empty {
                return false;
            }
            reconstructed.set(action.position, Square::Occupied(action.mark));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "board squares are write-once (never overwritten)"
    }
}

/// Invariant: the turn alternates strictly.
///
/// The history alternates marks starting from the round's starting
/// mark, and after N moves the current turn equals the starting mark
/// iff N is even.
pub struct AlternatingTurn;

impl Invariant for AlternatingTurn {
    fn holds(game: &Game) -> bool {
        let mut expected = game.starting_mark();
        for action in game.history() {
            if action.mark != expected {
                return false;
            }
            expected = expected.opponent();
        }
        game.current_turn() == expected
    }

    fn description() -> &'static str {
        "marks alternate strictly from the starting mark"
    }
}

/// Checks all round invariants, logging any violation.
pub fn check_all(game: &Game) -> bool {
    let mut ok = true;
    if !MonotonicBoard::holds(game) {
        warn!(invariant = MonotonicBoard::description(), "invariant violated");
        ok = false;
    }
    if !AlternatingTurn::holds(game) {
        warn!(invariant = AlternatingTurn::description(), "invariant violated");
        ok = false;
    }
    ok
}

/// Asserts all round invariants in debug builds.
pub(crate) fn assert_invariants(game: &Game) {
    debug_assert!(check_all(game), "round invariant violated");
}
