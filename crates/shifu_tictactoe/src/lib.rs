//! Tic-tac-toe with a heuristic computer opponent.
//!
//! This crate holds the pure game logic: board state, move legality,
//! win and draw detection, and the [`Shifu`] move selector that picks
//! the computer's move from additive offense/defense heuristics.
//!
//! There is no I/O here. Frontends drive a [`Game`] per round, query it
//! for legal moves, and apply [`Move`]s; terminal rendering and human
//! input live in the `shifu_tui` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod invariants;
mod position;
pub mod rules;
mod selector;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, GameStatus};
pub use invariants::{AlternatingTurn, Invariant, MonotonicBoard};
pub use position::Position;
pub use rules::WINNING_LINES;
pub use selector::{
    DEFAULT_DEFENSE_MULTIPLIER, DEFAULT_OFFENSE_INCREMENT, Shifu, ShifuConfig, ShifuError,
};
pub use types::{Board, Mark, Square};
