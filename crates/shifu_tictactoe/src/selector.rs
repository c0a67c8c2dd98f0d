//! The heuristic move selector ("Shifu").
//!
//! The selector scores every open cell with two additive heuristics
//! computed over the shared winning lines, multiplies them together,
//! and picks uniformly at random among the cells tied for the maximum.
//! No search: the whole decision is a fixed pass over 8 lines.

use crate::action::Move;
use crate::game::Game;
use crate::position::Position;
use crate::rules::WINNING_LINES;
use crate::types::{Mark, Square};
use rand::seq::IndexedRandom;
use tracing::{debug, instrument, warn};

/// Default defense multiplier. Values above roughly 5.372 make the
/// selector unbeatable when it moves first and let it lose about 1% of
/// rounds when the human moves first; the exact value encodes that
/// difficulty curve, so treat it as tuning, not as a number to derive.
pub const DEFAULT_DEFENSE_MULTIPLIER: f64 = 5.373;

/// Default offense increment per own mark on a winnable line.
pub const DEFAULT_OFFENSE_INCREMENT: f64 = 1.0;

/// Tuning for the selector's two heuristics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShifuConfig {
    /// Base of the per-line defense increment, raised to the number of
    /// opponent marks on the line. Must be greater than 1 so that a
    /// line with two opponent marks dominates every offensive option.
    pub defense_multiplier: f64,
    /// Added to a winnable line's increment once per own mark already
    /// on the line.
    pub offense_increment: f64,
}

impl Default for ShifuConfig {
    fn default() -> Self {
        Self {
            defense_multiplier: DEFAULT_DEFENSE_MULTIPLIER,
            offense_increment: DEFAULT_OFFENSE_INCREMENT,
        }
    }
}

/// Error from the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ShifuError {
    /// Asked to move with no open cells on the board.
    #[display("no moves available")]
    NoMovesAvailable,
}

impl std::error::Error for ShifuError {}

/// Heuristic computer opponent.
#[derive(Debug, Clone)]
pub struct Shifu {
    mark: Mark,
    config: ShifuConfig,
}

impl Shifu {
    /// Creates a selector playing the given mark with default tuning.
    pub fn new(mark: Mark) -> Self {
        Self::with_config(mark, ShifuConfig::default())
    }

    /// Creates a selector with explicit tuning.
    pub fn with_config(mark: Mark, config: ShifuConfig) -> Self {
        Self { mark, config }
    }

    /// The mark this selector plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// The mark this selector plays against.
    pub fn opponent(&self) -> Mark {
        self.mark.opponent()
    }

    fn count_in_line(game: &Game, line: &[Position; 3], mark: Mark) -> usize {
        line.iter()
            .filter(|&&pos| game.board().get(pos) == Square::Occupied(mark))
            .count()
    }

    /// Offense weights, indexed by position (closed cells stay 0).
    ///
    /// Each open cell starts at 1. Every line still winnable by this
    /// selector (no opponent mark on it) adds
    /// `1 + offense_increment * own_marks_on_line` to its open cells,
    /// so cells shared by several half-built lines accumulate weight.
    pub fn offense_weights(&self, game: &Game) -> [f64; 9] {
        let mut weights = [0.0; 9];
        for pos in game.open_cells() {
            weights[pos.to_index()] = 1.0;
        }

        for line in &WINNING_LINES {
            if Self::count_in_line(game, line, self.opponent()) > 0 {
                continue;
            }
            let own = Self::count_in_line(game, line, self.mark);
            let increment = 1.0 + self.config.offense_increment * own as f64;
            for &pos in line {
                if game.is_legal(pos) {
                    weights[pos.to_index()] += increment;
                }
            }
        }

        weights
    }

    /// Defense weights, indexed by position (closed cells stay 0).
    ///
    /// Each open cell starts at 1. Every line the opponent has entered
    /// adds `defense_multiplier ^ opponent_marks_on_line` to its open
    /// cells. The per-line increment is multiplicative, so a line with
    /// two opponent marks swamps everything else and forces the block.
    pub fn defense_weights(&self, game: &Game) -> [f64; 9] {
        let mut weights = [0.0; 9];
        for pos in game.open_cells() {
            weights[pos.to_index()] = 1.0;
        }

        for line in &WINNING_LINES {
            let opponent = Self::count_in_line(game, line, self.opponent());
            if opponent == 0 {
                continue;
            }
            let increment = self.config.defense_multiplier.powi(opponent as i32);
            for &pos in line {
                if game.is_legal(pos) {
                    weights[pos.to_index()] += increment;
                }
            }
        }

        weights
    }

    /// Chooses the next move for this selector.
    ///
    /// Combines offense and defense per open cell, keeps every cell
    /// tied for the exact maximum (no tolerance: ties come from
    /// identical accumulation orders), and picks uniformly at random
    /// among them.
    ///
    /// # Errors
    ///
    /// Returns [`ShifuError::NoMovesAvailable`] if the board has no
    /// open cells.
    #[instrument(skip(game))]
    pub fn choose_move(&self, game: &Game) -> Result<Position, ShifuError> {
        let open = game.open_cells();
        if open.is_empty() {
            return Err(ShifuError::NoMovesAvailable);
        }

        let offense = self.offense_weights(game);
        let defense = self.defense_weights(game);

        let combined = |pos: Position| {
            let i = pos.to_index();
            offense[i] * defense[i]
        };

        let mut max = f64::NEG_INFINITY;
        for &pos in &open {
            max = max.max(combined(pos));
        }

        let candidates: Vec<Position> = open
            .iter()
            .copied()
            .filter(|&pos| combined(pos) >= max)
            .collect();

        debug!(?candidates, max, "heuristics computed");

        let mut rng = rand::rng();
        if let Some(&choice) = candidates.choose(&mut rng) {
            Ok(choice)
        } else if let Some(&choice) = open.choose(&mut rng) {
            // No cell carried a weight; fall back to a uniform pick.
            Ok(choice)
        } else {
            Err(ShifuError::NoMovesAvailable)
        }
    }

    /// Chooses a move and applies it to the game.
    ///
    /// Legality and turn are re-checked immediately before applying;
    /// if either check fails the selector makes no move and returns
    /// `Ok(None)` rather than propagating a fatal error.
    ///
    /// # Errors
    ///
    /// Returns [`ShifuError::NoMovesAvailable`] if the board has no
    /// open cells.
    #[instrument(skip(game))]
    pub fn play(&self, game: &mut Game) -> Result<Option<Position>, ShifuError> {
        let position = self.choose_move(game)?;

        if !game.is_legal(position) || !game.is_current_turn(self.mark) {
            warn!(%position, "re-check failed, not moving");
            return Ok(None);
        }

        match game.make_move(Move::new(self.mark, position)) {
            Ok(()) => Ok(Some(position)),
            Err(err) => {
                warn!(%err, "move rejected on apply, not moving");
                Ok(None)
            }
        }
    }
}
