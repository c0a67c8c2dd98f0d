//! The round state engine.

use crate::action::{Move, MoveError};
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a round.
///
/// A round moves `InProgress -> Won(mark) | Draw` and never leaves a
/// terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The round is ongoing.
    InProgress,
    /// The round ended with a winner.
    Won(Mark),
    /// The round ended with a full board and no winner.
    Draw,
}

/// A single round of tic-tac-toe.
///
/// Owns the board and the turn state. All mutation goes through
/// [`Game::make_move`]; occupied squares are never overwritten and the
/// turn flips after every applied move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    starting_mark: Mark,
    current_turn: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new round with the given starting mark.
    #[instrument]
    pub fn new(starting_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            starting_mark,
            current_turn: starting_mark,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moved first this round.
    pub fn starting_mark(&self) -> Mark {
        self.starting_mark
    }

    /// Returns the mark whose turn it is.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves applied so far, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the positions of all empty squares.
    pub fn open_cells(&self) -> Vec<Position> {
        Position::open_on(&self.board)
    }

    /// Returns the positions occupied by the given mark.
    pub fn cells_owned_by(&self, mark: Mark) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.board.get(pos) == Square::Occupied(mark))
            .collect()
    }

    /// Checks if the given position is open to play.
    pub fn is_legal(&self, position: Position) -> bool {
        self.board.is_empty(position)
    }

    /// Checks if it is the given mark's turn.
    pub fn is_current_turn(&self, mark: Mark) -> bool {
        self.current_turn == mark
    }

    /// Checks if either mark has completed a winning line.
    pub fn has_winner(&self) -> bool {
        rules::check_winner(&self.board).is_some()
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(&self.board)
    }

    /// Checks if the round is a draw: full board, no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Checks if the round has reached a terminal state.
    pub fn game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Applies a move: occupies the position, flips the turn, and
    /// updates the round status.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round already ended.
    /// - [`MoveError::SquareOccupied`] if the position is taken.
    /// - [`MoveError::WrongMark`] if it is not the acting mark's turn.
    #[instrument(skip(self), fields(mark = %action.mark, position = %action.position))]
    pub fn make_move(&mut self, action: Move) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if !self.is_legal(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }
        if !self.is_current_turn(action.mark) {
            return Err(MoveError::WrongMark(action.mark));
        }

        self.board.set(action.position, Square::Occupied(action.mark));
        self.history.push(action);
        // The turn flips after every applied move, including the last.
        self.current_turn = self.current_turn.opponent();

        if let Some(winner) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        }

        invariants::assert_invariants(self);
        Ok(())
    }

    /// Replays a sequence of moves onto a fresh round.
    ///
    /// Stops at the first rejected move and returns its error.
    pub fn replay(starting_mark: Mark, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new(starting_mark);
        for &action in moves {
            game.make_move(action)?;
        }
        Ok(game)
    }
}
