//! Application state and the session state machine.

use crate::orchestrator::GameEvent;
use shifu_tictactoe::{Board, GameStatus, Mark};

/// Phase of the play-again session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No round has started yet.
    AwaitingStart,
    /// A round is being played.
    RoundInProgress,
    /// The round ended; waiting for the play-again decision.
    AwaitingReplay,
    /// The player declined another round.
    Ended,
}

/// UI-side state, updated from orchestrator events.
pub struct App {
    phase: SessionPhase,
    board: Board,
    human_mark: Option<Mark>,
    status_message: String,
}

impl App {
    /// Creates a new application awaiting its first round.
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::AwaitingStart,
            board: Board::new(),
            human_mark: None,
            status_message: "Waiting for the round to start...".to_string(),
        }
    }

    /// Current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Latest board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark the human plays this round, once known.
    pub fn human_mark(&self) -> Option<Mark> {
        self.human_mark
    }

    /// Current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Applies an orchestrator event to the UI state.
    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::RoundStarted {
                human_mark,
                shifu_starts,
            } => {
                self.phase = SessionPhase::RoundInProgress;
                self.board = Board::new();
                self.human_mark = Some(human_mark);
                let first = if shifu_starts { "The Shifu is" } else { "You are" };
                self.status_message =
                    format!("You are \"{human_mark}\". {first} the first player.");
            }
            GameEvent::StateChanged { board, to_move } => {
                self.board = board;
                if self.phase == SessionPhase::RoundInProgress {
                    self.status_message = if self.human_mark == Some(to_move) {
                        "Your move: press 1-9.".to_string()
                    } else {
                        "The Shifu is thinking...".to_string()
                    };
                }
            }
            GameEvent::MoveMade { mover, position } => {
                if self.phase == SessionPhase::RoundInProgress {
                    self.status_message = format!("{mover} played {position}.");
                }
            }
            GameEvent::InvalidMove { reason } => {
                self.status_message = format!("Invalid move: {reason}. Try again.");
            }
            GameEvent::RoundOver { outcome } => {
                self.phase = SessionPhase::AwaitingReplay;
                let verdict = match outcome {
                    GameStatus::Won(mark) if Some(mark) == self.human_mark => "You win!",
                    GameStatus::Won(_) => "You lose!",
                    GameStatus::Draw => "It's a draw!",
                    GameStatus::InProgress => "Round ended early.",
                };
                self.status_message = format!("{verdict} Play again? (y/n)");
            }
        }
    }

    /// Marks the session as ended.
    pub fn end_session(&mut self) {
        self.phase = SessionPhase::Ended;
        self.status_message = "Thanks for playing!".to_string();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
