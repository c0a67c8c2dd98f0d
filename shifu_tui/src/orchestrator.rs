//! Round and session orchestration.
//!
//! The orchestrator is the session driver: it creates a fresh round
//! with randomly drawn marks, alternates turns between the human and
//! the Shifu player, reports events to the UI, and waits for the
//! play-again decision between rounds.

use crate::players::{HumanPlayer, Player, ShifuPlayer};
use anyhow::Result;
use crossterm::event::KeyCode;
use rand::Rng;
use shifu_tictactoe::{Board, Game, GameStatus, Mark, Move, Position};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Messages sent from the orchestrator to the UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A new round started.
    RoundStarted {
        /// The mark the human plays this round.
        human_mark: Mark,
        /// Whether the Shifu moves first.
        shifu_starts: bool,
    },
    /// Board state updated.
    StateChanged {
        /// Snapshot of the board.
        board: Board,
        /// The mark to move next.
        to_move: Mark,
    },
    /// A move was applied.
    MoveMade {
        /// Display name of the mover.
        mover: String,
        /// The position played.
        position: Position,
    },
    /// A submitted move was rejected; the mover is re-prompted.
    InvalidMove {
        /// Why the move was rejected.
        reason: String,
    },
    /// The round reached a terminal state.
    RoundOver {
        /// Won or Draw.
        outcome: GameStatus,
    },
}

/// Session decisions sent from the UI to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionControl {
    /// Start another round.
    PlayAgain,
    /// End the session.
    Quit,
}

/// Drives rounds between the human and the Shifu.
pub struct Orchestrator {
    human: HumanPlayer,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    control_rx: mpsc::UnboundedReceiver<SessionControl>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        key_rx: mpsc::UnboundedReceiver<KeyCode>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
        control_rx: mpsc::UnboundedReceiver<SessionControl>,
    ) -> Self {
        Self {
            human: HumanPlayer::new("You", key_rx),
            event_tx,
            control_rx,
        }
    }

    /// Runs rounds until the player declines to continue.
    pub async fn run(&mut self) -> Result<()> {
        info!("starting session");

        loop {
            let outcome = self.play_round().await?;
            self.event_tx.send(GameEvent::RoundOver { outcome })?;

            match self.control_rx.recv().await {
                Some(SessionControl::PlayAgain) => continue,
                Some(SessionControl::Quit) | None => {
                    info!("session ended");
                    return Ok(());
                }
            }
        }
    }

    /// Plays one round to a terminal state.
    async fn play_round(&mut self) -> Result<GameStatus> {
        // Both the starting mark and the Shifu's mark are drawn fresh
        // each round, so who plays X and who moves first both vary.
        let starting_mark = random_mark();
        let shifu_mark = random_mark();

        let mut game = Game::new(starting_mark);
        let mut shifu = ShifuPlayer::new(shifu_mark);

        info!(%starting_mark, %shifu_mark, "round started");
        self.event_tx.send(GameEvent::RoundStarted {
            human_mark: shifu_mark.opponent(),
            shifu_starts: starting_mark == shifu_mark,
        })?;
        send_state(&self.event_tx, &game)?;

        while !game.game_over() {
            if game.is_current_turn(shifu.mark()) {
                half_move(&mut game, &mut shifu, &self.event_tx).await?;
            } else {
                half_move(&mut game, &mut self.human, &self.event_tx).await?;
            }
            send_state(&self.event_tx, &game)?;
        }

        info!(outcome = ?game.status(), "round over");
        Ok(game.status())
    }
}

/// Obtains one move from the player and applies it, re-prompting on
/// rejection. Round state is passed in explicitly; this function holds
/// no state of its own.
async fn half_move(
    game: &mut Game,
    player: &mut dyn Player,
    event_tx: &mpsc::UnboundedSender<GameEvent>,
) -> Result<()> {
    loop {
        let position = player.get_move(game).await?;
        let action = Move::new(game.current_turn(), position);

        match game.make_move(action) {
            Ok(()) => {
                debug!(mover = player.name(), %position, "move applied");
                event_tx.send(GameEvent::MoveMade {
                    mover: player.name().to_string(),
                    position,
                })?;
                return Ok(());
            }
            Err(err) => {
                debug!(mover = player.name(), %err, "move rejected, re-prompting");
                event_tx.send(GameEvent::InvalidMove {
                    reason: err.to_string(),
                })?;
            }
        }
    }
}

fn send_state(event_tx: &mpsc::UnboundedSender<GameEvent>, game: &Game) -> Result<()> {
    debug!(board = %game.board(), to_move = %game.current_turn(), "board state");
    event_tx.send(GameEvent::StateChanged {
        board: game.board().clone(),
        to_move: game.current_turn(),
    })?;
    Ok(())
}

fn random_mark() -> Mark {
    if rand::rng().random_bool(0.5) {
        Mark::X
    } else {
        Mark::O
    }
}
