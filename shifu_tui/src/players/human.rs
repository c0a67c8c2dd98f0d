//! Human player that gets input from the keyboard.

use super::Player;
use anyhow::Result;
use crossterm::event::KeyCode;
use shifu_tictactoe::{Game, Position};
use tokio::sync::mpsc;

/// Human player reading 1-9 digits from a key channel.
///
/// Any key naming a board position is forwarded as the move, occupied
/// or not; the round loop applies it and reports a rejection back to
/// the UI, so a bad choice re-prompts with visible feedback instead of
/// being silently swallowed.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<KeyCode>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<KeyCode>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _game: &Game) -> Result<Position> {
        while let Some(key) = self.input_rx.recv().await {
            let KeyCode::Char(c) = key else { continue };
            let Some(digit) = c.to_digit(10) else { continue };
            if let Some(pos) = Position::from_digit(digit) {
                return Ok(pos);
            }
        }

        anyhow::bail!("input channel closed")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
