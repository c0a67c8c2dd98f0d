//! Computer player backed by the heuristic selector.

use super::Player;
use anyhow::Result;
use shifu_tictactoe::{Game, Mark, Position, Shifu};

/// The heuristic computer opponent as a player.
pub struct ShifuPlayer {
    name: String,
    shifu: Shifu,
}

impl ShifuPlayer {
    /// Creates a computer player for the given mark.
    pub fn new(mark: Mark) -> Self {
        Self {
            name: format!("Shifu ({mark})"),
            shifu: Shifu::new(mark),
        }
    }

    /// The mark this player holds.
    pub fn mark(&self) -> Mark {
        self.shifu.mark()
    }
}

#[async_trait::async_trait]
impl Player for ShifuPlayer {
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        Ok(self.shifu.choose_move(game)?)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
