//! Player trait and implementations.

mod human;
mod shifu;

pub use human::HumanPlayer;
pub use shifu::ShifuPlayer;

use anyhow::Result;
use shifu_tictactoe::{Game, Position};

/// A side that can produce moves for a round.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets this player's next move for the given round.
    async fn get_move(&mut self, game: &Game) -> Result<Position>;

    /// The player's display name.
    fn name(&self) -> &str;
}
