//! Game results.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner's shot reached a titan.
    TitanHit,
    /// The loser's clock ran out.
    Timeout,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Player,
    pub reason: WinReason,
}

impl GameResult {
    #[must_use]
    pub const fn new(winner: Player, reason: WinReason) -> Self {
        Self { winner, reason }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }

    #[must_use]
    pub const fn loser(&self) -> Player {
        self.winner.opponent()
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            WinReason::TitanHit => write!(f, "{} wins!", self.winner),
            WinReason::Timeout => write!(f, "{} wins! {} ran out of time.", self.winner, self.loser()),
        }
    }
}
