//! Trajectory steps and terminal outcomes.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Direction};
use crate::core::Player;

/// How a shot ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Reached a titan (of either side). The shooter wins.
    TitanHit { cell: Cell, owner: Player },
    /// Stopped by a tank, which stays put.
    Absorbed { cell: Cell },
    /// Stopped by a cannon, which stays put.
    Blocked { cell: Cell },
    /// Left the board; `last` is the final on-board cell.
    ExitedBoard { last: Cell },
    /// Re-entered a deflector it had already left in the same direction.
    Looped { cell: Cell },
}

impl ShotOutcome {
    #[must_use]
    pub const fn ends_game(&self) -> bool {
        matches!(self, ShotOutcome::TitanHit { .. })
    }

    /// Cell where the shot stopped, if it stopped on the board.
    #[must_use]
    pub const fn cell(&self) -> Option<Cell> {
        match *self {
            ShotOutcome::TitanHit { cell, .. }
            | ShotOutcome::Absorbed { cell }
            | ShotOutcome::Blocked { cell }
            | ShotOutcome::Looped { cell } => Some(cell),
            ShotOutcome::ExitedBoard { .. } => None,
        }
    }
}

/// One tick of projectile travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShotStep {
    /// Passed through an empty cell.
    Travel { cell: Cell },
    /// Struck a deflector and now heads `direction` from its cell.
    Deflected { cell: Cell, direction: Direction },
    /// Terminal step; no further steps follow.
    Finished { outcome: ShotOutcome },
}

impl ShotStep {
    /// Cell the projectile occupies after this step, if still on the board.
    #[must_use]
    pub const fn cell(&self) -> Option<Cell> {
        match *self {
            ShotStep::Travel { cell } | ShotStep::Deflected { cell, .. } => Some(cell),
            ShotStep::Finished { outcome } => outcome.cell(),
        }
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<ShotOutcome> {
        match *self {
            ShotStep::Finished { outcome } => Some(outcome),
            _ => None,
        }
    }
}
