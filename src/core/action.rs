//! Commands from the view layer and their history records.
//!
//! A turn is one or more `SelectPiece` commands followed by exactly one
//! action: `ChooseDestination` (move) or `Rotate` (deflectors only).
//! Either action fires the mover's cannon.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::board::Cell;
use crate::pieces::RotateDirection;

/// A command issued by the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Select one of the active player's pieces.
    SelectPiece(Cell),
    /// Move the selected piece to a highlighted cell.
    ChooseDestination(Cell),
    /// Rotate the selected deflector in place.
    Rotate(RotateDirection),
}

impl Command {
    /// Whether this command completes the turn (and fires the cannon).
    #[must_use]
    pub const fn is_action(&self) -> bool {
        !matches!(self, Command::SelectPiece(_))
    }
}

/// An applied turn action, kept for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: Player,

    /// The piece the action was applied to.
    pub piece: Cell,

    /// The action taken.
    pub command: Command,

    /// Turn number when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: Player, piece: Cell, command: Command, turn: u32) -> Self {
        Self {
            player,
            piece,
            command,
            turn,
        }
    }
}
