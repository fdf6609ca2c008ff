//! Error types.
//!
//! Commands coming from the view layer are validated against the current
//! state. A rejected command never touches the board; the engine's
//! convenience methods log the `CommandError` and drop it, while
//! `Game::handle` returns it for callers that care.

use thiserror::Error;

use crate::board::Cell;
use crate::core::{Phase, Player};

/// Why a command from the view layer was ignored.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("command not accepted in phase {0:?}")]
    WrongPhase(Phase),

    #[error("cell index {0} is off the board")]
    OutOfBounds(usize),

    #[error("{0} is empty")]
    EmptyCell(Cell),

    #[error("piece at {cell} belongs to {owner}")]
    NotYourPiece { cell: Cell, owner: Player },

    #[error("{0} is not a legal destination")]
    NotHighlighted(Cell),

    #[error("no piece is selected")]
    NothingSelected,

    #[error("piece at {0} cannot be rotated")]
    NotRotatable(Cell),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Board mutation or decoded board data that would break the board's
/// invariants.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("{0} is already occupied")]
    Occupied(Cell),

    #[error("{0} is empty")]
    Empty(Cell),

    #[error("no room to place {0}'s pieces")]
    NoRoom(Player),

    #[error("({row}, {col}) is off the board")]
    OffBoard { row: u8, col: u8 },

    #[error("board needs {expected} cells, got {found}")]
    CellCount { expected: usize, found: usize },
}

/// Invalid engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
