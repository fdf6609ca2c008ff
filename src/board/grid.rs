//! The 8×8 board.
//!
//! `Board` is the exclusive owner of every piece. Each cell holds at
//! most one piece; mutations that would break that return `BoardError`.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, CELL_COUNT};
use crate::core::Player;
use crate::error::BoardError;
use crate::pieces::{Piece, PieceKind};

/// Cell-indexed piece storage. Always exactly `CELL_COUNT` slots.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    cells: Vec<Option<Piece>>,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    cells: Vec<Option<Piece>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.cells.len() != CELL_COUNT {
            return Err(BoardError::CellCount {
                expected: CELL_COUNT,
                found: raw.cells.len(),
            });
        }
        Ok(Self { cells: raw.cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![None; CELL_COUNT],
        }
    }

    /// Piece at `cell`, if any.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<&Piece> {
        self.cells[cell.index()].as_ref()
    }

    /// Mutable access to the piece at `cell`.
    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut Piece> {
        self.cells[cell.index()].as_mut()
    }

    #[must_use]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.cells[cell.index()].is_none()
    }

    /// Put a piece on an empty cell.
    pub fn place(&mut self, cell: Cell, piece: Piece) -> Result<(), BoardError> {
        let slot = &mut self.cells[cell.index()];
        if slot.is_some() {
            return Err(BoardError::Occupied(cell));
        }
        *slot = Some(piece);
        Ok(())
    }

    /// Remove and return the piece at `cell`.
    pub fn take(&mut self, cell: Cell) -> Option<Piece> {
        self.cells[cell.index()].take()
    }

    /// Move a piece between cells, keeping its rotation.
    pub fn move_piece(&mut self, from: Cell, to: Cell) -> Result<(), BoardError> {
        if !self.is_empty(to) {
            return Err(BoardError::Occupied(to));
        }
        let piece = self.take(from).ok_or(BoardError::Empty(from))?;
        self.cells[to.index()] = Some(piece);
        Ok(())
    }

    /// Locate a player's piece of the given kind.
    #[must_use]
    pub fn find(&self, owner: Player, kind: PieceKind) -> Option<Cell> {
        self.pieces()
            .find(|(_, piece)| piece.owner == owner && piece.kind == kind)
            .map(|(cell, _)| cell)
    }

    /// Iterate over occupied cells in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, &Piece)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| Some((Cell::from_index(index)?, slot.as_ref()?)))
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }

    /// Remove every piece.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|slot| *slot = None);
    }
}
