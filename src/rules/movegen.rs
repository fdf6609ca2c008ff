//! Legal destination generation.
//!
//! - Cannon: the left and right neighbours on its row, when empty.
//! - Everything else: the eight king-move neighbours, when empty.
//!
//! There is no capture by movement, so any occupied cell is excluded
//! regardless of owner.

use smallvec::SmallVec;

use crate::board::{Board, Cell, Direction};
use crate::pieces::PieceKind;

/// Destination set. At most eight cells, so it never spills to the heap.
pub type Destinations = SmallVec<[Cell; 8]>;

/// Candidate step directions for a piece kind.
#[must_use]
pub fn step_directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Cannon => &[Direction::West, Direction::East],
        _ => &Direction::KING,
    }
}

/// Legal destinations for whatever stands on `from`.
///
/// An empty source cell has no destinations.
#[must_use]
pub fn legal_destinations(board: &Board, from: Cell) -> Destinations {
    let Some(piece) = board.get(from) else {
        return Destinations::new();
    };

    step_directions(piece.kind)
        .iter()
        .filter_map(|&direction| from.offset(direction))
        .filter(|&cell| board.is_empty(cell))
        .collect()
}
