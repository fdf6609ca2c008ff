//! Board, cell addressing, and starting placement.
//!
//! - `Cell` / `Direction`: coordinates and unit steps on the 8×8 grid
//! - `Board`: cell-indexed piece storage, one piece per cell at most
//! - `placement`: seeded random setup of both players' home bands

mod cell;
mod grid;
pub mod placement;

pub use cell::{Cell, Direction, BOARD_SIZE, CELL_COUNT};
pub use grid::Board;
pub use placement::{place_starting_pieces, setup_board, Placement};
