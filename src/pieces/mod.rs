//! Piece and orientation model.
//!
//! - `PieceKind`: closed enum of the five kinds
//! - `Piece`: kind + owner + rotation
//! - `Rotation`: bounded 45° steps, with the deflection table

mod piece;
mod rotation;

pub use piece::{Piece, PieceKind};
pub use rotation::{RotateDirection, Rotation};
