//! Projectile simulation.
//!
//! Firing is modelled as an explicit step sequence rather than a chain
//! of timers: `Projectile` is the resumable per-shot state the engine
//! holds between ticks, `Trajectory` wraps it as a lazy iterator over a
//! fixed board. Real-time pacing is the driver's concern, not this
//! module's.
//!
//! ## Example Usage
//!
//! ```
//! use titan_ricochet::board::{Board, Cell};
//! use titan_ricochet::core::Player;
//! use titan_ricochet::pieces::{Piece, PieceKind};
//! use titan_ricochet::projectile::{Projectile, ShotOutcome};
//!
//! let mut board = Board::new();
//! board.place(Cell::new(7, 0).unwrap(), Piece::new(PieceKind::Cannon, Player::Two)).unwrap();
//! board.place(Cell::new(3, 0).unwrap(), Piece::new(PieceKind::Tank, Player::One)).unwrap();
//!
//! let mut shot = Projectile::fire(&board, Player::Two).unwrap();
//! assert_eq!(
//!     shot.resolve(&board),
//!     Some(ShotOutcome::Absorbed { cell: Cell::new(3, 0).unwrap() })
//! );
//! ```

mod outcome;
mod trajectory;

pub use outcome::{ShotOutcome, ShotStep};
pub use trajectory::{firing_direction, Projectile, Trajectory};
