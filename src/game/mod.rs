//! Game engine: the turn state machine over one `GameState`.
//!
//! ## Example Usage
//!
//! ```
//! use titan_ricochet::board::{Board, Cell};
//! use titan_ricochet::core::{GameConfig, Player};
//! use titan_ricochet::game::{Game, Phase};
//! use titan_ricochet::pieces::{Piece, PieceKind};
//!
//! let mut board = Board::new();
//! board.place(Cell::new(0, 3).unwrap(), Piece::new(PieceKind::Cannon, Player::One)).unwrap();
//! board.place(Cell::new(7, 4).unwrap(), Piece::new(PieceKind::Titan, Player::Two)).unwrap();
//!
//! let mut game = Game::with_board(GameConfig::default(), board);
//! game.select_piece(Cell::new(0, 3).unwrap());
//! game.choose_destination(Cell::new(0, 4).unwrap());
//! assert_eq!(game.phase(), Phase::Firing);
//!
//! game.resolve_shot();
//! assert_eq!(game.last_result().unwrap().to_string(), "Player 1 wins!");
//! ```

mod engine;

pub use crate::core::Phase;
pub use engine::Game;
