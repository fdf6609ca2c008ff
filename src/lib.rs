//! # titan-ricochet
//!
//! Rules engine for a two-player, turn-based cannon game on an 8×8 grid.
//!
//! Each side owns a Titan, a Tank, a Ricochet, a SemiRicochet and a
//! Cannon. A turn is one move or one rotation, after which the mover's
//! cannon fires along its column. The shot travels cell by cell: tanks
//! absorb it, cannons block it, deflectors redirect it, and a titan hit
//! wins the game for the shooter. Each player has a chess clock; running
//! out loses.
//!
//! ## Design Principles
//!
//! 1. **Headless**: the engine never renders, sleeps, or spawns. The view
//!    layer issues `Command`s, advances time, and reads back state and
//!    `GameEvent`s.
//!
//! 2. **Explicit time**: projectile travel is a resumable stepper and the
//!    clock drains only when told to. `driver::Pacer` maps wall time onto
//!    those ticks; tests skip it entirely.
//!
//! 3. **Closed types**: piece kinds and rotations are enums, so the
//!    deflection table and movement rules are exhaustive matches.
//!
//! ## Modules
//!
//! - `core`: players, state, commands, RNG, configuration
//! - `board`: cells, the board, starting placement
//! - `pieces`: piece kinds and rotations
//! - `rules`: movement generation and game results
//! - `projectile`: shot travel and outcomes
//! - `clock`: per-player countdown
//! - `events`: notifications for the view layer
//! - `game`: the turn state machine
//! - `driver`: real-time pacing

pub mod core;
pub mod board;
pub mod pieces;
pub mod rules;
pub mod projectile;
pub mod clock;
pub mod events;
pub mod game;
pub mod driver;
pub mod error;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    GameRng, GameRngState,
    GameConfig,
    Command, ActionRecord,
    GameState, Phase,
};

pub use crate::board::{Board, Cell, Direction, Placement, BOARD_SIZE};

pub use crate::pieces::{Piece, PieceKind, RotateDirection, Rotation};

pub use crate::rules::{legal_destinations, Destinations, GameResult, WinReason};

pub use crate::projectile::{Projectile, ShotOutcome, ShotStep, Trajectory};

pub use crate::clock::{format_clock, Clock};

pub use crate::events::{EventSink, GameEvent};

pub use crate::game::Game;

pub use crate::driver::Pacer;

pub use crate::error::{BoardError, CommandError, ConfigError};
