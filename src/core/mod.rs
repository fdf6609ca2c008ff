//! Core engine types: players, state, commands, RNG, configuration.
//!
//! Nothing here knows about presentation. The view layer talks to the
//! engine through `Command` values and reads back `GameState`.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::GameConfig;
pub use action::{ActionRecord, Command};
pub use state::{GameState, Phase};
