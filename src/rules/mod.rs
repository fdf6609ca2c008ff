//! Movement rules and game results.
//!
//! - `movegen`: legal destinations for a piece
//! - `result`: who won and why

pub mod movegen;
pub mod result;

pub use movegen::{legal_destinations, step_directions, Destinations};
pub use result::{GameResult, WinReason};
