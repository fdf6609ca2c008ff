//! Game state.
//!
//! Everything one game instance knows: the board, whose turn it is, the
//! current phase of the turn, the selection and its highlights, both
//! clocks, the in-flight projectile, and the action history.
//!
//! The history is an `im::Vector` so snapshots of the state are cheap
//! to clone.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::player::Player;
use crate::board::{Board, Cell};
use crate::clock::Clock;
use crate::projectile::Projectile;
use crate::rules::{Destinations, GameResult};

/// Where the active player is within their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the active player to pick one of their pieces.
    AwaitingSelection,
    /// A piece is selected; waiting for a destination or rotation.
    AwaitingDestination,
    /// A shot is in flight; commands are ignored and clocks are paused.
    Firing,
    /// A titan was hit or a clock ran out. Transient: reset follows.
    GameOver,
}

impl Phase {
    /// Phases during which the active player's clock runs.
    #[must_use]
    pub const fn clock_runs(self) -> bool {
        matches!(self, Phase::AwaitingSelection | Phase::AwaitingDestination)
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,

    /// Whose turn it is.
    pub active_player: Player,

    pub phase: Phase,

    /// The active player's selected piece.
    pub selected: Option<Cell>,

    /// Legal destinations of the selected piece.
    pub highlights: Destinations,

    pub clock: Clock,

    /// Shot in flight during `Phase::Firing`.
    pub projectile: Option<Projectile>,

    /// Turn number (starts at 1, increments on every pass).
    pub turn_number: u32,

    /// Actions taken this game.
    pub history: Vector<ActionRecord>,

    /// Result of the most recently finished game, kept across resets.
    pub last_result: Option<GameResult>,

    /// Number of finished games on this engine.
    pub games_played: u32,
}

impl GameState {
    /// Fresh state around `board`: Player 1 to move, full clocks.
    #[must_use]
    pub fn new(board: Board, clock_seconds: u32) -> Self {
        let mut clock = Clock::new(clock_seconds);
        clock.start(Player::One);
        Self {
            board,
            active_player: Player::One,
            phase: Phase::AwaitingSelection,
            selected: None,
            highlights: Destinations::new(),
            clock,
            projectile: None,
            turn_number: 1,
            history: Vector::new(),
            last_result: None,
            games_played: 0,
        }
    }

    /// Drop the selection and its highlights.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.highlights.clear();
    }

    /// Record an applied action in history.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.history.push_back(record);
    }

    /// Current projectile cell while a shot is in flight.
    #[must_use]
    pub fn projectile_cell(&self) -> Option<Cell> {
        self.projectile
            .as_ref()
            .filter(|projectile| projectile.ticks() > 0)
            .map(Projectile::position)
    }
}
