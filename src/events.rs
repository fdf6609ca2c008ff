//! Engine notifications for the view layer.
//!
//! The engine never reaches into presentation code. Every state change
//! it makes is described by a `GameEvent`, which is
//!
//! - delivered synchronously to each subscribed `EventSink`, and
//! - queued on the engine until the view calls `Game::drain_events`.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Direction, Placement};
use crate::core::Player;
use crate::pieces::Rotation;
use crate::projectile::ShotOutcome;
use crate::rules::{Destinations, GameResult};

/// Something the view may want to redraw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fresh board and clocks. `placements[0]` is Player 1's.
    Reset { placements: Box<[Placement; 2]> },

    /// A piece was selected; `destinations` are now highlighted.
    PieceSelected { cell: Cell, destinations: Destinations },

    /// Selection and highlights were cleared without an action.
    SelectionCleared,

    PieceMoved { from: Cell, to: Cell },

    PieceRotated { cell: Cell, rotation: Rotation },

    /// The active player's cannon fired; their clock is paused.
    ShotFired { shooter: Player, origin: Cell },

    /// Projectile now occupies an empty cell.
    ProjectileMoved { cell: Cell },

    ProjectileDeflected { cell: Cell, direction: Direction },

    ShotResolved { shooter: Player, outcome: ShotOutcome },

    /// `next` is now active and their clock is running.
    TurnPassed { next: Player, turn: u32 },

    ClockTicked { player: Player, remaining_seconds: u32 },

    /// The game ended; a `Reset` follows immediately.
    GameOver { result: GameResult },
}

/// Subscriber for engine notifications.
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> EventSink for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event);
    }
}
