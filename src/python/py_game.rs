//! Game bindings for Python.
//!
//! Cells are passed as row-major indices (0..64), players as 1 or 2.

use std::time::Duration;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::board::Cell;
use crate::core::{Command, GameConfig, Player};
use crate::game::{Game, Phase};
use crate::pieces::{PieceKind, RotateDirection};

fn player_from_number(number: u8) -> PyResult<Player> {
    match number {
        1 => Ok(Player::One),
        2 => Ok(Player::Two),
        _ => Err(PyErr::new::<PyValueError, _>(format!(
            "player must be 1 or 2, got {}",
            number
        ))),
    }
}

fn player_number(player: Player) -> u8 {
    player.index() as u8 + 1
}

/// Python wrapper for the engine.
///
/// Holds boxed event sinks, so it stays on the thread that created it.
#[pyclass(name = "Game", unsendable)]
pub struct PyGame {
    inner: Game,
}

impl PyGame {
    /// Run a command, treating any rejection (including a bad index) as
    /// a silent no-op.
    fn submit(&mut self, command: impl FnOnce(Cell) -> Command, index: usize) -> bool {
        let Ok(cell) = self.inner.cell_at(index) else {
            return false;
        };
        self.inner.handle(command(cell)).is_ok()
    }
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - seed: RNG seed for starting placements
    /// - clock_seconds: Starting time on each clock
    #[new]
    #[pyo3(signature = (seed = 42, clock_seconds = 180))]
    fn new(seed: u64, clock_seconds: u32) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_seed(seed)
            .with_clock_seconds(clock_seconds);
        let inner = Game::try_new(config)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
        Ok(Self { inner })
    }

    /// Fresh randomized board and full clocks.
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// Select the active player's piece at `index`. Returns whether accepted.
    fn select_piece(&mut self, index: usize) -> bool {
        self.submit(Command::SelectPiece, index)
    }

    /// Move the selected piece to `index`. Returns whether accepted.
    fn choose_destination(&mut self, index: usize) -> bool {
        self.submit(Command::ChooseDestination, index)
    }

    /// Rotate the selected deflector, `"left"` or `"right"`.
    fn rotate(&mut self, direction: &str) -> PyResult<bool> {
        let direction = match direction {
            "left" => RotateDirection::Left,
            "right" => RotateDirection::Right,
            other => {
                return Err(PyErr::new::<PyValueError, _>(format!(
                    "direction must be 'left' or 'right', got {:?}",
                    other
                )))
            }
        };
        Ok(self.inner.handle(Command::Rotate(direction)).is_ok())
    }

    /// Advance the projectile one tick. Returns False when nothing is in flight.
    fn advance_shot(&mut self) -> bool {
        self.inner.advance_shot().is_some()
    }

    /// Run the shot in flight to completion and describe how it ended.
    fn resolve_shot(&mut self) -> Option<String> {
        self.inner.resolve_shot().map(|outcome| format!("{:?}", outcome))
    }

    /// Drain the running clock. Returns the result message on timeout.
    fn advance_clock(&mut self, seconds: f64) -> PyResult<Option<String>> {
        let elapsed = Duration::try_from_secs_f64(seconds)
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))?;
        Ok(self.inner.advance_clock(elapsed).map(|result| result.to_string()))
    }

    /// Cells the selected piece may move to.
    fn highlights(&self) -> Vec<usize> {
        self.inner.highlights().iter().map(|cell| cell.index()).collect()
    }

    /// Cells holding the active player's pieces of `kind` (e.g. `"cannon"`).
    fn cells_of(&self, kind: &str) -> PyResult<Vec<usize>> {
        let kind = PieceKind::ALL
            .into_iter()
            .find(|k| k.name() == kind)
            .ok_or_else(|| PyErr::new::<PyValueError, _>(format!("unknown piece kind {:?}", kind)))?;
        let player = self.inner.active_player();
        Ok(self
            .inner
            .board()
            .pieces()
            .filter(|(_, piece)| piece.owner == player && piece.kind == kind)
            .map(|(cell, _)| cell.index())
            .collect())
    }

    /// Clock display for player 1 or 2, `MM:SS`.
    fn formatted_clock(&self, player: u8) -> PyResult<String> {
        Ok(self.inner.formatted_clock(player_from_number(player)?))
    }

    /// Contents of all 64 cells in index order, as
    /// `(kind, owner, rotation_degrees)` or `None` for an empty cell.
    fn cells(&self) -> Vec<Option<(&'static str, u8, u16)>> {
        Cell::all()
            .map(|cell| {
                self.inner
                    .board()
                    .get(cell)
                    .map(|piece| {
                        (
                            piece.kind.name(),
                            player_number(piece.owner),
                            piece.rotation.degrees(),
                        )
                    })
            })
            .collect()
    }

    /// Pending events, formatted for logging.
    fn drain_events(&mut self) -> Vec<String> {
        self.inner
            .drain_events()
            .iter()
            .map(|event| format!("{:?}", event))
            .collect()
    }

    /// Get the active player (1 or 2).
    #[getter]
    fn active_player(&self) -> u8 {
        player_number(self.inner.active_player())
    }

    #[getter]
    fn active_player_label(&self) -> &'static str {
        self.inner.active_player_label()
    }

    /// Current phase name.
    #[getter]
    fn phase(&self) -> &'static str {
        match self.inner.phase() {
            Phase::AwaitingSelection => "awaiting_selection",
            Phase::AwaitingDestination => "awaiting_destination",
            Phase::Firing => "firing",
            Phase::GameOver => "game_over",
        }
    }

    #[getter]
    fn turn_number(&self) -> u32 {
        self.inner.turn_number()
    }

    #[getter]
    fn selected(&self) -> Option<usize> {
        self.inner.selected().map(Cell::index)
    }

    #[getter]
    fn projectile_cell(&self) -> Option<usize> {
        self.inner.projectile_cell().map(Cell::index)
    }

    /// Message for the most recently finished game, e.g. `"Player 1 wins!"`.
    #[getter]
    fn last_result(&self) -> Option<String> {
        self.inner.last_result().map(|result| result.to_string())
    }

    /// Winner of the most recently finished game (1 or 2).
    #[getter]
    fn last_winner(&self) -> Option<u8> {
        self.inner.last_result().map(|result| player_number(result.winner))
    }

    #[getter]
    fn games_played(&self) -> u32 {
        self.inner.games_played()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(turn={}, active={}, phase={}, clocks={}/{})",
            self.inner.turn_number(),
            self.inner.active_player_label(),
            self.phase(),
            self.inner.formatted_clock(Player::One),
            self.inner.formatted_clock(Player::Two),
        )
    }
}
