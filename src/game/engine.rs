//! The turn state machine.
//!
//! `Game` owns one `GameState` and is the only thing that mutates it.
//! The view layer drives it with commands and time:
//!
//! ```text
//! AwaitingSelection --select--> AwaitingDestination --move/rotate--> Firing
//!        ^                         |  (re-select allowed)               |
//!        |                         +--bad select--> AwaitingSelection   |
//!        +----------- turn passes (absorbed, blocked, exited, looped) --+
//!                                  titan hit / timeout --> GameOver --> reset
//! ```
//!
//! Nothing here sleeps. `advance_shot` moves the projectile one tick and
//! `advance_clock` drains the running clock; `driver::Pacer` calls them
//! at real-time cadence, tests call them directly.

use std::time::Duration;

use crate::board::{setup_board, Board, Cell, Placement};
use crate::clock::Clock;
use crate::core::{ActionRecord, Command, GameConfig, GameRng, GameRngState, GameState, Phase, Player};
use crate::error::{CommandError, ConfigError};
use crate::events::{EventSink, GameEvent};
use crate::pieces::RotateDirection;
use crate::projectile::{Projectile, ShotOutcome, ShotStep};
use crate::rules::{legal_destinations, GameResult, WinReason};

/// A game instance: state, randomness, and pending notifications.
pub struct Game {
    config: GameConfig,
    state: GameState,
    rng: GameRng,
    events: Vec<GameEvent>,
    sinks: Vec<Box<dyn EventSink>>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("pending_events", &self.events.len())
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    /// Create a game with a randomized starting board.
    ///
    /// The first `Reset` event is queued and can be drained right away.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut game = Self {
            state: GameState::new(Board::new(), config.clock_seconds),
            rng: GameRng::new(config.seed),
            config,
            events: Vec::new(),
            sinks: Vec::new(),
        };
        game.reset();
        game
    }

    /// Like `new`, but rejects configurations the engine cannot run.
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a game on a hand-built board. Player 1 to move, full clocks.
    ///
    /// Used for scripted scenarios; later resets still randomize.
    #[must_use]
    pub fn with_board(config: GameConfig, board: Board) -> Self {
        Self {
            state: GameState::new(board, config.clock_seconds),
            rng: GameRng::new(config.seed),
            config,
            events: Vec::new(),
            sinks: Vec::new(),
        }
    }

    // === Lifecycle ===

    /// Start over from scratch: reseed, forget past results, reset.
    pub fn initialize(&mut self) {
        self.rng = GameRng::new(self.config.seed);
        self.state.last_result = None;
        self.state.games_played = 0;
        self.reset();
    }

    /// Fresh randomized board and full clocks, Player 1 to move.
    ///
    /// Any selection or shot in flight is discarded. The result of the
    /// previous game stays available through `last_result`.
    pub fn reset(&mut self) {
        let mut board = Board::new();
        let placements = match setup_board(&mut board, &mut self.rng) {
            Ok(placements) => placements,
            Err(err) => {
                log::error!("starting placement failed: {err}");
                <[Placement; 2]>::default()
            }
        };

        let mut state = GameState::new(board, self.config.clock_seconds);
        state.last_result = self.state.last_result;
        state.games_played = self.state.games_played;
        self.state = state;

        log::info!(
            "new game #{} (seed {})",
            self.state.games_played + 1,
            self.rng.seed()
        );
        self.emit(GameEvent::Reset {
            placements: Box::new(placements),
        });
    }

    /// Position of the placement stream, for replaying future resets.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Rewind or fast-forward the placement stream.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    // === Notifications ===

    /// Register a subscriber. It sees every event from now on.
    ///
    /// Once a subscriber exists, events go only to subscribers and the
    /// drain queue stops growing. Events queued before the first
    /// subscription stay available to `drain_events`.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Take all events queued since the last drain.
    ///
    /// Events are only queued while nobody is subscribed.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: GameEvent) {
        if self.sinks.is_empty() {
            self.events.push(event);
            return;
        }
        for sink in &mut self.sinks {
            sink.on_event(&event);
        }
    }

    // === Commands ===

    /// Apply a command, reporting why it was rejected.
    pub fn handle(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::SelectPiece(cell) => self.try_select(cell),
            Command::ChooseDestination(cell) => self.try_move(cell),
            Command::Rotate(direction) => self.try_rotate(direction),
        }
    }

    /// Select the piece on `cell`. Ignored when invalid.
    pub fn select_piece(&mut self, cell: Cell) {
        self.apply(Command::SelectPiece(cell));
    }

    /// Move the selected piece to `cell`. Ignored when invalid.
    pub fn choose_destination(&mut self, cell: Cell) {
        self.apply(Command::ChooseDestination(cell));
    }

    /// Rotate the selected deflector. Ignored when invalid.
    pub fn rotate(&mut self, direction: RotateDirection) {
        self.apply(Command::Rotate(direction));
    }

    fn apply(&mut self, command: Command) {
        if let Err(err) = self.handle(command) {
            log::debug!("ignored {command:?}: {err}");
        }
    }

    /// Resolve a row-major cell index coming from the view layer.
    pub fn cell_at(&self, index: usize) -> Result<Cell, CommandError> {
        Cell::from_index(index).ok_or(CommandError::OutOfBounds(index))
    }

    fn try_select(&mut self, cell: Cell) -> Result<(), CommandError> {
        if !self.state.phase.clock_runs() {
            return Err(CommandError::WrongPhase(self.state.phase));
        }

        let owner = match self.state.board.get(cell) {
            Some(piece) => piece.owner,
            None => {
                self.cancel_selection();
                return Err(CommandError::EmptyCell(cell));
            }
        };
        if owner != self.state.active_player {
            self.cancel_selection();
            return Err(CommandError::NotYourPiece { cell, owner });
        }

        let destinations = legal_destinations(&self.state.board, cell);
        self.state.selected = Some(cell);
        self.state.highlights = destinations.clone();
        self.state.phase = Phase::AwaitingDestination;
        log::debug!("{} selected {cell}", self.state.active_player);
        self.emit(GameEvent::PieceSelected { cell, destinations });
        Ok(())
    }

    /// Drop a selection after a bad pick. Emits only if one existed.
    fn cancel_selection(&mut self) {
        self.state.phase = Phase::AwaitingSelection;
        if self.state.selected.is_some() {
            self.state.clear_selection();
            self.emit(GameEvent::SelectionCleared);
        }
    }

    /// The selected cell, checking that an action is allowed now.
    fn selection_for_action(&self) -> Result<Cell, CommandError> {
        match self.state.phase {
            Phase::AwaitingDestination => self.state.selected.ok_or(CommandError::NothingSelected),
            Phase::AwaitingSelection => Err(CommandError::NothingSelected),
            phase => Err(CommandError::WrongPhase(phase)),
        }
    }

    fn try_move(&mut self, to: Cell) -> Result<(), CommandError> {
        let from = self.selection_for_action()?;
        if !self.state.highlights.contains(&to) {
            return Err(CommandError::NotHighlighted(to));
        }

        self.state.board.move_piece(from, to)?;
        self.record(from, Command::ChooseDestination(to));
        log::debug!("{} moved {from} -> {to}", self.state.active_player);
        self.emit(GameEvent::PieceMoved { from, to });
        self.fire();
        Ok(())
    }

    fn try_rotate(&mut self, direction: RotateDirection) -> Result<(), CommandError> {
        let cell = self.selection_for_action()?;
        let piece = self
            .state
            .board
            .get_mut(cell)
            .ok_or(CommandError::EmptyCell(cell))?;
        if !piece.rotate(direction) {
            return Err(CommandError::NotRotatable(cell));
        }
        let rotation = piece.rotation;

        self.record(cell, Command::Rotate(direction));
        log::debug!("{} rotated {cell} to {rotation}", self.state.active_player);
        self.emit(GameEvent::PieceRotated { cell, rotation });
        self.fire();
        Ok(())
    }

    fn record(&mut self, piece: Cell, command: Command) {
        let record = ActionRecord::new(
            self.state.active_player,
            piece,
            command,
            self.state.turn_number,
        );
        self.state.record_action(record);
    }

    /// Every command the active player could issue right now.
    ///
    /// Empty while a shot is in flight.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        if !self.state.phase.clock_runs() {
            return Vec::new();
        }
        let player = self.state.active_player;
        let mut commands: Vec<Command> = self
            .state
            .board
            .pieces()
            .filter(|(_, piece)| piece.owner == player)
            .map(|(cell, _)| Command::SelectPiece(cell))
            .collect();

        if let Some(selected) = self.state.selected {
            commands.extend(
                self.state
                    .highlights
                    .iter()
                    .map(|&cell| Command::ChooseDestination(cell)),
            );
            let rotatable = self
                .state
                .board
                .get(selected)
                .is_some_and(|piece| piece.kind.is_deflector());
            if rotatable {
                commands.push(Command::Rotate(RotateDirection::Left));
                commands.push(Command::Rotate(RotateDirection::Right));
            }
        }
        commands
    }

    // === Firing ===

    /// Fire the active player's cannon after their action.
    fn fire(&mut self) {
        let shooter = self.state.active_player;
        self.state.clock.pause();
        self.state.clear_selection();

        match Projectile::fire(&self.state.board, shooter) {
            Some(projectile) => {
                let origin = projectile.position();
                self.state.projectile = Some(projectile);
                self.state.phase = Phase::Firing;
                log::debug!("{shooter} fires from {origin}");
                self.emit(GameEvent::ShotFired { shooter, origin });
            }
            None => {
                log::warn!("{shooter} has no cannon; passing the turn");
                self.pass_turn();
            }
        }
    }

    /// Move the projectile one tick. `None` when nothing is in flight.
    pub fn advance_shot(&mut self) -> Option<ShotStep> {
        if self.state.phase != Phase::Firing {
            return None;
        }
        let projectile = self.state.projectile.as_mut()?;
        let shooter = projectile.shooter();
        let step = projectile.step(&self.state.board)?;

        match step {
            ShotStep::Travel { cell } => self.emit(GameEvent::ProjectileMoved { cell }),
            ShotStep::Deflected { cell, direction } => {
                self.emit(GameEvent::ProjectileDeflected { cell, direction });
            }
            ShotStep::Finished { outcome } => self.finish_shot(shooter, outcome),
        }
        Some(step)
    }

    /// Run the shot in flight to completion and return how it ended.
    pub fn resolve_shot(&mut self) -> Option<ShotOutcome> {
        while let Some(step) = self.advance_shot() {
            if let Some(outcome) = step.outcome() {
                return Some(outcome);
            }
        }
        None
    }

    fn finish_shot(&mut self, shooter: Player, outcome: ShotOutcome) {
        self.state.projectile = None;
        log::debug!("shot from {shooter} ended: {outcome:?}");
        self.emit(GameEvent::ShotResolved { shooter, outcome });

        if outcome.ends_game() {
            self.end_game(GameResult::new(shooter, WinReason::TitanHit));
        } else {
            self.pass_turn();
        }
    }

    fn pass_turn(&mut self) {
        let next = self.state.active_player.opponent();
        self.state.active_player = next;
        self.state.turn_number += 1;
        self.state.clear_selection();
        self.state.projectile = None;
        self.state.phase = Phase::AwaitingSelection;
        self.state.clock.start(next);

        let turn = self.state.turn_number;
        log::debug!("turn {turn}: {next} to move");
        self.emit(GameEvent::TurnPassed { next, turn });
    }

    fn end_game(&mut self, result: GameResult) {
        self.state.phase = Phase::GameOver;
        self.state.clock.pause();
        self.state.clear_selection();
        self.state.projectile = None;
        self.state.last_result = Some(result);
        self.state.games_played += 1;

        log::info!("game over after {} turns: {result}", self.state.turn_number);
        self.emit(GameEvent::GameOver { result });
        self.reset();
    }

    // === Time ===

    /// Drain `elapsed` from the active player's clock.
    ///
    /// Does nothing while a shot is in flight. Returns the result if the
    /// clock ran out; the game has already been reset by then.
    pub fn advance_clock(&mut self, elapsed: Duration) -> Option<GameResult> {
        if !self.state.phase.clock_runs() {
            return None;
        }
        let player = self.state.active_player;
        let before = self.state.clock.remaining_seconds(player);
        let flagged = self.state.clock.elapse(elapsed);
        let remaining_seconds = self.state.clock.remaining_seconds(player);
        if remaining_seconds != before {
            self.emit(GameEvent::ClockTicked {
                player,
                remaining_seconds,
            });
        }

        let loser = flagged?;
        let result = GameResult::new(loser.opponent(), WinReason::Timeout);
        self.end_game(result);
        Some(result)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snapshot of everything the engine knows.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn active_player(&self) -> Player {
        self.state.active_player
    }

    /// `"Player 1"` or `"Player 2"`.
    #[must_use]
    pub fn active_player_label(&self) -> &'static str {
        self.state.active_player.label()
    }

    #[must_use]
    pub fn selected(&self) -> Option<Cell> {
        self.state.selected
    }

    #[must_use]
    pub fn highlights(&self) -> &[Cell] {
        &self.state.highlights
    }

    #[must_use]
    pub fn clock(&self) -> &Clock {
        &self.state.clock
    }

    /// `MM:SS` for `player`'s clock.
    #[must_use]
    pub fn formatted_clock(&self, player: Player) -> String {
        self.state.clock.formatted(player)
    }

    /// Where the projectile is drawn, if one is in flight.
    #[must_use]
    pub fn projectile_cell(&self) -> Option<Cell> {
        self.state.projectile_cell()
    }

    #[must_use]
    pub fn last_result(&self) -> Option<GameResult> {
        self.state.last_result
    }

    #[must_use]
    pub fn history(&self) -> &im::Vector<ActionRecord> {
        &self.state.history
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.state.turn_number
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.state.games_played
    }
}
