//! Real-time pacing.
//!
//! The engine itself is timeless. `Pacer` turns wall-clock deltas from
//! the host into discrete engine ticks with a fixed-timestep
//! accumulator: one clock tick per `clock_tick_ms` while a player is
//! thinking, one projectile tick per `projectile_tick_ms` while a shot
//! is in flight. Both cadences never run at once since the clock is
//! paused during firing.
//!
//! A single poll applies at most `max_steps_per_poll` ticks; the rest of
//! a long stall is dropped rather than replayed.

use std::time::{Duration, Instant};

use crate::core::{GameConfig, Phase};
use crate::game::Game;

/// Fixed-cadence scheduler for one `Game`.
#[derive(Clone, Debug)]
pub struct Pacer {
    clock_interval: Duration,
    projectile_interval: Duration,
    clock_acc: Duration,
    projectile_acc: Duration,
    max_steps: u32,
    last: Option<Instant>,
}

impl Pacer {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            clock_interval: Duration::from_millis(config.clock_tick_ms),
            projectile_interval: Duration::from_millis(config.projectile_tick_ms),
            clock_acc: Duration::ZERO,
            projectile_acc: Duration::ZERO,
            max_steps: config.max_steps_per_poll,
            last: None,
        }
    }

    /// Forget accumulated time, e.g. after the host was suspended.
    pub fn reset(&mut self) {
        self.clock_acc = Duration::ZERO;
        self.projectile_acc = Duration::ZERO;
        self.last = None;
    }

    /// Feed the current instant. The first call only sets the baseline.
    pub fn poll(&mut self, game: &mut Game, now: Instant) -> u32 {
        let elapsed = match self.last {
            Some(last) => now.saturating_duration_since(last),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        self.advance(game, elapsed)
    }

    /// Apply `elapsed` wall time to `game`. Returns the ticks applied.
    pub fn advance(&mut self, game: &mut Game, elapsed: Duration) -> u32 {
        let mut budget = elapsed;
        let mut steps = 0;

        while steps < self.max_steps {
            if game.phase() == Phase::Firing {
                // partial clock seconds do not survive a shot
                self.clock_acc = Duration::ZERO;
                let needed = self.projectile_interval.saturating_sub(self.projectile_acc);
                if budget < needed {
                    self.projectile_acc += budget;
                    return steps;
                }
                budget -= needed;
                self.projectile_acc = Duration::ZERO;
                game.advance_shot();
            } else {
                self.projectile_acc = Duration::ZERO;
                let needed = self.clock_interval.saturating_sub(self.clock_acc);
                if budget < needed {
                    self.clock_acc += budget;
                    return steps;
                }
                budget -= needed;
                self.clock_acc = Duration::ZERO;
                if let Some(result) = game.advance_clock(self.clock_interval) {
                    log::debug!("pacer observed game end: {result}");
                }
            }
            steps += 1;
        }

        if !budget.is_zero() {
            log::warn!("pacer dropped {budget:?} after {steps} ticks");
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Cell};
    use crate::core::Player;
    use crate::pieces::{Piece, PieceKind};

    fn cell(row: u8, col: u8) -> Cell {
        Cell::new(row, col).unwrap()
    }

    fn firing_game() -> Game {
        let mut board = Board::new();
        board.place(cell(0, 3), Piece::new(PieceKind::Cannon, Player::One)).unwrap();
        board.place(cell(2, 0), Piece::new(PieceKind::Tank, Player::One)).unwrap();
        board.place(cell(7, 0), Piece::new(PieceKind::Cannon, Player::Two)).unwrap();
        let mut game = Game::with_board(GameConfig::default(), board);
        game.select_piece(cell(2, 0));
        game.choose_destination(cell(2, 1));
        game
    }

    #[test]
    fn test_clock_ticks_once_per_second() {
        let mut game = Game::new(GameConfig::default());
        let mut pacer = Pacer::new(game.config());

        assert_eq!(pacer.advance(&mut game, Duration::from_millis(600)), 0);
        assert_eq!(pacer.advance(&mut game, Duration::from_millis(600)), 1);
        assert_eq!(game.formatted_clock(Player::One), "02:59");

        assert_eq!(pacer.advance(&mut game, Duration::from_secs(3)), 3);
        assert_eq!(game.formatted_clock(Player::One), "02:56");
    }

    #[test]
    fn test_projectile_ticks_every_half_second() {
        let mut game = firing_game();
        let mut pacer = Pacer::new(game.config());

        assert_eq!(pacer.advance(&mut game, Duration::from_millis(1500)), 3);
        assert_eq!(game.projectile_cell(), Some(cell(3, 3)));
        assert_eq!(game.formatted_clock(Player::One), "03:00");
    }

    #[test]
    fn test_shot_then_clock_resumes_for_next_player() {
        let mut game = firing_game();
        let mut pacer = Pacer::new(game.config());

        // eight projectile ticks exit the board, then one clock tick
        let steps = pacer.advance(&mut game, Duration::from_millis(5000));
        assert_eq!(steps, 9);
        assert_eq!(game.active_player(), Player::Two);
        assert_eq!(game.formatted_clock(Player::Two), "02:59");
    }

    #[test]
    fn test_step_cap() {
        let config = GameConfig::default();
        let mut game = Game::new(config.clone());
        let mut pacer = Pacer::new(&config);

        assert_eq!(pacer.advance(&mut game, Duration::from_secs(100)), 64);
        assert_eq!(game.formatted_clock(Player::One), "01:56");
    }

    #[test]
    fn test_poll_uses_instants() {
        let mut game = Game::new(GameConfig::default());
        let mut pacer = Pacer::new(game.config());
        let start = Instant::now();

        assert_eq!(pacer.poll(&mut game, start), 0);
        assert_eq!(pacer.poll(&mut game, start + Duration::from_secs(2)), 2);
        pacer.reset();
        assert_eq!(pacer.poll(&mut game, start + Duration::from_secs(10)), 0);
    }
}
