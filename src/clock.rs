//! Per-player chess clock.
//!
//! Two independent countdowns. Only the running player's counter drains;
//! the engine pauses the clock while a shot is in flight and starts the
//! next player's side when the turn passes. Time is kept in milliseconds
//! so fractional elapses accumulate, and shown as whole seconds.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerMap};

/// Format whole seconds as `MM:SS`.
///
/// ```
/// assert_eq!(titan_ricochet::clock::format_clock(180), "03:00");
/// assert_eq!(titan_ricochet::clock::format_clock(59), "00:59");
/// ```
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Two-sided countdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    remaining_ms: PlayerMap<u64>,
    running: Option<Player>,
}

impl Clock {
    /// Both sides start with `seconds`, nobody running.
    #[must_use]
    pub fn new(seconds: u32) -> Self {
        Self {
            remaining_ms: PlayerMap::with_value(u64::from(seconds) * 1000),
            running: None,
        }
    }

    /// Start (or switch to) `player`'s side.
    pub fn start(&mut self, player: Player) {
        self.running = Some(player);
    }

    /// Stop whichever side is running.
    pub fn pause(&mut self) {
        self.running = None;
    }

    #[must_use]
    pub fn running(&self) -> Option<Player> {
        self.running
    }

    #[must_use]
    pub fn remaining(&self, player: Player) -> Duration {
        Duration::from_millis(self.remaining_ms[player])
    }

    /// Remaining time in whole seconds, rounded up so a side shows
    /// `00:00` only once it has actually run out.
    #[must_use]
    pub fn remaining_seconds(&self, player: Player) -> u32 {
        let ms = self.remaining_ms[player];
        u32::try_from(ms.div_ceil(1000)).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn is_flagged(&self, player: Player) -> bool {
        self.remaining_ms[player] == 0
    }

    /// `MM:SS` for `player`.
    #[must_use]
    pub fn formatted(&self, player: Player) -> String {
        format_clock(self.remaining_seconds(player))
    }

    /// Drain `elapsed` from the running side.
    ///
    /// Returns the player whose time ran out, if this call exhausted it.
    /// A flagged clock stops running.
    pub fn elapse(&mut self, elapsed: Duration) -> Option<Player> {
        let player = self.running?;
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        let remaining = &mut self.remaining_ms[player];
        *remaining = remaining.saturating_sub(elapsed_ms);

        if *remaining == 0 {
            self.running = None;
            Some(player)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clock_is_idle() {
        let clock = Clock::new(180);
        assert_eq!(clock.running(), None);
        assert_eq!(clock.remaining_seconds(Player::One), 180);
        assert_eq!(clock.formatted(Player::Two), "03:00");
    }

    #[test]
    fn test_only_running_side_drains() {
        let mut clock = Clock::new(180);
        clock.start(Player::Two);
        clock.elapse(Duration::from_secs(5));

        assert_eq!(clock.remaining_seconds(Player::One), 180);
        assert_eq!(clock.remaining_seconds(Player::Two), 175);
        assert_eq!(clock.formatted(Player::Two), "02:55");
    }

    #[test]
    fn test_paused_clock_ignores_time() {
        let mut clock = Clock::new(10);
        clock.start(Player::One);
        clock.pause();
        assert_eq!(clock.elapse(Duration::from_secs(60)), None);
        assert_eq!(clock.remaining_seconds(Player::One), 10);
    }

    #[test]
    fn test_sub_second_elapses_accumulate() {
        let mut clock = Clock::new(2);
        clock.start(Player::One);
        clock.elapse(Duration::from_millis(400));
        assert_eq!(clock.remaining_seconds(Player::One), 2);
        clock.elapse(Duration::from_millis(700));
        assert_eq!(clock.remaining_seconds(Player::One), 1);
        assert_eq!(clock.remaining(Player::One), Duration::from_millis(900));
    }

    #[test]
    fn test_flag_fall() {
        let mut clock = Clock::new(3);
        clock.start(Player::One);
        assert_eq!(clock.elapse(Duration::from_secs(2)), None);
        assert_eq!(clock.elapse(Duration::from_secs(2)), Some(Player::One));
        assert!(clock.is_flagged(Player::One));
        assert_eq!(clock.running(), None);
        assert_eq!(clock.formatted(Player::One), "00:00");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(600), "10:00");
    }
}
