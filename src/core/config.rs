//! Engine configuration.
//!
//! Timing and seeding knobs for a game instance. The rules themselves
//! (board size, piece set, deflection table) are fixed; only pacing and
//! randomness are configurable.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Starting time on each player's clock, in seconds.
    pub clock_seconds: u32,

    /// Real-time delay between projectile ticks, in milliseconds.
    /// Purely cosmetic; tests resolve shots without waiting.
    pub projectile_tick_ms: u64,

    /// Clock decrement cadence, in milliseconds.
    pub clock_tick_ms: u64,

    /// Random seed for piece placement.
    /// Same seed produces the same sequence of starting boards.
    pub seed: u64,

    /// Upper bound on ticks the pacer applies in a single poll.
    /// Keeps a stalled host from replaying minutes of backlog at once.
    pub max_steps_per_poll: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            clock_seconds: 180,
            projectile_tick_ms: 500,
            clock_tick_ms: 1000,
            seed: 42,
            max_steps_per_poll: 64,
        }
    }
}

impl GameConfig {
    /// Set the starting clock time in seconds.
    pub fn with_clock_seconds(mut self, seconds: u32) -> Self {
        self.clock_seconds = seconds;
        self
    }

    /// Set the placement seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the projectile tick delay in milliseconds.
    pub fn with_projectile_tick_ms(mut self, ms: u64) -> Self {
        self.projectile_tick_ms = ms;
        self
    }

    /// Set the clock cadence in milliseconds.
    pub fn with_clock_tick_ms(mut self, ms: u64) -> Self {
        self.clock_tick_ms = ms;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock_seconds == 0 {
            return Err(ConfigError::Zero { field: "clock_seconds" });
        }
        if self.projectile_tick_ms == 0 {
            return Err(ConfigError::Zero { field: "projectile_tick_ms" });
        }
        if self.clock_tick_ms == 0 {
            return Err(ConfigError::Zero { field: "clock_tick_ms" });
        }
        if self.max_steps_per_poll == 0 {
            return Err(ConfigError::Zero { field: "max_steps_per_poll" });
        }
        Ok(())
    }
}
