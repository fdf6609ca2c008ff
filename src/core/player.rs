//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The game is strictly two-player. `Player::One` owns the top band
//! (rows 0-2) and fires south; `Player::Two` owns the bottom band
//! (rows 5-7) and fires north.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for clocks and
//! anything else kept once per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Row holding this player's cannon.
    #[must_use]
    pub const fn back_row(self) -> u8 {
        match self {
            Player::One => 0,
            Player::Two => 7,
        }
    }

    /// Inclusive row range of this player's home band.
    #[must_use]
    pub const fn home_rows(self) -> (u8, u8) {
        match self {
            Player::One => (0, 2),
            Player::Two => (5, 7),
        }
    }

    /// Check whether `row` lies in this player's home band.
    #[must_use]
    pub const fn in_home_band(self, row: u8) -> bool {
        let (lo, hi) = self.home_rows();
        row >= lo && row <= hi
    }

    /// Human-readable label shown by the view layer.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use titan_ricochet::core::{Player, PlayerMap};
///
/// let mut seconds: PlayerMap<u32> = PlayerMap::with_value(180);
/// seconds[Player::Two] -= 1;
///
/// assert_eq!(seconds[Player::One], 180);
/// assert_eq!(seconds[Player::Two], 179);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::One), factory(Player::Two)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::One.index(), 0);
        assert_eq!(Player::Two.index(), 1);
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(format!("{}", Player::Two), "Player 2");
    }

    #[test]
    fn test_home_bands() {
        assert_eq!(Player::One.back_row(), 0);
        assert_eq!(Player::Two.back_row(), 7);
        assert!(Player::One.in_home_band(2));
        assert!(!Player::One.in_home_band(3));
        assert!(Player::Two.in_home_band(5));
        assert!(!Player::Two.in_home_band(4));
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);
        assert_eq!(map[Player::One], 0);
        assert_eq!(map[Player::Two], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<i32> = PlayerMap::default();
        map[Player::One] = 10;
        map[Player::Two] = 20;

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Player::One, &10), (Player::Two, &20)]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map: PlayerMap<u32> = PlayerMap::with_value(180);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
