//! Deflector orientation.
//!
//! Rotation is stored as one of eight 45° steps. Only the two deflector
//! kinds ever change it:
//!
//! - Ricochet: 4-way, cycles `0 → 90 → 180 → 270 → 0` (right) or the
//!   reverse (left).
//! - SemiRicochet: 2-way diagonal, toggles `45 ↔ 135` on any command.

use serde::{Deserialize, Serialize};

use crate::board::Direction;

/// Rotation in 45° steps, clockwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    R0,
    R45,
    R90,
    R135,
    R180,
    R225,
    R270,
    R315,
}

/// Rotation command issued by the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotateDirection {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

impl Rotation {
    const STEPS: [Rotation; 8] = [
        Rotation::R0,
        Rotation::R45,
        Rotation::R90,
        Rotation::R135,
        Rotation::R180,
        Rotation::R225,
        Rotation::R270,
        Rotation::R315,
    ];

    /// Angle in degrees (0-315).
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.step() as u16 * 45
    }

    /// Parse a whole-degree angle. Only multiples of 45 are valid.
    #[must_use]
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        let normalized = degrees % 360;
        if normalized % 45 != 0 {
            return None;
        }
        Some(Self::STEPS[(normalized / 45) as usize])
    }

    const fn step(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R45 => 1,
            Rotation::R90 => 2,
            Rotation::R135 => 3,
            Rotation::R180 => 4,
            Rotation::R225 => 5,
            Rotation::R270 => 6,
            Rotation::R315 => 7,
        }
    }

    fn add_steps(self, steps: i8) -> Self {
        let next = (self.step() as i8 + steps).rem_euclid(8);
        Self::STEPS[next as usize]
    }

    /// Ricochet rotation: ±90°, wrapping.
    #[must_use]
    pub fn quarter_turn(self, direction: RotateDirection) -> Self {
        match direction {
            RotateDirection::Right => self.add_steps(2),
            RotateDirection::Left => self.add_steps(-2),
        }
    }

    /// SemiRicochet rotation: toggles 45 and 135 regardless of direction.
    #[must_use]
    pub fn diagonal_toggle(self) -> Self {
        if self == Rotation::R45 {
            Rotation::R135
        } else {
            Rotation::R45
        }
    }

    /// Direction a projectile leaves a deflector with this rotation.
    ///
    /// The incoming direction is ignored. Diagonal rotations follow the
    /// two-way table (45/315 east, 135/225 west); the cardinal rotations
    /// turn the shot toward the face the deflector points at.
    #[must_use]
    pub const fn deflection(self) -> Direction {
        match self {
            Rotation::R0 | Rotation::R45 | Rotation::R315 => Direction::East,
            Rotation::R90 => Direction::South,
            Rotation::R135 | Rotation::R180 | Rotation::R225 => Direction::West,
            Rotation::R270 => Direction::North,
        }
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees() {
        assert_eq!(Rotation::R0.degrees(), 0);
        assert_eq!(Rotation::R135.degrees(), 135);
        assert_eq!(Rotation::R315.degrees(), 315);
        assert_eq!(Rotation::from_degrees(270), Some(Rotation::R270));
        assert_eq!(Rotation::from_degrees(360), Some(Rotation::R0));
        assert_eq!(Rotation::from_degrees(30), None);
    }

    #[test]
    fn test_quarter_turn_right_cycles() {
        let mut rotation = Rotation::R0;
        let mut seen = Vec::new();
        for _ in 0..4 {
            rotation = rotation.quarter_turn(RotateDirection::Right);
            seen.push(rotation.degrees());
        }
        assert_eq!(seen, vec![90, 180, 270, 0]);
    }

    #[test]
    fn test_quarter_turn_left_wraps() {
        assert_eq!(Rotation::R0.quarter_turn(RotateDirection::Left), Rotation::R270);
        assert_eq!(Rotation::R90.quarter_turn(RotateDirection::Left), Rotation::R0);
    }

    #[test]
    fn test_diagonal_toggle() {
        assert_eq!(Rotation::R45.diagonal_toggle(), Rotation::R135);
        assert_eq!(Rotation::R135.diagonal_toggle(), Rotation::R45);
    }

    #[test]
    fn test_deflection_table() {
        assert_eq!(Rotation::R45.deflection(), Direction::East);
        assert_eq!(Rotation::R135.deflection(), Direction::West);
        assert_eq!(Rotation::R225.deflection(), Direction::West);
        assert_eq!(Rotation::R315.deflection(), Direction::East);
        assert_eq!(Rotation::R0.deflection(), Direction::East);
        assert_eq!(Rotation::R90.deflection(), Direction::South);
        assert_eq!(Rotation::R180.deflection(), Direction::West);
        assert_eq!(Rotation::R270.deflection(), Direction::North);
    }

    #[test]
    fn test_deflection_is_always_axis_aligned() {
        for rotation in Rotation::STEPS {
            assert!(rotation.deflection().is_axis());
        }
    }
}
