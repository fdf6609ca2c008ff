//! Piece kinds and piece instances.

use serde::{Deserialize, Serialize};

use super::rotation::{RotateDirection, Rotation};
use crate::core::Player;

/// Closed set of piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    /// Hitting it wins the game for the shooter.
    Titan,
    /// Absorbs a shot and survives.
    Tank,
    /// 4-way deflector.
    Ricochet,
    /// 2-way diagonal deflector.
    SemiRicochet,
    /// Fires at the end of its owner's turn. Moves one step sideways only.
    Cannon,
}

impl PieceKind {
    /// Every kind, in placement order (cannon first).
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Cannon,
        PieceKind::Titan,
        PieceKind::Tank,
        PieceKind::Ricochet,
        PieceKind::SemiRicochet,
    ];

    /// Kinds placed anywhere in the home band after the cannon.
    pub const BAND: [PieceKind; 4] = [
        PieceKind::Titan,
        PieceKind::Tank,
        PieceKind::Ricochet,
        PieceKind::SemiRicochet,
    ];

    /// Whether this kind redirects projectiles and accepts rotation.
    #[must_use]
    pub const fn is_deflector(self) -> bool {
        matches!(self, PieceKind::Ricochet | PieceKind::SemiRicochet)
    }

    /// Rotation a freshly placed piece of this kind starts with.
    #[must_use]
    pub const fn initial_rotation(self) -> Rotation {
        match self {
            PieceKind::SemiRicochet => Rotation::R45,
            _ => Rotation::R0,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Titan => "titan",
            PieceKind::Tank => "tank",
            PieceKind::Ricochet => "ricochet",
            PieceKind::SemiRicochet => "semi-ricochet",
            PieceKind::Cannon => "cannon",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
    pub rotation: Rotation,
}

impl Piece {
    /// Create a piece with its kind's starting rotation.
    #[must_use]
    pub const fn new(kind: PieceKind, owner: Player) -> Self {
        Self {
            kind,
            owner,
            rotation: kind.initial_rotation(),
        }
    }

    /// Set an explicit rotation (builder pattern).
    #[must_use]
    pub const fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Apply a rotation command.
    ///
    /// Returns `false` and leaves the piece untouched for non-deflectors.
    pub fn rotate(&mut self, direction: RotateDirection) -> bool {
        match self.kind {
            PieceKind::Ricochet => {
                self.rotation = self.rotation.quarter_turn(direction);
                true
            }
            PieceKind::SemiRicochet => {
                self.rotation = self.rotation.diagonal_toggle();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_rotations() {
        assert_eq!(Piece::new(PieceKind::Ricochet, Player::One).rotation, Rotation::R0);
        assert_eq!(Piece::new(PieceKind::SemiRicochet, Player::Two).rotation, Rotation::R45);
        assert_eq!(Piece::new(PieceKind::Titan, Player::One).rotation, Rotation::R0);
    }

    #[test]
    fn test_ricochet_rotation() {
        let mut piece = Piece::new(PieceKind::Ricochet, Player::One);
        assert!(piece.rotate(RotateDirection::Right));
        assert_eq!(piece.rotation, Rotation::R90);
        assert!(piece.rotate(RotateDirection::Left));
        assert!(piece.rotate(RotateDirection::Left));
        assert_eq!(piece.rotation, Rotation::R270);
    }

    #[test]
    fn test_semi_rotation_ignores_direction() {
        let mut piece = Piece::new(PieceKind::SemiRicochet, Player::One);
        piece.rotate(RotateDirection::Left);
        assert_eq!(piece.rotation, Rotation::R135);
        piece.rotate(RotateDirection::Left);
        assert_eq!(piece.rotation, Rotation::R45);
        piece.rotate(RotateDirection::Right);
        assert_eq!(piece.rotation, Rotation::R135);
    }

    #[test]
    fn test_non_deflectors_do_not_rotate() {
        for kind in [PieceKind::Titan, PieceKind::Tank, PieceKind::Cannon] {
            let mut piece = Piece::new(kind, Player::Two);
            assert!(!piece.rotate(RotateDirection::Right));
            assert_eq!(piece.rotation, Rotation::R0);
        }
    }

    #[test]
    fn test_piece_serialization() {
        let piece = Piece::new(PieceKind::Ricochet, Player::Two).with_rotation(Rotation::R180);
        let json = serde_json::to_string(&piece).unwrap();
        let deserialized: Piece = serde_json::from_str(&json).unwrap();
        assert_eq!(piece, deserialized);
    }
}
