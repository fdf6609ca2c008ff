//! Projectile travel.
//!
//! A shot leaves the shooter's cannon heading toward the opponent and
//! moves one cell per tick:
//!
//! 1. next cell off the board → `ExitedBoard`
//! 2. next cell empty → `Travel`, keep going
//! 3. next cell occupied → resolve by piece kind:
//!    titan ends the game, tank absorbs, cannon blocks, deflectors
//!    redirect along their rotation's table entry
//!
//! Deflection ignores the incoming direction, so two deflectors facing
//! each other would bounce forever. Each `(deflector cell, new
//! direction)` pair is remembered; producing one twice ends the shot as
//! `Looped`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::outcome::{ShotOutcome, ShotStep};
use crate::board::{Board, Cell, Direction};
use crate::core::Player;
use crate::pieces::PieceKind;

/// Direction a player's cannon fires in.
#[must_use]
pub const fn firing_direction(shooter: Player) -> Direction {
    match shooter {
        Player::One => Direction::South,
        Player::Two => Direction::North,
    }
}

/// Resumable projectile state.
///
/// Holds no borrow of the board so the engine can keep it across ticks
/// and advance it whenever the scheduler says so.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    shooter: Player,
    position: Cell,
    direction: Direction,
    deflections: SmallVec<[(Cell, Direction); 4]>,
    ticks: u32,
    finished: bool,
}

impl Projectile {
    /// Start a shot at `origin` (the cannon's cell).
    #[must_use]
    pub fn new(shooter: Player, origin: Cell) -> Self {
        Self {
            shooter,
            position: origin,
            direction: firing_direction(shooter),
            deflections: SmallVec::new(),
            ticks: 0,
            finished: false,
        }
    }

    /// Start a shot from `shooter`'s cannon. `None` if they have no cannon.
    #[must_use]
    pub fn fire(board: &Board, shooter: Player) -> Option<Self> {
        board
            .find(shooter, PieceKind::Cannon)
            .map(|origin| Self::new(shooter, origin))
    }

    #[must_use]
    pub fn shooter(&self) -> Player {
        self.shooter
    }

    /// Current cell (the cannon's cell before the first tick).
    #[must_use]
    pub fn position(&self) -> Cell {
        self.position
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Ticks taken so far.
    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn finish(&mut self, outcome: ShotOutcome) -> ShotStep {
        self.finished = true;
        ShotStep::Finished { outcome }
    }

    /// Advance one tick. Returns `None` once the shot has finished.
    pub fn step(&mut self, board: &Board) -> Option<ShotStep> {
        if self.finished {
            return None;
        }
        self.ticks += 1;

        let Some(next) = self.position.offset(self.direction) else {
            let last = self.position;
            return Some(self.finish(ShotOutcome::ExitedBoard { last }));
        };
        self.position = next;

        let Some(piece) = board.get(next) else {
            log::trace!("shot from {} at {next}", self.shooter);
            return Some(ShotStep::Travel { cell: next });
        };

        let step = match piece.kind {
            PieceKind::Titan => self.finish(ShotOutcome::TitanHit {
                cell: next,
                owner: piece.owner,
            }),
            PieceKind::Tank => self.finish(ShotOutcome::Absorbed { cell: next }),
            PieceKind::Cannon => self.finish(ShotOutcome::Blocked { cell: next }),
            PieceKind::Ricochet | PieceKind::SemiRicochet => {
                let direction = piece.rotation.deflection();
                if self.deflections.contains(&(next, direction)) {
                    self.finish(ShotOutcome::Looped { cell: next })
                } else {
                    self.deflections.push((next, direction));
                    self.direction = direction;
                    ShotStep::Deflected { cell: next, direction }
                }
            }
        };
        log::trace!("shot from {} resolved {step:?}", self.shooter);
        Some(step)
    }

    /// Run to completion and return the outcome.
    pub fn resolve(&mut self, board: &Board) -> Option<ShotOutcome> {
        let mut outcome = None;
        while let Some(step) = self.step(board) {
            outcome = step.outcome();
        }
        outcome
    }
}

/// Lazy, finite sequence of steps for one shot over a fixed board.
///
/// ```
/// use titan_ricochet::board::{Board, Cell};
/// use titan_ricochet::core::Player;
/// use titan_ricochet::pieces::{Piece, PieceKind};
/// use titan_ricochet::projectile::{ShotOutcome, Trajectory};
///
/// let mut board = Board::new();
/// board.place(Cell::new(0, 2).unwrap(), Piece::new(PieceKind::Cannon, Player::One)).unwrap();
/// board.place(Cell::new(7, 2).unwrap(), Piece::new(PieceKind::Titan, Player::Two)).unwrap();
///
/// let steps: Vec<_> = Trajectory::fire(&board, Player::One).unwrap().collect();
/// assert_eq!(steps.len(), 7);
/// assert!(matches!(steps[6].outcome(), Some(ShotOutcome::TitanHit { .. })));
/// ```
#[derive(Clone, Debug)]
pub struct Trajectory<'a> {
    board: &'a Board,
    projectile: Projectile,
}

impl<'a> Trajectory<'a> {
    #[must_use]
    pub fn new(board: &'a Board, projectile: Projectile) -> Self {
        Self { board, projectile }
    }

    /// Trajectory of `shooter`'s cannon on `board`.
    #[must_use]
    pub fn fire(board: &'a Board, shooter: Player) -> Option<Self> {
        Projectile::fire(board, shooter).map(|projectile| Self::new(board, projectile))
    }

    /// The underlying projectile state.
    #[must_use]
    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }
}

impl Iterator for Trajectory<'_> {
    type Item = ShotStep;

    fn next(&mut self) -> Option<Self::Item> {
        self.projectile.step(self.board)
    }
}
