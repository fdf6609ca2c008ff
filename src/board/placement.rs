//! Randomized starting placement.
//!
//! For each player the cannon goes on a uniformly random cell of the
//! back row, then Titan, Tank, Ricochet and SemiRicochet each go on a
//! uniformly random free cell of the 3-row home band. Free cells are
//! found by rejection sampling: draw an index in range, redraw while
//! it is occupied.

use rustc_hash::FxHashMap;

use super::cell::{Cell, BOARD_SIZE};
use super::grid::Board;
use crate::core::{GameRng, Player};
use crate::error::BoardError;
use crate::pieces::{Piece, PieceKind};

/// Where each of one player's pieces ended up.
pub type Placement = FxHashMap<PieceKind, Cell>;

/// Draw cells from `lo..=hi` (flat indices) until an empty one turns up.
fn sample_free_cell(board: &Board, rng: &mut GameRng, lo: usize, hi: usize) -> Cell {
    loop {
        let index = rng.gen_range_usize(lo..hi + 1);
        if let Some(cell) = Cell::from_index(index) {
            if board.is_empty(cell) {
                return cell;
            }
        }
    }
}

fn free_cells_in_rows(board: &Board, first_row: u8, last_row: u8) -> usize {
    (first_row..=last_row)
        .flat_map(|row| (0..BOARD_SIZE).filter_map(move |col| Cell::new(row, col)))
        .filter(|&cell| board.is_empty(cell))
        .count()
}

/// Place one player's five pieces.
///
/// Fails only if the home band does not have room, which cannot happen
/// on a board cleared before setup.
pub fn place_starting_pieces(
    board: &mut Board,
    player: Player,
    rng: &mut GameRng,
) -> Result<Placement, BoardError> {
    let size = BOARD_SIZE as usize;
    let back_row = player.back_row();
    let (first_row, last_row) = player.home_rows();

    if free_cells_in_rows(board, back_row, back_row) == 0
        || free_cells_in_rows(board, first_row, last_row) < PieceKind::ALL.len()
    {
        return Err(BoardError::NoRoom(player));
    }

    let mut placement = Placement::default();

    let back_lo = back_row as usize * size;
    let cannon_cell = sample_free_cell(board, rng, back_lo, back_lo + size - 1);
    board.place(cannon_cell, Piece::new(PieceKind::Cannon, player))?;
    placement.insert(PieceKind::Cannon, cannon_cell);

    let band_lo = first_row as usize * size;
    let band_hi = last_row as usize * size + size - 1;
    for kind in PieceKind::BAND {
        let cell = sample_free_cell(board, rng, band_lo, band_hi);
        board.place(cell, Piece::new(kind, player))?;
        placement.insert(kind, cell);
    }

    log::debug!("{player} placed: {placement:?}");
    Ok(placement)
}

/// Clear the board and place both players' pieces.
pub fn setup_board(board: &mut Board, rng: &mut GameRng) -> Result<[Placement; 2], BoardError> {
    board.clear();
    let first = place_starting_pieces(board, Player::One, rng)?;
    let second = place_starting_pieces(board, Player::Two, rng)?;
    Ok([first, second])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_places_ten_pieces() {
        let mut board = Board::new();
        let mut rng = GameRng::new(42);
        let placements = setup_board(&mut board, &mut rng).unwrap();

        assert_eq!(board.occupied_count(), 10);
        assert_eq!(placements[0].len(), 5);
        assert_eq!(placements[1].len(), 5);
    }

    #[test]
    fn test_cannon_on_back_row() {
        for seed in 0..50 {
            let mut board = Board::new();
            let mut rng = GameRng::new(seed);
            let [p1, p2] = setup_board(&mut board, &mut rng).unwrap();

            assert_eq!(p1[&PieceKind::Cannon].row(), 0);
            assert_eq!(p2[&PieceKind::Cannon].row(), 7);
        }
    }

    #[test]
    fn test_placement_matches_board() {
        let mut board = Board::new();
        let mut rng = GameRng::new(3);
        let placements = setup_board(&mut board, &mut rng).unwrap();

        for (player, placement) in Player::ALL.into_iter().zip(placements.iter()) {
            for (&kind, &cell) in placement {
                let piece = board.get(cell).unwrap();
                assert_eq!(piece.kind, kind);
                assert_eq!(piece.owner, player);
            }
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        let mut a = Board::new();
        let mut b = Board::new();
        setup_board(&mut a, &mut GameRng::new(77)).unwrap();
        setup_board(&mut b, &mut GameRng::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_back_row_is_rejected() {
        let mut board = Board::new();
        for col in 0..BOARD_SIZE {
            board
                .place(Cell::new(0, col).unwrap(), Piece::new(PieceKind::Tank, Player::Two))
                .unwrap();
        }
        let result = place_starting_pieces(&mut board, Player::One, &mut GameRng::new(1));
        assert_eq!(result.unwrap_err(), BoardError::NoRoom(Player::One));
    }
}
