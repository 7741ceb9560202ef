use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{BoardError, BoardState, Position};
use crate::solvability::is_solvable;

/// A random solvable board, shuffled with the thread-local generator.
pub fn shuffled(dimension: usize) -> Result<BoardState, BoardError> {
    shuffled_with(dimension, &mut rand::thread_rng())
}

/// Fisher-Yates over the flattened goal tiles, then a parity fix-up.
///
/// When the raw shuffle lands on an unsolvable permutation, exactly one
/// corrective swap is applied: the first two cells of row 0, or of row 1 when
/// the blank sits in row 0. Two adjacent non-blank tiles swapped once flip
/// the inversion parity without moving the blank. This skews the shuffle
/// distribution slightly in exchange for guaranteed solvability.
pub fn shuffled_with<R: Rng + ?Sized>(
    dimension: usize,
    rng: &mut R,
) -> Result<BoardState, BoardError> {
    let mut board = BoardState::goal(dimension)?.into_board();
    board.tiles_mut().shuffle(rng);

    let blank = board.blank_position();
    if !is_solvable(&board, blank.row) {
        let row = if blank.row == 0 { 1 } else { 0 };
        board.swap(Position::new(row, 0), Position::new(row, 1));
    }

    Ok(BoardState::from_parts(board, blank))
}
