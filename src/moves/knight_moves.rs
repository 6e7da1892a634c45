use crate::game_state::chess_types::{Board, Piece, Square};
use crate::moves::piece_catalog::destination_is_open;

/// L-shaped jump; intervening squares are irrelevant.
pub fn knight_move_is_pseudo_legal(
    piece: &Piece,
    from: Square,
    to: Square,
    board: &Board,
) -> bool {
    let d_file = (to.file() - from.file()).abs();
    let d_rank = (to.rank() - from.rank()).abs();
    matches!((d_file, d_rank), (1, 2) | (2, 1)) && destination_is_open(piece, to, board)
}
