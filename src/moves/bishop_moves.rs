use crate::game_state::chess_types::{Board, Piece, Square};
use crate::moves::piece_catalog::{destination_is_open, path_is_clear};

/// Equal file and rank distance, diagonal clear.
pub fn bishop_move_is_pseudo_legal(
    piece: &Piece,
    from: Square,
    to: Square,
    board: &Board,
) -> bool {
    let d_file = (to.file() - from.file()).abs();
    let d_rank = (to.rank() - from.rank()).abs();
    d_file == d_rank
        && d_file != 0
        && path_is_clear(from, to, board)
        && destination_is_open(piece, to, board)
}
