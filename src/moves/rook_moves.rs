use crate::game_state::chess_types::{Board, Piece, Square};
use crate::moves::piece_catalog::{destination_is_open, path_is_clear};

/// Same file or rank, nothing in between.
pub fn rook_move_is_pseudo_legal(piece: &Piece, from: Square, to: Square, board: &Board) -> bool {
    let straight = from.file() == to.file() || from.rank() == to.rank();
    straight
        && from != to
        && path_is_clear(from, to, board)
        && destination_is_open(piece, to, board)
}
