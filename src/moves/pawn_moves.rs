//! Pawn movement: single step, double step from the start rank, diagonal
//! capture. En passant is decided by the validator, not here.

use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::{Board, Piece, Square};

pub fn pawn_move_is_pseudo_legal(piece: &Piece, from: Square, to: Square, board: &Board) -> bool {
    let forward = piece.color.forward();
    let d_file = to.file() - from.file();
    let d_rank = to.rank() - from.rank();

    if d_file == 0 && d_rank == forward {
        return board.is_empty(to);
    }

    if d_file == 0 && d_rank == 2 * forward {
        let passed_square_empty = from
            .offset(0, forward)
            .is_some_and(|square| board.is_empty(square));
        return !piece.has_moved
            && from.rank() == pawn_start_rank(piece.color)
            && passed_square_empty
            && board.is_empty(to);
    }

    if d_file.abs() == 1 && d_rank == forward {
        return board
            .piece_at(to)
            .is_some_and(|target| target.color != piece.color);
    }

    false
}
