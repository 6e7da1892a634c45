//! Per-kind movement rules, dispatched by a single `match`.
//!
//! Every rule is a pure predicate over the piece, the two squares and the
//! board occupancy. None of them knows about check, turn order or en
//! passant; those belong to the validator.

use crate::game_state::chess_types::{Board, Piece, PieceKind, Square};
use crate::moves::bishop_moves::bishop_move_is_pseudo_legal;
use crate::moves::king_moves::king_move_is_pseudo_legal;
use crate::moves::knight_moves::knight_move_is_pseudo_legal;
use crate::moves::pawn_moves::pawn_move_is_pseudo_legal;
use crate::moves::queen_moves::queen_move_is_pseudo_legal;
use crate::moves::rook_moves::rook_move_is_pseudo_legal;

/// Whether `piece` standing on `from` may move to `to` by its own movement
/// rule, ignoring check.
pub fn pseudo_legal_move(piece: &Piece, from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_move_is_pseudo_legal(piece, from, to, board),
        PieceKind::Rook => rook_move_is_pseudo_legal(piece, from, to, board),
        PieceKind::Knight => knight_move_is_pseudo_legal(piece, from, to, board),
        PieceKind::Bishop => bishop_move_is_pseudo_legal(piece, from, to, board),
        PieceKind::Queen => queen_move_is_pseudo_legal(piece, from, to, board),
        PieceKind::King => king_move_is_pseudo_legal(piece, from, to, board),
    }
}

/// Empty, or held by the other side.
#[inline]
pub(crate) fn destination_is_open(piece: &Piece, to: Square, board: &Board) -> bool {
    match board.piece_at(to) {
        Some(target) => target.color != piece.color,
        None => true,
    }
}

/// All squares strictly between `from` and `to` are empty.
///
/// Only meaningful for squares sharing a file, rank or diagonal; callers
/// check alignment first.
pub(crate) fn path_is_clear(from: Square, to: Square, board: &Board) -> bool {
    let step_file = (to.file() - from.file()).signum();
    let step_rank = (to.rank() - from.rank()).signum();

    let mut current = from.offset(step_file, step_rank);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(step_file, step_rank);
    }
    false
}
