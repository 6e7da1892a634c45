//! King movement: one-square steps plus the two-file castling step.
//!
//! The castling predicate only checks the static preconditions (unmoved
//! king, unmoved own rook on the matching corner, empty squares between).
//! Whether the king passes through an attacked square is decided by the
//! validator.

use crate::game_state::chess_rules::back_rank;
use crate::game_state::chess_types::{Board, CastleSide, Piece, PieceKind, Square};
use crate::moves::piece_catalog::{destination_is_open, path_is_clear};

pub fn king_move_is_pseudo_legal(piece: &Piece, from: Square, to: Square, board: &Board) -> bool {
    let d_file = (to.file() - from.file()).abs();
    let d_rank = (to.rank() - from.rank()).abs();

    if d_file.max(d_rank) == 1 {
        return destination_is_open(piece, to, board);
    }

    match castle_side(from, to) {
        Some(side) => castling_is_pseudo_legal(piece, from, side, board),
        None => false,
    }
}

/// Side of a two-file horizontal king move, if `from -> to` has that shape.
#[inline]
pub fn castle_side(from: Square, to: Square) -> Option<CastleSide> {
    if from.rank() != to.rank() {
        return None;
    }
    match to.file() - from.file() {
        2 => Some(CastleSide::Kingside),
        -2 => Some(CastleSide::Queenside),
        _ => None,
    }
}

/// Corner square holding the rook used by `side` for a king on `from`.
#[inline]
pub fn castling_rook_square(from: Square, side: CastleSide) -> Option<Square> {
    Square::new(side.rook_file(), from.rank()).ok()
}

fn castling_is_pseudo_legal(king: &Piece, from: Square, side: CastleSide, board: &Board) -> bool {
    if king.has_moved || from.rank() != back_rank(king.color) {
        return false;
    }
    let Some(corner) = castling_rook_square(from, side) else {
        return false;
    };
    let rook_ready = match board.piece_at(corner) {
        Some(rook) => rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved,
        None => false,
    };
    rook_ready && path_is_clear(from, corner, board)
}
