//! Attack and check detection.
//!
//! A square is attacked when any piece of the attacking side has a
//! pseudo-legal move onto it. The same predicate is used for ordinary check
//! detection, for the check-safety filter on simulated boards, and for the
//! castling transit squares. The target square is expected to hold a piece
//! of the defending side (pawns only capture diagonally onto occupied squares).

use crate::game_state::chess_types::{Board, Color, Square};
use crate::moves::piece_catalog::pseudo_legal_move;

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king(color).map(|(_, king)| king.square)
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .live_pieces()
        .filter(|(_, piece)| piece.color == attacker_color)
        .any(|(_, piece)| pseudo_legal_move(piece, piece.square, square, board))
}

/// Whether `color`'s king is attacked. A board without that king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}
