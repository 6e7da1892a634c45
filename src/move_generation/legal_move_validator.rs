//! Full legality check for a single move attempt.
//!
//! Pipeline:
//! 1. detect en passant (needs the one-ply double-step window) and castling
//!    shape (king moving two files along its rank);
//! 2. baseline = per-piece rule, or en passant;
//! 3. simulate the move on a scratch board and reject it if the mover's
//!    king is attacked afterwards;
//! 4. castling additionally needs the king out of check now, and safe on the
//!    transit square and on the destination.
//!
//! Nothing here mutates the live board.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked, king_square};
use crate::moves::king_moves::{castle_side, castling_rook_square};
use crate::moves::piece_catalog::pseudo_legal_move;

/// How a legal move changes the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Plain move or ordinary capture (promotion included).
    Ordinary,
    EnPassant,
    Castle(CastleSide),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveValidation {
    Illegal,
    LegalOrdinary,
    LegalEnPassant,
    LegalCastle(CastleSide),
}

impl MoveValidation {
    #[inline]
    pub fn kind(self) -> Option<MoveKind> {
        match self {
            MoveValidation::Illegal => None,
            MoveValidation::LegalOrdinary => Some(MoveKind::Ordinary),
            MoveValidation::LegalEnPassant => Some(MoveKind::EnPassant),
            MoveValidation::LegalCastle(side) => Some(MoveKind::Castle(side)),
        }
    }

    #[inline]
    pub fn is_legal(self) -> bool {
        self != MoveValidation::Illegal
    }
}

impl From<MoveKind> for MoveValidation {
    fn from(kind: MoveKind) -> Self {
        match kind {
            MoveKind::Ordinary => MoveValidation::LegalOrdinary,
            MoveKind::EnPassant => MoveValidation::LegalEnPassant,
            MoveKind::Castle(side) => MoveValidation::LegalCastle(side),
        }
    }
}

/// Validate moving piece `id` from `from` to `to` in `game_state`.
///
/// Turn order is not checked here; the caller decides whose move it is.
pub fn validate_move(
    game_state: &GameState,
    id: PieceId,
    from: Square,
    to: Square,
) -> MoveValidation {
    let board = &game_state.board;
    let Some(piece) = board.piece(id) else {
        return MoveValidation::Illegal;
    };
    if piece.square != from {
        return MoveValidation::Illegal;
    }

    let en_passant = is_en_passant(game_state, piece, from, to);
    let castle = match piece.kind {
        PieceKind::King => castle_side(from, to),
        _ => None,
    };

    if !(pseudo_legal_move(piece, from, to, board) || en_passant) {
        return MoveValidation::Illegal;
    }

    let kind = if en_passant {
        MoveKind::EnPassant
    } else if let Some(side) = castle {
        MoveKind::Castle(side)
    } else {
        MoveKind::Ordinary
    };

    if leaves_king_attacked(board, id, from, to, kind) {
        return MoveValidation::Illegal;
    }

    if let MoveKind::Castle(side) = kind {
        if is_king_in_check(board, piece.color) {
            return MoveValidation::Illegal;
        }
        for step in 1..=2 {
            let Some(transit) = from.offset(side.direction() * step, 0) else {
                return MoveValidation::Illegal;
            };
            if leaves_king_attacked(board, id, from, transit, MoveKind::Ordinary) {
                return MoveValidation::Illegal;
            }
        }
    }

    kind.into()
}

/// Square of the pawn removed by an en-passant capture `from -> to`.
#[inline]
pub fn en_passant_victim_square(from: Square, to: Square) -> Option<Square> {
    Square::new(to.file(), from.rank()).ok()
}

/// Square whose occupant is captured by a move of `kind` from `from` to `to`.
pub(crate) fn capture_square(
    from: Square,
    to: Square,
    kind: MoveKind,
) -> Result<Square, ChessErrors> {
    if kind != MoveKind::EnPassant {
        return Ok(to);
    }
    match en_passant_victim_square(from, to) {
        Some(victim) => Ok(victim),
        None => {
            let message = format!("en passant {from} -> {to}");
            Err(ChessErrors::CorruptMoveRecord(message))
        }
    }
}

/// Square the castling rook lands on: next to the king, on the side it came from.
#[inline]
pub fn castling_rook_destination(king_to: Square, side: CastleSide) -> Option<Square> {
    king_to.offset(-side.direction(), 0)
}

fn is_en_passant(game_state: &GameState, pawn: &Piece, from: Square, to: Square) -> bool {
    if pawn.kind != PieceKind::Pawn {
        return false;
    }
    let shape_ok = to.rank() - from.rank() == pawn.color.forward()
        && (to.file() - from.file()).abs() == 1
        && game_state.board.is_empty(to);
    if !shape_ok {
        return false;
    }

    let Some(victim_square) = en_passant_victim_square(from, to) else {
        return false;
    };
    let Some(victim_id) = game_state.board.occupant(victim_square) else {
        return false;
    };
    let victim_is_enemy_pawn = game_state
        .board
        .piece(victim_id)
        .is_some_and(|victim| victim.kind == PieceKind::Pawn && victim.color != pawn.color);

    victim_is_enemy_pawn && game_state.is_en_passant_target(victim_id)
}

/// Replay `from -> to` on a copy of `board`: capture removal, rook
/// relocation for castling, then the piece itself.
pub(crate) fn simulate_move(
    board: &Board,
    id: PieceId,
    from: Square,
    to: Square,
    kind: MoveKind,
) -> Result<Board, ChessErrors> {
    let mut scratch = board.clone();

    if let Some(victim) = scratch.occupant(capture_square(from, to, kind)?) {
        if victim != id {
            scratch.remove_piece(victim)?;
        }
    }

    if let MoveKind::Castle(side) = kind {
        let rook_from = castling_rook_square(from, side);
        let rook_to = castling_rook_destination(to, side);
        if let (Some(rook_from), Some(rook_to)) = (rook_from, rook_to) {
            if let Some(rook) = scratch.occupant(rook_from) {
                scratch.move_piece_in_place(rook, rook_to)?;
            }
        }
    }

    scratch.move_piece_in_place(id, to)?;
    Ok(scratch)
}

/// Whether the mover's king would be attacked after the simulated move.
/// A move that cannot be simulated counts as unsafe.
fn leaves_king_attacked(
    board: &Board,
    id: PieceId,
    from: Square,
    to: Square,
    kind: MoveKind,
) -> bool {
    let Some(color) = board.piece(id).map(|piece| piece.color) else {
        return true;
    };
    match simulate_move(board, id, from, to, kind) {
        Ok(after) => match king_square(&after, color) {
            Some(king_sq) => is_square_attacked(&after, king_sq, color.opposite()),
            None => false,
        },
        Err(_) => true,
    }
}
