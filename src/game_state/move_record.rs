use crate::game_state::chess_types::{DoubleStep, Piece, PieceId, Square};
use crate::move_generation::legal_move_validator::MoveKind;

/// A piece taken off the board by a move, kept until the move is undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPiece {
    pub id: PieceId,
    /// Value as it was on the board; `piece.square` is where it stood.
    pub piece: Piece,
}

/// Rook relocation performed by a castling move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RookRelocation {
    pub id: PieceId,
    pub from: Square,
    pub to: Square,
    pub had_moved: bool,
}

/// Single undo record, one per applied ply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    pub piece_had_moved: bool,
    pub captured: Option<CapturedPiece>,
    pub rook: Option<RookRelocation>,
    /// The pawn that was replaced by a queen, if this move promoted.
    pub promoted_pawn: Option<Piece>,
    pub prev_double_step: Option<DoubleStep>,
}

impl MoveRecord {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promoted_pawn.is_some()
    }
}
