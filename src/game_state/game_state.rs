//! Core game state representation.
//!
//! `GameState` is the central model for the engine. It owns the board, the
//! side to move, the en-passant window and the undo stack used by the
//! apply/undo workflow.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_DIAGRAM;
use crate::game_state::chess_types::*;
use crate::utils::board_diagram::parse_diagram;

/// A pawn that just advanced two squares, and the side that moved it.
///
/// Makes the pawn capturable en passant on the very next ply only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleStep {
    pub pawn: PieceId,
    pub turn: Color,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub last_double_step: Option<DoubleStep>,
    pub ply: u32,
    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new_empty(),
            side_to_move: Color::White,
            last_double_step: None,
            ply: 0,
            history: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_diagram(STARTING_POSITION_DIAGRAM, Color::White)
            .expect("starting diagram should always parse")
    }

    /// Build a position from a rank-by-rank placement diagram.
    #[inline]
    pub fn from_diagram(placement: &str, side_to_move: Color) -> Result<Self, ChessErrors> {
        parse_diagram(placement, side_to_move)
    }

    /// Flag the piece on `square` as having moved (drops its castling or
    /// double-step rights).
    pub fn mark_moved(&mut self, square: Square) -> Result<(), ChessErrors> {
        let Some(id) = self.board.occupant(square) else {
            let message = format!("no piece on {square}");
            return Err(ChessErrors::InvalidDiagram(message));
        };
        self.board.set_has_moved(id, true)
    }

    /// Whether the pawn on `id` may be taken en passant by `side_to_move` now.
    #[inline]
    pub fn is_en_passant_target(&self, id: PieceId) -> bool {
        match self.last_double_step {
            Some(step) => step.pawn == id && step.turn == self.side_to_move.opposite(),
            None => false,
        }
    }
}
