//! Legal move enumeration.
//!
//! Every live piece of the side to move is tried against every square and
//! kept when the full validator accepts it. This is the slow, obviously
//! correct route: the validator already owns the check-safety and special
//! move rules, so the generator adds nothing of its own.

use crate::game_state::chess_types::{Color, GameState, PieceId, Square};
use crate::move_generation::legal_move_validator::{validate_move, MoveKind};

/// One move the side to move may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

pub trait MoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<LegalMove>;
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<LegalMove> {
        generate_legal_moves(game_state)
    }
}

/// All legal moves for `game_state.side_to_move`, in arena then square order.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<LegalMove> {
    let mut legal = Vec::with_capacity(64);
    for (id, from) in pieces_of(game_state, game_state.side_to_move) {
        for to in Square::all() {
            if let Some(kind) = validate_move(game_state, id, from, to).kind() {
                legal.push(LegalMove {
                    piece: id,
                    from,
                    to,
                    kind,
                });
            }
        }
    }
    legal
}

/// Destinations reachable by the piece on `from`. Empty when the square is
/// empty; turn order is left to the caller.
pub fn legal_destinations(game_state: &GameState, from: Square) -> Vec<Square> {
    let Some(id) = game_state.board.occupant(from) else {
        return Vec::new();
    };
    Square::all()
        .filter(|&to| validate_move(game_state, id, from, to).is_legal())
        .collect()
}

/// Whether `color` has at least one legal move. Stops at the first one found.
///
/// `game_state.side_to_move` only matters for en passant, which is only
/// ever available to the side to move.
pub fn has_legal_move(game_state: &GameState, color: Color) -> bool {
    let can_move = |(id, from): (PieceId, Square)| {
        let is_legal = |to| validate_move(game_state, id, from, to).is_legal();
        Square::all().any(is_legal)
    };
    pieces_of(game_state, color).into_iter().any(can_move)
}

fn pieces_of(game_state: &GameState, color: Color) -> Vec<(PieceId, Square)> {
    game_state
        .board
        .live_pieces()
        .filter(|(_, piece)| piece.color == color)
        .map(|(id, piece)| (id, piece.square))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::CastleSide;

    #[test]
    fn twenty_moves_at_the_start() {
        let game = GameState::new_game();
        let moves = LegalMoveGenerator.generate_legal_moves(&game);
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|mv| mv.kind == MoveKind::Ordinary));
        assert!(has_legal_move(&game, Color::White));
        assert!(has_legal_move(&game, Color::Black));
    }

    #[test]
    fn knight_destinations_at_the_start() -> Result<(), ChessErrors> {
        let game = GameState::new_game();
        let mut targets = legal_destinations(&game, Square::new(6, 7)?);
        targets.sort();
        assert_eq!(targets, vec![Square::new(5, 5)?, Square::new(7, 5)?]);
        assert!(legal_destinations(&game, Square::new(4, 4)?).is_empty());
        Ok(())
    }

    #[test]
    fn castling_shows_up_in_the_move_list() -> Result<(), ChessErrors> {
        let game = GameState::from_diagram("r3k2r/8/8/8/8/8/8/R3K2R", Color::White)?;
        let castles: Vec<MoveKind> = generate_legal_moves(&game)
            .into_iter()
            .map(|mv| mv.kind)
            .filter(|kind| matches!(kind, MoveKind::Castle(_)))
            .collect();
        assert_eq!(castles.len(), 2);
        assert!(castles.contains(&MoveKind::Castle(CastleSide::Kingside)));
        assert!(castles.contains(&MoveKind::Castle(CastleSide::Queenside)));
        Ok(())
    }

    #[test]
    fn mated_side_has_no_moves() -> Result<(), ChessErrors> {
        // Back-rank mate: rook on (0, 7) against the king on (6, 7).
        let game = GameState::from_diagram("6k1/8/8/8/8/8/5PPP/r5K1", Color::White)?;
        assert!(generate_legal_moves(&game).is_empty());
        assert!(!has_legal_move(&game, Color::White));
        Ok(())
    }
}
