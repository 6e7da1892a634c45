use crate::game_state::chess_types::{Board, Piece, Square};
use crate::moves::bishop_moves::bishop_move_is_pseudo_legal;
use crate::moves::rook_moves::rook_move_is_pseudo_legal;

/// Rook or bishop movement.
pub fn queen_move_is_pseudo_legal(piece: &Piece, from: Square, to: Square, board: &Board) -> bool {
    rook_move_is_pseudo_legal(piece, from, to, board)
        || bishop_move_is_pseudo_legal(piece, from, to, board)
}

#[cfg(test)]
mod tests {
    use super::queen_move_is_pseudo_legal;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Color, GameState, Square};

    #[test]
    fn queen_from_center_of_empty_board_reaches_27_squares() -> Result<(), ChessErrors> {
        let game = GameState::from_diagram("k7/8/8/8/3Q4/8/8/7K", Color::White)?;
        let d4 = Square::new(3, 4)?;
        let queen = *game.board.piece_at(d4).ok_or(ChessErrors::FailedTest)?;
        let reaches = |to| queen_move_is_pseudo_legal(&queen, d4, to, &game.board);

        assert_eq!(Square::all().filter(|to| reaches(*to)).count(), 27);
        assert!(!reaches(Square::new(5, 5)?));
        Ok(())
    }
}
