//! Terminal-oriented Unicode board renderer.
//!
//! Draws the grid in storage order: rank 0 (Black's back rank) on top, file 0
//! on the left. Row and column labels are the raw engine coordinates.

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for rank in 0..8u8 {
        out.push(char::from(b'0' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let piece = Square::new(file as i8, rank as i8)
                .ok()
                .and_then(|square| board.piece_at(square));
            match piece {
                Some(piece) => out.push(piece_to_unicode(piece.color, piece.kind)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + rank));
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

/// Render the board followed by a line naming the side to move.
pub fn render_game_state(game_state: &GameState) -> String {
    format!(
        "{}\n{} to move",
        render_board(&game_state.board),
        game_state.side_to_move
    )
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_rows() {
        let rendered = render_board(&GameState::new_game().board);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "0 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 0");
        assert_eq!(lines[4], "3 · · · · · · · · 3");
        assert_eq!(lines[8], "7 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 7");
    }

    #[test]
    fn game_state_footer_names_side_to_move() {
        let rendered = render_game_state(&GameState::new_game());
        assert!(rendered.ends_with("White to move"));
    }
}
