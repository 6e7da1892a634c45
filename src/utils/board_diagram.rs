//! Board-diagram-to-GameState parser.
//!
//! A diagram is the piece-placement field of a FEN record: eight ranks
//! separated by `/`, digits for runs of empty squares, upper case for White.
//! The first rank listed is engine rank 0 (Black's back rank), so a diagram
//! reads top-down exactly like the board is drawn.
//!
//! Moved flags are inferred from placement: a pawn off its start rank, a king
//! off its home square and a rook off its back-rank corner are all treated as
//! having moved.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{back_rank, pawn_start_rank, KING_HOME_FILE};
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_diagram(placement: &str, side_to_move: Color) -> Result<GameState, ChessErrors> {
    let mut game_state = GameState::new_empty();
    game_state.side_to_move = side_to_move;

    let ranks: Vec<&str> = placement.trim().split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidDiagram(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidDiagramToken(ch));
                }
                file += empty_count as i8;
                if file > 8 {
                    return Err(ChessErrors::InvalidDiagram(format!(
                        "rank {rank} has too many files"
                    )));
                }
                continue;
            }

            let (color, kind) = piece_from_diagram_char(ch)?;
            let square = Square::new(file, rank as i8).map_err(|_| {
                ChessErrors::InvalidDiagram(format!("rank {rank} has too many files"))
            })?;
            let mut piece = Piece::new(kind, color, square);
            piece.has_moved = !is_home_square(kind, color, square);
            game_state.board.add_piece(piece)?;
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidDiagram(format!(
                "rank {rank} does not sum to 8 files"
            )));
        }
    }

    for color in [Color::White, Color::Black] {
        let kings = game_state
            .board
            .live_pieces()
            .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .count();
        if kings != 1 {
            return Err(ChessErrors::InvalidDiagram(format!(
                "{color} must have exactly one king, found {kings}"
            )));
        }
    }

    Ok(game_state)
}

fn is_home_square(kind: PieceKind, color: Color, square: Square) -> bool {
    match kind {
        PieceKind::Pawn => square.rank() == pawn_start_rank(color),
        PieceKind::King => square.rank() == back_rank(color) && square.file() == KING_HOME_FILE,
        PieceKind::Rook => {
            square.rank() == back_rank(color) && (square.file() == 0 || square.file() == 7)
        }
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => true,
    }
}

fn piece_from_diagram_char(ch: char) -> Result<(Color, PieceKind), ChessErrors> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return Err(ChessErrors::InvalidDiagramToken(ch));
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(ChessErrors::InvalidDiagramToken(ch)),
    };

    Ok((color, piece))
}
