//! Crate root module declarations for the chess arbiter.
//!
//! This file exposes the rules engine subsystems (board state, per-piece
//! movement, legality checking and move execution, the game facade, and
//! utility helpers) so tests, benches, and a presentation layer can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod piece_catalog;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_validator;
    pub mod perft;
}

pub mod game {
    pub mod chess_clock;
    pub mod chess_game;
    pub mod game_config;
    pub mod game_outcome;
    pub mod result_log;
}

pub mod utils {
    pub mod board_diagram;
    pub mod random_playout;
    pub mod render_game_state;
}
