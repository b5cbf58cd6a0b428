//! Crate root module declarations for the Battle Chess decision engine.
//!
//! This file exposes the board model, legal move generation, the threaded
//! alpha-beta search, a headless match controller and text helpers, and
//! re-exports the handful of calls a surrounding game needs.

pub mod board {
    pub mod board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod tile;
    pub mod tile_set;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_moves;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_sliders;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod search_job;
    pub mod search_tree;
    pub mod threading;
}

pub mod game {
    pub mod match_config;
    pub mod match_controller;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_board;
}

pub use board::board::Board;
pub use board::chess_move::{diff_boards, Move};
pub use board::chess_types::{Color, Piece, PieceKind};
pub use board::tile::Tile;
pub use move_generation::legal_move_checks::{is_checkmate, is_in_check};
pub use search::search_job::{find_best_move, SearchConfig, SearchOutcome, SearchStats};

/// Bare-kings draw, see [`Board::is_draw`].
#[inline]
pub fn is_draw(board: &Board) -> bool {
    board.is_draw()
}
