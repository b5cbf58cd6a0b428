//! Full legal move generation.
//!
//! Every pseudo-legal destination of every piece of the moving color is
//! played on a copy of the board, and the copy is kept only when the mover's
//! king is not attacked afterwards. This post-hoc self-check filter is the
//! single legality rule of the engine; there is no pin detection.
//!
//! A board missing either king is not a playable position and yields no
//! moves for either color.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::chess_types::Color;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};
use crate::move_generation::pseudo_moves::pseudo_moves;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, color: Color, board: &Board) -> Vec<GeneratedMove> {
        let mut legal = Vec::with_capacity(48);
        if !both_kings_present(board) {
            return legal;
        }

        for origin in board.pieces(color) {
            let piece = board.piece_at(origin);
            for destination in pseudo_moves(board, piece, origin) {
                let next = board.with_move(origin, destination);

                // Illegal if own king is in check after move.
                if is_in_check(color, &next) {
                    continue;
                }

                legal.push(GeneratedMove {
                    chess_move: Move::new(origin, destination, piece),
                    board_after_move: next,
                });
            }
        }

        legal
    }
}

#[inline]
pub fn legal_moves(color: Color, board: &Board) -> Vec<GeneratedMove> {
    LegalMoveGenerator.generate_legal_moves(color, board)
}

#[inline]
pub fn legal_child_boards(color: Color, board: &Board) -> Vec<Board> {
    LegalMoveGenerator.legal_child_boards(color, board)
}

/// Same answer as `!legal_child_boards(color, board).is_empty()`, stopping at
/// the first legal move found.
pub fn has_legal_moves(color: Color, board: &Board) -> bool {
    if !both_kings_present(board) {
        return false;
    }
    board.pieces(color).iter().any(|origin| {
        pseudo_moves(board, board.piece_at(origin), origin)
            .iter()
            .any(|destination| !is_in_check(color, &board.with_move(origin, destination)))
    })
}

#[inline]
fn both_kings_present(board: &Board) -> bool {
    board.king_tile(Color::White).is_some() && board.king_tile(Color::Black).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_types::{Piece, PieceKind};
    use crate::board::tile::Tile;
    use crate::utils::fen_parser::parse_placement;

    fn tile(code: &str) -> Tile {
        Tile::from_code(code)
    }

    #[test]
    fn twenty_legal_children_from_start() {
        let board = Board::new_game();
        let white = legal_child_boards(Color::White, &board);
        assert_eq!(white.len(), 20);
        assert_eq!(legal_child_boards(Color::Black, &board).len(), 20);

        let knight_moves = legal_moves(Color::White, &board)
            .iter()
            .filter(|m| m.chess_move.piece == Piece::new(Color::White, PieceKind::Knight))
            .count();
        assert_eq!(knight_moves, 4);
        assert!(has_legal_moves(Color::White, &board));
    }

    #[test]
    fn generated_move_matches_child_board() {
        let board = Board::new_game();
        for generated in legal_moves(Color::White, &board) {
            assert_eq!(generated.chess_move.apply_to(&board), generated.board_after_move);
            assert!(generated.board_after_move.index_is_consistent());
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin() {
        // White bishop on E2 pinned against E1 by the rook on E8.
        let board = parse_placement("4r2k/8/8/8/8/8/4B3/4K3").expect("valid placement");
        let moves = legal_moves(Color::White, &board);
        assert!(moves
            .iter()
            .all(|m| m.chess_move.origin != tile("E2")));
        assert!(moves.iter().all(|m| !is_in_check(Color::White, &m.board_after_move)));
    }

    #[test]
    fn king_may_not_step_next_to_enemy_king() {
        let board = parse_placement("8/8/8/3k4/8/3K4/8/8").expect("valid placement");
        let destinations: Vec<Tile> = legal_moves(Color::White, &board)
            .iter()
            .map(|m| m.chess_move.destination)
            .collect();
        assert!(!destinations.contains(&tile("D4")));
        assert!(!destinations.contains(&tile("C4")));
        assert!(!destinations.contains(&tile("E4")));
        assert_eq!(destinations.len(), 5);
    }

    #[test]
    fn board_missing_a_king_has_no_moves() {
        // White rook and pawn, black king, but no white king.
        let board = parse_placement("7k/p7/8/8/8/8/8/R7").expect("valid placement");
        assert!(legal_child_boards(Color::White, &board).is_empty());
        assert!(legal_child_boards(Color::Black, &board).is_empty());
        assert!(!has_legal_moves(Color::White, &board));
        assert!(!has_legal_moves(Color::Black, &board));

        let no_kings = parse_placement("8/8/8/8/8/8/8/R7").expect("valid placement");
        assert!(legal_moves(Color::White, &no_kings).is_empty());
    }
}
