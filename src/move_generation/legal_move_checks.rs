//! Check, checkmate, stalemate and castling-availability predicates.

use crate::board::board::Board;
use crate::board::chess_rules::{king_home_tile, rook_home_tiles};
use crate::board::chess_types::{Color, Piece, PieceKind};
use crate::board::tile::Tile;
use crate::move_generation::legal_move_generator::has_legal_moves;
use crate::move_generation::pseudo_moves::tile_moves;

/// True if any piece of `attacker_color` has `tile` among its pseudo-moves.
pub fn is_tile_attacked(board: &Board, tile: Tile, attacker_color: Color) -> bool {
    board
        .pieces(attacker_color)
        .iter()
        .any(|from| tile_moves(board, from).contains(tile))
}

/// Whether `color`'s king is attacked. Boards without that king are never in check.
pub fn is_in_check(color: Color, board: &Board) -> bool {
    let Some(king_tile) = board.king_tile(color) else {
        return false;
    };
    is_tile_attacked(board, king_tile, color.opposite())
}

/// No legal move while in check.
pub fn is_checkmate(color: Color, board: &Board) -> bool {
    is_in_check(color, board) && !has_legal_moves(color, board)
}

/// No legal move while not in check.
pub fn is_stalemate(color: Color, board: &Board) -> bool {
    !is_in_check(color, board) && !has_legal_moves(color, board)
}

/// A `color` rook standing on a home corner while the king is still on its
/// home tile, or `None`.
///
/// Only detects availability from piece placement: move history, empty
/// in-between tiles and attacked tiles are not considered, and no move
/// generator ever plays the castling move.
pub fn castling_rook(color: Color, board: &Board) -> Option<Tile> {
    if board.king_tile(color) != Some(king_home_tile(color)) {
        return None;
    }

    let corners = rook_home_tiles(color);
    board
        .pieces(color)
        .iter()
        .filter(|tile| board.piece_at(*tile) == Piece::new(color, PieceKind::Rook))
        .find(|tile| corners.contains(tile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::legal_child_boards;
    use crate::utils::fen_parser::parse_placement;

    fn tile(code: &str) -> Tile {
        Tile::from_code(code)
    }

    fn fools_mate() -> Board {
        let mut board = Board::new_game();
        board.apply_move(tile("F2"), tile("F3"));
        board.apply_move(tile("E7"), tile("E5"));
        board.apply_move(tile("G2"), tile("G4"));
        board.apply_move(tile("D8"), tile("H4"));
        board
    }

    #[test]
    fn nobody_in_check_at_start() {
        let board = Board::new_game();
        assert!(!is_in_check(Color::White, &board));
        assert!(!is_in_check(Color::Black, &board));
        assert!(!is_checkmate(Color::White, &board));
        assert!(!is_stalemate(Color::Black, &board));
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let board = fools_mate();
        assert!(is_in_check(Color::White, &board));
        assert!(is_checkmate(Color::White, &board));
        assert!(legal_child_boards(Color::White, &board).is_empty());
        assert!(!is_checkmate(Color::Black, &board));
    }

    #[test]
    fn check_that_can_be_blocked_is_not_mate() {
        let mut board = Board::new_game();
        board.apply_move(tile("E2"), tile("E4"));
        board.apply_move(tile("F7"), tile("F6"));
        board.apply_move(tile("D1"), tile("H5"));
        assert!(is_in_check(Color::Black, &board));
        assert!(!is_checkmate(Color::Black, &board));
        assert_eq!(legal_child_boards(Color::Black, &board).len(), 1);
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        // Black king on H8, white queen on G6, white king on A1; black to move.
        let board = parse_placement("7k/8/6Q1/8/8/8/8/K7").expect("valid placement");
        assert!(!is_in_check(Color::Black, &board));
        assert!(is_stalemate(Color::Black, &board));
        assert!(!is_checkmate(Color::Black, &board));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = parse_placement("8/8/8/8/8/8/8/r6K").expect("valid placement");
        assert!(!is_in_check(Color::Black, &board));
        assert!(is_in_check(Color::White, &board));
    }

    #[test]
    fn pawns_attack_only_diagonally() {
        let board = parse_placement("8/8/8/8/4k3/4P3/8/K7").expect("valid placement");
        assert!(!is_in_check(Color::Black, &board));
        let board = parse_placement("8/8/8/8/3k4/4P3/8/K7").expect("valid placement");
        assert!(is_in_check(Color::Black, &board));
    }

    #[test]
    fn castling_rook_requires_home_king_and_corner_rook() {
        let board = Board::new_game();
        assert_eq!(castling_rook(Color::White, &board), Some(tile("A1")));
        assert_eq!(castling_rook(Color::Black, &board), Some(tile("A8")));

        let board = parse_placement("4k3/8/8/8/8/8/8/R3K2R").expect("valid placement");
        assert_eq!(castling_rook(Color::White, &board), Some(tile("A1")));

        let board = parse_placement("4k3/8/8/8/8/8/8/1R2K2R").expect("valid placement");
        assert_eq!(castling_rook(Color::White, &board), Some(tile("H1")));

        let board = parse_placement("4k3/8/8/8/8/8/8/1R2K1R1").expect("valid placement");
        assert_eq!(castling_rook(Color::White, &board), None);

        let board = parse_placement("4k3/8/8/8/8/8/8/R4K1R").expect("valid placement");
        assert_eq!(castling_rook(Color::White, &board), None);
    }
}
