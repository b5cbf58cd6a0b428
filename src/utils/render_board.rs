//! Terminal-oriented Unicode board renderer.

use crate::board::board::Board;
use crate::board::chess_types::{Color, Piece, PieceKind};
use crate::board::tile::Tile;

/// Renders `board` with row 8 on top, framed by row numbers and column
/// letters.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  A B C D E F G H\n");

    for row in (0..8u8).rev() {
        out.push(char::from(b'1' + row));
        out.push(' ');

        for column in 0..8u8 {
            out.push(piece_to_unicode(board.piece_at(Tile::from_indices(row, column))));
            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row));
        out.push('\n');
    }

    out.push_str("  A B C D E F G H");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    let Piece::Placed(color, kind) = piece else {
        return '·';
    };
    match (color, kind) {
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
