//! FEN piece-placement parser.
//!
//! Only the placement and side-to-move fields carry meaning for this engine;
//! castling rights, en-passant target and clocks are accepted and ignored.

use thiserror::Error;

use crate::board::board::Board;
use crate::board::chess_types::{Color, Piece, PieceKind};
use crate::board::tile::Tile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("missing board layout in FEN")]
    MissingPlacement,
    #[error("board layout must contain 8 rows, found {0}")]
    RowCount(usize),
    #[error("invalid piece character '{0}' in board layout")]
    InvalidPiece(char),
    #[error("row {row} does not sum to 8 columns")]
    RowWidth { row: u8 },
    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),
}

/// Board from the first field of a FEN string (`rnbqkbnr/pppppppp/...`).
/// Uppercase letters are white pieces, lowercase black.
pub fn parse_placement(fen: &str) -> Result<Board, FenError> {
    let placement = fen.split_whitespace().next().ok_or(FenError::MissingPlacement)?;

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::RowCount(rows.len()));
    }

    let mut board = Board::new_empty();
    for (fen_row_idx, row_str) in rows.iter().enumerate() {
        let row = 7 - fen_row_idx as u8;
        let mut column = 0u8;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(FenError::InvalidPiece(ch));
                }
                column += empty_count as u8;
                if column > 8 {
                    return Err(FenError::RowWidth { row: row + 1 });
                }
                continue;
            }

            let piece = piece_from_fen_char(ch).ok_or(FenError::InvalidPiece(ch))?;
            if column >= 8 {
                return Err(FenError::RowWidth { row: row + 1 });
            }
            board.place_piece(Tile::from_indices(row, column), piece);
            column += 1;
        }

        if column != 8 {
            return Err(FenError::RowWidth { row: row + 1 });
        }
    }

    Ok(board)
}

/// Board plus side to move. A missing side field defaults to white.
pub fn parse_position(fen: &str) -> Result<(Board, Color), FenError> {
    let board = parse_placement(fen)?;
    let side = match fen.split_whitespace().nth(1) {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(FenError::InvalidSideToMove(other.to_owned())),
    };
    Ok((board, side))
}

pub fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'k' => PieceKind::King,
        'q' => PieceKind::Queen,
        'r' => PieceKind::Rook,
        'b' => PieceKind::Bishop,
        'n' => PieceKind::Knight,
        'p' => PieceKind::Pawn,
        _ => return None,
    };
    Some(Piece::new(color, kind))
}
