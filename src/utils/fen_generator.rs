use crate::board::board::Board;
use crate::board::chess_types::{Color, Piece, PieceKind};
use crate::board::tile::Tile;

/// Piece-placement field of a FEN string for `board`.
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for row in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for column in 0..8u8 {
            match piece_fen_char(board.piece_at(Tile::from_indices(row, column))) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}

/// Placement plus side to move, with the remaining FEN fields left neutral.
pub fn generate_position(board: &Board, side_to_move: Color) -> String {
    let side = match side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    format!("{} {} - - 0 1", generate_placement(board), side)
}

fn piece_fen_char(piece: Piece) -> Option<char> {
    let Piece::Placed(color, kind) = piece else {
        return None;
    };
    let ch = match kind {
        PieceKind::King => 'k',
        PieceKind::Queen => 'q',
        PieceKind::Rook => 'r',
        PieceKind::Bishop => 'b',
        PieceKind::Knight => 'n',
        PieceKind::Pawn => 'p',
    };
    Some(match color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_rules::STARTING_PLACEMENT_FEN;
    use crate::utils::fen_parser::{parse_placement, parse_position};
    use pretty_assertions::assert_eq;

    #[test]
    fn start_position_placement() {
        assert_eq!(generate_placement(&Board::new_game()), STARTING_PLACEMENT_FEN);
    }

    #[test]
    fn placement_after_a_move() {
        let board = Board::new_game().with_move(Tile::from_code("E2"), Tile::from_code("E4"));
        assert_eq!(
            generate_placement(&board),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
        );
    }

    #[test]
    fn sparse_positions_survive_parsing() {
        for fen in ["k7/8/8/8/8/8/3qQ3/7K", "8/8/8/3k4/8/3K4/8/8", "8/8/8/8/8/8/8/8"] {
            let board = parse_placement(fen).expect("valid placement");
            assert_eq!(generate_placement(&board), fen);
        }
        assert_eq!(
            parse_position(&generate_position(&Board::new_game(), Color::Black)),
            Ok((Board::new_game(), Color::Black))
        );
    }
}
