//! Descriptive moves derived from pairs of boards.
//!
//! Search works on child boards rather than moves; a [`Move`] is recovered
//! afterwards by diffing the position before and after.

use std::fmt;

use crate::board::board::Board;
use crate::board::chess_types::{Color, Piece};
use crate::board::tile::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub origin: Tile,
    pub destination: Tile,
    pub piece: Piece,
}

impl Move {
    pub fn new(origin: Tile, destination: Tile, piece: Piece) -> Self {
        Self {
            origin,
            destination,
            piece,
        }
    }

    /// Board produced by playing this move on `board`.
    pub fn apply_to(&self, board: &Board) -> Board {
        board.with_move(self.origin, self.destination)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} to {}", self.piece, self.origin, self.destination)
    }
}

/// Recovers the single move `color` played to turn `before` into `after`.
///
/// Panics unless exactly one of `color`'s pieces changed position.
pub fn diff_boards(before: &Board, after: &Board, color: Color) -> Move {
    let vacated = before.pieces(color).difference(after.pieces(color));
    let arrived = after.pieces(color).difference(before.pieces(color));
    assert!(
        vacated.len() == 1 && arrived.len() == 1,
        "boards differ by more than one {color} move (vacated {vacated:?}, arrived {arrived:?})"
    );

    let origin = vacated.iter().next().expect("one vacated tile");
    let destination = arrived.iter().next().expect("one arrived tile");
    Move::new(origin, destination, before.piece_at(origin))
}
