//! Canonical 8x8 position representation.
//!
//! `Board` maps every tile to a [`Piece`] (empty tiles hold `Piece::Empty`)
//! and keeps one [`TileSet`] per color indexing where that color's pieces
//! stand. Both structures are updated together by every mutation, so the
//! union of the two sets is always exactly the set of non-empty tiles.
//!
//! Search treats boards as values: children are produced by copying a parent
//! and mutating the copy (see [`Board::with_move`]).

use std::fmt;

use crate::board::chess_rules::{home_row, pawn_start_row, BACK_RANK};
use crate::board::chess_types::{Color, Piece, PieceKind};
use crate::board::tile::Tile;
use crate::board::tile_set::TileSet;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Piece; 64],
    pieces_by_color: [TileSet; 2],
}

impl Board {
    /// Board with every tile empty. Used to build partial test positions.
    pub fn new_empty() -> Self {
        Self {
            squares: [Piece::Empty; 64],
            pieces_by_color: [TileSet::EMPTY; 2],
        }
    }

    /// Standard chess starting position.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        for color in [Color::White, Color::Black] {
            for (column, kind) in BACK_RANK.iter().enumerate() {
                board.place_piece(
                    Tile::from_indices(home_row(color), column as u8),
                    Piece::new(color, *kind),
                );
            }
            for column in 0..8 {
                board.place_piece(
                    Tile::from_indices(pawn_start_row(color), column),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, tile: Tile) -> Piece {
        self.squares[tile.index()]
    }

    /// Tiles currently occupied by `color`.
    #[inline]
    pub fn pieces(&self, color: Color) -> TileSet {
        self.pieces_by_color[color.index()]
    }

    #[inline]
    pub fn occupied(&self) -> TileSet {
        self.pieces(Color::White).union(self.pieces(Color::Black))
    }

    /// Overwrites `tile` with `piece`, keeping the color index sets in sync.
    pub fn place_piece(&mut self, tile: Tile, piece: Piece) {
        if let Some(previous) = self.squares[tile.index()].color() {
            self.pieces_by_color[previous.index()].remove(tile);
        }
        self.squares[tile.index()] = piece;
        if let Some(color) = piece.color() {
            self.pieces_by_color[color.index()].insert(tile);
        }
    }

    /// Moves the piece on `origin` to `destination`, capturing whatever was there.
    ///
    /// No legality check happens here; move generation owns legality.
    /// Panics if `origin` is empty or equal to `destination`.
    pub fn apply_move(&mut self, origin: Tile, destination: Tile) {
        let piece = self.squares[origin.index()];
        let Some(color) = piece.color() else {
            panic!("apply_move from empty tile {origin}");
        };
        assert_ne!(origin, destination, "apply_move origin equals destination");

        if let Some(captured) = self.squares[destination.index()].color() {
            self.pieces_by_color[captured.index()].remove(destination);
        }

        self.squares[destination.index()] = piece;
        self.squares[origin.index()] = Piece::Empty;

        let own = &mut self.pieces_by_color[color.index()];
        own.remove(origin);
        own.insert(destination);

        debug_assert!(self.index_is_consistent());
    }

    /// Copy-then-mutate helper used to produce child positions.
    pub fn with_move(&self, origin: Tile, destination: Tile) -> Board {
        let mut next = self.clone();
        next.apply_move(origin, destination);
        next
    }

    /// Tile of `color`'s king, or `None` on boards without one.
    pub fn king_tile(&self, color: Color) -> Option<Tile> {
        self.pieces(color)
            .iter()
            .find(|tile| self.piece_at(*tile) == Piece::new(color, PieceKind::King))
    }

    /// Bare kings only: each side has exactly one piece left.
    ///
    /// Deliberately narrow; no repetition, fifty-move or stalemate rule.
    pub fn is_draw(&self) -> bool {
        self.pieces(Color::White).len() == 1 && self.pieces(Color::Black).len() == 1
    }

    /// True when the index sets match the tile map exactly.
    pub fn index_is_consistent(&self) -> bool {
        Tile::all().all(|tile| {
            let piece = self.piece_at(tile);
            let in_white = self.pieces(Color::White).contains(tile);
            let in_black = self.pieces(Color::Black).contains(tile);
            match piece.color() {
                None => !in_white && !in_black,
                Some(Color::White) => in_white && !in_black,
                Some(Color::Black) => in_black && !in_white,
            }
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
