//! Board coordinates.
//!
//! A [`Tile`] is addressable by a `(row, column)` pair with both indices in
//! `0..8`, and by a two-character code made of a column letter `A`..`H`
//! followed by a row number `1`..`8` (`(0, 0)` is `A1`, `(1, 4)` is `E2`).
//! Internally the tile is the square index `row * 8 + column`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileParseError {
    #[error("tile code must have exactly two characters, got {0:?}")]
    InvalidLength(String),
    #[error("invalid column letter {0:?}, expected A-H")]
    InvalidColumn(char),
    #[error("invalid row number {0:?}, expected 1-8")]
    InvalidRow(char),
}

impl Tile {
    pub const COUNT: usize = 64;

    /// Panics when either index is outside `0..8`.
    #[inline]
    pub const fn from_indices(row: u8, column: u8) -> Self {
        assert!(row < 8 && column < 8, "tile indices out of range");
        Tile(row * 8 + column)
    }

    /// Panics when `index >= 64`.
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 64, "tile index out of range");
        Tile(index)
    }

    /// Signed variant used by offset-based move generation; `None` when off-board.
    #[inline]
    pub fn checked_from_indices(row: i8, column: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Tile((row * 8 + column) as u8))
        } else {
            None
        }
    }

    /// Canonical code constructor. A malformed code is a caller bug and panics.
    pub fn from_code(code: &str) -> Self {
        match parse_code(code, false) {
            Ok(tile) => tile,
            Err(e) => panic!("malformed tile code {code:?}: {e}"),
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// Tile shifted by the given deltas, or `None` when it leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Self> {
        Self::checked_from_indices(self.row() as i8 + d_row, self.column() as i8 + d_column)
    }

    pub fn code(self) -> String {
        indices_to_code(self.row(), self.column())
    }

    pub fn all() -> impl Iterator<Item = Tile> {
        (0..Self::COUNT as u8).map(Tile)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'A' + self.column()),
            char::from(b'1' + self.row())
        )
    }
}

/// Lenient parser for user input: accepts lowercase column letters too.
impl FromStr for Tile {
    type Err = TileParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s.trim(), true)
    }
}

pub fn indices_to_code(row: u8, column: u8) -> String {
    Tile::from_indices(row, column).to_string()
}

pub fn code_to_indices(code: &str) -> (u8, u8) {
    let tile = Tile::from_code(code);
    (tile.row(), tile.column())
}

fn parse_code(code: &str, allow_lowercase: bool) -> Result<Tile, TileParseError> {
    let mut chars = code.chars();
    let (Some(column_ch), Some(row_ch), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(TileParseError::InvalidLength(code.to_owned()));
    };

    let column_ch_norm = if allow_lowercase {
        column_ch.to_ascii_uppercase()
    } else {
        column_ch
    };
    if !('A'..='H').contains(&column_ch_norm) {
        return Err(TileParseError::InvalidColumn(column_ch));
    }
    if !('1'..='8').contains(&row_ch) {
        return Err(TileParseError::InvalidRow(row_ch));
    }

    let column = column_ch_norm as u8 - b'A';
    let row = row_ch as u8 - b'1';
    Ok(Tile::from_indices(row, column))
}
