//! Order-irrelevant tile sets backed by a 64-bit occupancy mask.

use std::fmt;

use crate::board::tile::Tile;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TileSet(u64);

impl TileSet {
    pub const EMPTY: TileSet = TileSet(0);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        TileSet(bits)
    }

    #[inline]
    pub fn insert(&mut self, tile: Tile) {
        self.0 |= tile.bit();
    }

    #[inline]
    pub fn remove(&mut self, tile: Tile) {
        self.0 &= !tile.bit();
    }

    #[inline]
    pub const fn contains(self, tile: Tile) -> bool {
        (self.0 & tile.bit()) != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn union(self, other: TileSet) -> TileSet {
        TileSet(self.0 | other.0)
    }

    #[inline]
    pub const fn difference(self, other: TileSet) -> TileSet {
        TileSet(self.0 & !other.0)
    }

    /// Tiles in ascending square order (A1, B1, ..., H8).
    #[inline]
    pub fn iter(self) -> TileSetIter {
        TileSetIter(self.0)
    }
}

pub struct TileSetIter(u64);

impl Iterator for TileSetIter {
    type Item = Tile;

    #[inline]
    fn next(&mut self) -> Option<Tile> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Tile::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for TileSetIter {}

impl IntoIterator for TileSet {
    type Item = Tile;
    type IntoIter = TileSetIter;

    fn into_iter(self) -> TileSetIter {
        self.iter()
    }
}

impl FromIterator<Tile> for TileSet {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut set = TileSet::EMPTY;
        for tile in iter {
            set.insert(tile);
        }
        set
    }
}

impl fmt::Debug for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|t| t.to_string())).finish()
    }
}
