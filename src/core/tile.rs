//! Tiles and their colors.
//!
//! A tile is the content of an occupied cell. Empty cells carry no tile at
//! all, so there is no "empty color".

use serde::{Deserialize, Serialize};

/// Palette index of a tile, drawn from `[0, palette_size)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw palette index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

/// Stable tile identity.
///
/// Assigned when a board is generated and kept while the tile falls and
/// shifts, so a renderer can animate the same sprite from its old cell to
/// its new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// An occupied cell's content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub color: Color,
}

impl Tile {
    #[must_use]
    pub const fn new(id: TileId, color: Color) -> Self {
        Self { id, color }
    }

    /// Check whether two tiles can belong to the same region.
    #[must_use]
    pub fn matches(&self, other: &Tile) -> bool {
        self.color == other.color
    }
}
