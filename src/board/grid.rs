//! Cell storage and coordinate arithmetic.
//!
//! The grid is a flat row-major `Vec<Option<Tile>>`. Every in-bounds
//! coordinate maps to exactly one slot; out-of-bounds lookups answer "no
//! cell" instead of failing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::validate_dimensions;
use crate::core::{Color, ConfigError, GameRng, Position, Tile, TileId};

/// What a renderer needs to draw one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub position: Position,
    pub tile: Option<Tile>,
}

/// A `columns × rows` board of optional tiles.
///
/// Serializable for snapshots sent to a renderer; boards are only built
/// through the constructors, which keep `cells.len() == columns * rows`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Fails with `TooLarge` instead of aborting when the cells cannot be
    /// allocated.
    pub fn new(columns: usize, rows: usize) -> Result<Self, ConfigError> {
        validate_dimensions(columns, rows)?;
        let len = columns * rows;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| ConfigError::TooLarge { columns, rows })?;
        cells.resize(len, None);
        Ok(Self { columns, rows, cells })
    }

    /// Create a fully occupied grid with colors drawn uniformly from
    /// `[0, palette_size)`.
    ///
    /// Tiles are created column by column, top to bottom, and numbered in
    /// that order.
    pub fn random(
        columns: usize,
        rows: usize,
        palette_size: usize,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        let mut grid = Self::new(columns, rows)?;
        let mut next_id = 0u32;
        for col in 0..columns {
            for row in 0..rows {
                let color = rng.gen_color(palette_size);
                grid.set(col, row, Some(Tile::new(TileId(next_id), color)));
                next_id = next_id.wrapping_add(1);
            }
        }
        Ok(grid)
    }

    /// Build a grid from row-major colors, top row first. `None` is an
    /// empty cell. Tile ids follow the slice order.
    ///
    /// ```
    /// use same_game::board::Grid;
    ///
    /// let grid = Grid::from_colors(3, 2, &[
    ///     None,    Some(1), None,
    ///     Some(0), Some(1), Some(2),
    /// ]).unwrap();
    ///
    /// assert!(grid.at(0, 0).is_none());
    /// assert_eq!(grid.at(1, 1).map(|t| t.color.0), Some(1));
    /// assert_eq!(grid.tile_count(), 4);
    /// ```
    pub fn from_colors(columns: usize, rows: usize, colors: &[Option<u8>]) -> Result<Self, ConfigError> {
        let mut grid = Self::new(columns, rows)?;
        if colors.len() != grid.cells.len() {
            return Err(ConfigError::LayoutMismatch {
                expected: grid.cells.len(),
                actual: colors.len(),
            });
        }
        for (i, (slot, color)) in grid.cells.iter_mut().zip(colors).enumerate() {
            *slot = color.map(|c| Tile::new(TileId(i as u32), Color(c)));
        }
        Ok(grid)
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Index of the bottom row, where gravity stacks tiles.
    #[must_use]
    pub fn bottom_row(&self) -> usize {
        self.rows - 1
    }

    #[must_use]
    pub fn in_bounds(&self, col: usize, row: usize) -> bool {
        col < self.columns && row < self.rows
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.in_bounds(pos.col, pos.row)
    }

    /// Storage slot of a cell. Callers check bounds first.
    fn index(&self, col: usize, row: usize) -> usize {
        col + row * self.columns
    }

    /// Tile at a cell, or `None` when the cell is empty or off the board.
    #[must_use]
    pub fn at(&self, col: usize, row: usize) -> Option<&Tile> {
        if !self.in_bounds(col, row) {
            return None;
        }
        self.cells[self.index(col, row)].as_ref()
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&Tile> {
        self.at(pos.col, pos.row)
    }

    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Overwrite a cell.
    ///
    /// Writing outside the board is a caller bug; debug builds assert on
    /// it and release builds ignore the write.
    pub fn set(&mut self, col: usize, row: usize, tile: Option<Tile>) {
        debug_assert!(
            self.in_bounds(col, row),
            "set({col}, {row}) outside {}x{} grid",
            self.columns,
            self.rows
        );
        if !self.in_bounds(col, row) {
            return;
        }
        let index = self.index(col, row);
        self.cells[index] = tile;
    }

    /// Empty a cell and hand back what was there.
    pub fn take(&mut self, pos: Position) -> Option<Tile> {
        if !self.contains(pos) {
            return None;
        }
        let index = self.index(pos.col, pos.row);
        self.cells[index].take()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// True when no tile rests on the bottom row.
    ///
    /// After compaction this is equivalent to the board being cleared.
    #[must_use]
    pub fn bottom_row_is_empty(&self) -> bool {
        let bottom = self.bottom_row();
        (0..self.columns).all(|col| self.at(col, bottom).is_none())
    }

    /// Column is considered empty once its bottom cell is empty.
    #[must_use]
    pub fn column_is_empty(&self, col: usize) -> bool {
        self.at(col, self.bottom_row()).is_none()
    }

    /// Every cell in row-major order, top row first.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        self.cells.iter().enumerate().map(move |(i, tile)| CellView {
            position: Position::new(i % self.columns, i / self.columns),
            tile: *tile,
        })
    }

    /// Occupied cells only.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, &Tile)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, tile)| {
            tile.as_ref()
                .map(|t| (Position::new(i % self.columns, i / self.columns), t))
        })
    }

    /// Remaining tiles per color.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for (_, tile) in self.tiles() {
            *counts.entry(tile.color).or_insert(0) += 1;
        }
        counts
    }

    /// Check that every tile color lies in `[0, palette_size)`.
    pub fn check_palette(&self, palette_size: usize) -> Result<(), ConfigError> {
        match self.tiles().find(|(_, t)| t.color.index() >= palette_size) {
            Some((_, tile)) => Err(ConfigError::ColorOutOfPalette {
                color: tile.color.0,
                palette_size,
            }),
            None => Ok(()),
        }
    }

    /// Row-major colors, top row first; the inverse of `from_colors`.
    #[must_use]
    pub fn colors(&self) -> Vec<Option<u8>> {
        self.cells.iter().map(|c| c.map(|t| t.color.0)).collect()
    }
}

impl std::fmt::Display for Grid {
    /// One line per row; `.` for empty cells, the color index otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.columns {
                match self.at(col, row) {
                    Some(tile) => write!(f, "{:x}", tile.color.0 % 16)?,
                    None => f.write_str(".")?,
                }
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
