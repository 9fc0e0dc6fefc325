//! Game configuration types.
//!
//! The presentation layer configures a session at startup by providing:
//! - Board dimensions, either directly or derived from a pixel layout
//! - The palette size (number of tile colors)
//! - Which move-availability strategy decides game over
//! - How long the game-over notice stays up
//!
//! `GameConfig` is validated when a game starts, not when it is built, so
//! the `with_*` builders never fail.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::position::Position;
use super::tile::Tile;

/// Default board width in tiles.
pub const DEFAULT_COLUMNS: usize = 10;
/// Default board height in tiles.
pub const DEFAULT_ROWS: usize = 15;
/// Default number of tile colors.
pub const DEFAULT_PALETTE_SIZE: usize = 4;
/// Default edge length of a tile, in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 40;
/// Default time the game-over notice stays visible.
pub const DEFAULT_NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

/// How the engine decides whether any legal move remains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCheck {
    /// Compare every occupied cell with its right and upward neighbor.
    #[default]
    Exhaustive,
    /// Legacy traversal from the bottom-left cell through right/up steps,
    /// comparing each reached cell with the cell it was reached from.
    Sweep,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board width in tiles (>= 1).
    pub columns: usize,

    /// Board height in tiles (>= 1).
    pub rows: usize,

    /// Number of tile colors; tiles are drawn uniformly from `[0, palette_size)`.
    pub palette_size: usize,

    /// Edge length of one tile in pixels, used for click mapping.
    pub tile_size: u32,

    /// Strategy for the "no move left" terminal check.
    pub move_check: MoveCheck,

    /// How long a presentation layer should show the game-over notice.
    pub notice_timeout: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            palette_size: DEFAULT_PALETTE_SIZE,
            tile_size: DEFAULT_TILE_SIZE,
            move_check: MoveCheck::default(),
            notice_timeout: DEFAULT_NOTICE_TIMEOUT,
        }
    }
}

impl GameConfig {
    /// Create a config with the given board dimensions and default settings.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    /// Derive board dimensions from a pixel layout.
    ///
    /// Partial tiles at the right and bottom edges are dropped.
    ///
    /// ```
    /// use same_game::core::GameConfig;
    ///
    /// let config = GameConfig::from_layout(400, 610, 40).unwrap();
    /// assert_eq!((config.columns, config.rows), (10, 15));
    /// ```
    pub fn from_layout(width_px: u32, height_px: u32, tile_size: u32) -> Result<Self, ConfigError> {
        if tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        let config = Self {
            columns: (width_px / tile_size) as usize,
            rows: (height_px / tile_size) as usize,
            tile_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the palette size.
    #[must_use]
    pub fn with_palette_size(mut self, palette_size: usize) -> Self {
        self.palette_size = palette_size;
        self
    }

    /// Set the tile edge length in pixels.
    #[must_use]
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Set the move-availability strategy.
    #[must_use]
    pub fn with_move_check(mut self, move_check: MoveCheck) -> Self {
        self.move_check = move_check;
        self
    }

    /// Set how long the game-over notice stays visible.
    #[must_use]
    pub fn with_notice_timeout(mut self, timeout: Duration) -> Self {
        self.notice_timeout = timeout;
        self
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }

    /// Check every invariant a session relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.columns, self.rows)?;
        if !(1..=u8::MAX as usize).contains(&self.palette_size) {
            return Err(ConfigError::InvalidPalette(self.palette_size));
        }
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        Ok(())
    }

    /// Pixel mapping for this board.
    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        BoardLayout {
            columns: self.columns,
            rows: self.rows,
            tile_size: self.tile_size,
        }
    }
}

pub(crate) fn validate_dimensions(columns: usize, rows: usize) -> Result<(), ConfigError> {
    if columns == 0 || rows == 0 {
        return Err(ConfigError::ZeroDimension { columns, rows });
    }
    let fits = columns
        .checked_mul(rows)
        .and_then(|cells| cells.checked_mul(std::mem::size_of::<Option<Tile>>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if !fits {
        return Err(ConfigError::TooLarge { columns, rows });
    }
    Ok(())
}

/// Maps between pixel coordinates and board cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub columns: usize,
    pub rows: usize,
    pub tile_size: u32,
}

impl BoardLayout {
    /// Cell under a pixel, or `None` when the pixel is off the board.
    pub fn cell_at(&self, x: i64, y: i64) -> Option<Position> {
        if self.tile_size == 0 || x < 0 || y < 0 {
            return None;
        }
        let size = i64::from(self.tile_size);
        let col = usize::try_from(x / size).ok()?;
        let row = usize::try_from(y / size).ok()?;
        (col < self.columns && row < self.rows).then_some(Position::new(col, row))
    }

    /// Top-left pixel of a cell.
    #[must_use]
    pub fn origin_of(&self, pos: Position) -> (u64, u64) {
        let size = u64::from(self.tile_size);
        (pos.col as u64 * size, pos.row as u64 * size)
    }

    /// Board size in pixels.
    #[must_use]
    pub fn pixel_size(&self) -> (u64, u64) {
        let size = u64::from(self.tile_size);
        (self.columns as u64 * size, self.rows as u64 * size)
    }
}
