//! Configuration errors.
//!
//! Turn processing never fails; only building a board or a session from
//! bad parameters does.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a board or session could not be configured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A board needs at least one column and one row.
    ZeroDimension { columns: usize, rows: usize },
    /// Storage for `columns * rows` cells exceeds what one allocation can
    /// hold, or the allocation failed.
    TooLarge { columns: usize, rows: usize },
    /// The palette must offer between 1 and 255 colors.
    InvalidPalette(usize),
    /// Tile size must be non-zero to map pixels to cells.
    ZeroTileSize,
    /// A fixed layout did not provide one entry per cell.
    LayoutMismatch { expected: usize, actual: usize },
    /// A fixed layout used a color outside the palette.
    ColorOutOfPalette { color: u8, palette_size: usize },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroDimension { columns, rows } => {
                write!(f, "board has zero area ({columns}x{rows})")
            }
            ConfigError::TooLarge { columns, rows } => {
                write!(f, "board dimensions {columns}x{rows} are too large")
            }
            ConfigError::InvalidPalette(size) => {
                write!(f, "palette size {size} is outside 1..=255")
            }
            ConfigError::ZeroTileSize => f.write_str("tile size must be non-zero"),
            ConfigError::LayoutMismatch { expected, actual } => {
                write!(f, "layout has {actual} cells, expected {expected}")
            }
            ConfigError::ColorOutOfPalette { color, palette_size } => {
                write!(f, "color {color} is outside a palette of {palette_size}")
            }
        }
    }
}

impl Error for ConfigError {}
