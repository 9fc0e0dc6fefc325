//! Core engine types: positions, tiles, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by the board routines and the
//! game session.

pub mod position;
pub mod tile;
pub mod rng;
pub mod config;
pub mod error;

pub use position::Position;
pub use tile::{Color, Tile, TileId};
pub use rng::{GameRng, GameRngState};
pub use config::{BoardLayout, GameConfig, MoveCheck};
pub use error::ConfigError;
