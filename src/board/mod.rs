//! Board simulation: cell storage, region discovery, gravity, move checks.
//!
//! Every routine takes the grid by `&Grid` or `&mut Grid` for the duration
//! of one call; the session owns the grid between calls.

pub mod grid;
pub mod region;
pub mod gravity;
pub mod moves;

pub use grid::{CellView, Grid};
pub use region::{find_and_remove_region, find_region, removable_regions, Region, Removal, MIN_REGION_SIZE};
pub use gravity::{compact, is_compact, Axis, TileMove};
pub use moves::has_any_move;
