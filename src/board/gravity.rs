//! Post-removal compaction.
//!
//! Two fixed phases:
//! 1. **Fall**: per column, one bottom-to-top pass accumulating a fall
//!    distance; every empty cell seen adds one to the distance that the
//!    tiles above it drop.
//! 2. **Shift**: left to right, a column whose bottom cell is empty counts
//!    as empty; every non-empty column moves left by the number of empty
//!    columns seen so far.
//!
//! Relative order within a column and between columns never changes.

use serde::{Deserialize, Serialize};

use crate::core::{Position, Tile};

use super::grid::Grid;

/// Which compaction phase moved a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Downward, within a column.
    Fall,
    /// Leftward, with its whole column.
    Shift,
}

/// One tile displacement, reported for animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMove {
    pub tile: Tile,
    pub from: Position,
    pub to: Position,
    pub axis: Axis,
}

/// Run both compaction phases. Fall moves are reported before shift moves.
pub fn compact(grid: &mut Grid) -> Vec<TileMove> {
    let mut moves = Vec::new();
    fall(grid, &mut moves);
    shift_left(grid, &mut moves);
    moves
}

/// Phase 1: drop tiles into the gaps below them.
pub fn fall(grid: &mut Grid, moves: &mut Vec<TileMove>) {
    for col in 0..grid.columns() {
        let mut fall_dist = 0;
        for row in (0..grid.rows()).rev() {
            let from = Position::new(col, row);
            if !grid.is_occupied(from) {
                fall_dist += 1;
                continue;
            }
            if fall_dist == 0 {
                continue;
            }
            let to = Position::new(col, row + fall_dist);
            if let Some(tile) = grid.take(from) {
                grid.set(to.col, to.row, Some(tile));
                moves.push(TileMove { tile, from, to, axis: Axis::Fall });
            }
        }
    }
}

/// Phase 2: close empty columns by sliding the columns right of them left.
pub fn shift_left(grid: &mut Grid, moves: &mut Vec<TileMove>) {
    let mut shift = 0;
    for col in 0..grid.columns() {
        if grid.column_is_empty(col) {
            shift += 1;
            continue;
        }
        if shift == 0 {
            continue;
        }
        for row in 0..grid.rows() {
            let from = Position::new(col, row);
            let Some(tile) = grid.take(from) else {
                continue;
            };
            let to = Position::new(col - shift, row);
            grid.set(to.col, to.row, Some(tile));
            moves.push(TileMove { tile, from, to, axis: Axis::Shift });
        }
    }
}

/// Check the post-compaction shape: no gap below a tile in any column, and
/// no empty column left of an occupied one.
#[must_use]
pub fn is_compact(grid: &Grid) -> bool {
    let mut seen_empty_column = false;
    for col in 0..grid.columns() {
        let mut seen_gap = false;
        for row in (0..grid.rows()).rev() {
            match grid.at(col, row) {
                None => seen_gap = true,
                Some(_) if seen_gap => return false,
                Some(_) => {}
            }
        }
        if grid.column_is_empty(col) {
            seen_empty_column = true;
        } else if seen_empty_column {
            return false;
        }
    }
    true
}
