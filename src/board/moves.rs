//! Legal-move detection.
//!
//! A move exists when some occupied cell has a same-colored orthogonal
//! neighbor. Checking the right and upward neighbor of every cell covers
//! every adjacent pair exactly once.

use crate::core::{Color, MoveCheck, Position};

use super::grid::Grid;

/// Whether any removable region remains, using the given strategy.
pub fn has_any_move(grid: &Grid, strategy: MoveCheck) -> bool {
    match strategy {
        MoveCheck::Exhaustive => exhaustive(grid),
        MoveCheck::Sweep => sweep(grid),
    }
}

/// Compare every occupied cell with its right and upward neighbor.
pub fn exhaustive(grid: &Grid) -> bool {
    grid.tiles().any(|(pos, tile)| {
        let right = pos.right().and_then(|p| grid.get(p));
        let up = pos.up().and_then(|p| grid.get(p));
        [right, up].into_iter().flatten().any(|n| n.matches(tile))
    })
}

/// Legacy traversal: start at the bottom-left cell and step right or up,
/// comparing each reached cell with the cell it was reached from.
///
/// Only cells reachable from the bottom-left through occupied right/up
/// steps are considered. On a compacted board that is every tile, so the
/// answer matches `exhaustive`; on an arbitrary board pairs outside that
/// reach are missed.
pub fn sweep(grid: &Grid) -> bool {
    let mut visited = vec![false; grid.columns() * grid.rows()];
    let mut stack: Vec<(Position, Option<Color>)> = vec![(Position::new(0, grid.bottom_row()), None)];

    while let Some((pos, prev)) = stack.pop() {
        let Some(tile) = grid.get(pos) else {
            continue;
        };
        if prev == Some(tile.color) {
            return true;
        }
        let index = pos.col + pos.row * grid.columns();
        if visited[index] {
            continue;
        }
        visited[index] = true;

        // Pushed in reverse so the right neighbor is examined first
        if let Some(up) = pos.up() {
            stack.push((up, Some(tile.color)));
        }
        if let Some(right) = pos.right() {
            stack.push((right, Some(tile.color)));
        }
    }

    false
}
