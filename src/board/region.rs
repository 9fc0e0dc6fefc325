//! Connected-region discovery and removal.
//!
//! A region is a maximal 4-connected set of same-colored tiles. Discovery
//! uses an explicit stack and a per-call visited mask, so board size never
//! turns into call depth.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, Position, Tile};

use super::grid::Grid;

/// Smallest region a player may remove. Lone tiles stay on the board.
pub const MIN_REGION_SIZE: usize = 2;

/// A connected group of same-colored tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub color: Color,
    /// Cells in discovery order; the start cell comes first.
    pub positions: SmallVec<[Position; 8]>,
}

impl Region {
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether a click on this region removes it.
    #[must_use]
    pub fn is_removable(&self) -> bool {
        self.len() >= MIN_REGION_SIZE
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Tiles cleared by one removal, in discovery order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removal {
    pub removed: Vec<(Position, Tile)>,
}

impl Removal {
    /// Number of tiles removed; 0 when the click removed nothing.
    #[must_use]
    pub fn count(&self) -> usize {
        self.removed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty()
    }
}

/// Discover the region containing `start` without touching the grid.
///
/// An out-of-bounds or empty start cell yields `None`.
pub fn find_region(grid: &Grid, start: Position) -> Option<Region> {
    let mut visited = vec![false; grid.columns() * grid.rows()];
    flood(grid, start, &mut visited)
}

fn flood(grid: &Grid, start: Position, visited: &mut [bool]) -> Option<Region> {
    let color = grid.get(start)?.color;
    let slot = |pos: Position| pos.col + pos.row * grid.columns();

    let mut positions: SmallVec<[Position; 8]> = SmallVec::new();
    let mut stack = vec![start];
    visited[slot(start)] = true;

    while let Some(pos) = stack.pop() {
        positions.push(pos);
        for next in pos.neighbors() {
            let Some(tile) = grid.get(next) else {
                continue;
            };
            let index = slot(next);
            if !visited[index] && tile.color == color {
                visited[index] = true;
                stack.push(next);
            }
        }
    }

    Some(Region { color, positions })
}

/// Remove the region containing `start` if it holds at least
/// `MIN_REGION_SIZE` tiles.
///
/// The full region is discovered before anything is cleared, so color
/// matching always sees the board as it was before the click. Lone tiles,
/// empty cells, and off-board coordinates leave the grid untouched and
/// return an empty `Removal`.
pub fn find_and_remove_region(grid: &mut Grid, start: Position) -> Removal {
    let Some(region) = find_region(grid, start) else {
        return Removal::default();
    };
    if !region.is_removable() {
        return Removal::default();
    }

    let removed = region
        .positions
        .iter()
        .filter_map(|&pos| grid.take(pos).map(|tile| (pos, tile)))
        .collect();
    Removal { removed }
}

/// Every removable region on the board, each reported once.
///
/// Regions are ordered by their first cell in row-major order.
pub fn removable_regions(grid: &Grid) -> Vec<Region> {
    let mut visited = vec![false; grid.columns() * grid.rows()];
    let mut regions = Vec::new();

    for row in 0..grid.rows() {
        for col in 0..grid.columns() {
            let pos = Position::new(col, row);
            if visited[col + row * grid.columns()] {
                continue;
            }
            if let Some(region) = flood(grid, pos, &mut visited) {
                if region.is_removable() {
                    regions.push(region);
                }
            }
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(columns: usize, rows: usize, colors: &[Option<u8>]) -> Grid {
        Grid::from_colors(columns, rows, colors).unwrap()
    }

    #[test]
    fn test_row_of_three_is_one_region() {
        let mut g = grid(3, 1, &[Some(0), Some(0), Some(0)]);

        let region = find_region(&g, Position::new(0, 0)).unwrap();
        assert_eq!(region.len(), 3);
        assert_eq!(region.positions[0], Position::new(0, 0));

        let removal = find_and_remove_region(&mut g, Position::new(0, 0));
        assert_eq!(removal.count(), 3);
        assert!(g.is_cleared());
    }

    #[test]
    fn test_lone_tile_is_not_removed() {
        let mut g = grid(2, 2, &[Some(0), Some(1), Some(2), Some(3)]);
        let before = g.clone();

        for col in 0..2 {
            for row in 0..2 {
                let removal = find_and_remove_region(&mut g, Position::new(col, row));
                assert_eq!(removal.count(), 0);
            }
        }
        assert_eq!(g, before);
    }

    #[test]
    fn test_diagonals_do_not_connect() {
        let g = grid(2, 2, &[Some(0), Some(1), Some(1), Some(0)]);

        let region = find_region(&g, Position::new(0, 0)).unwrap();
        assert_eq!(region.len(), 1);
        assert!(!region.is_removable());
    }

    #[test]
    fn test_region_stops_at_other_colors_and_gaps() {
        #[rustfmt::skip]
        let g = grid(4, 3, &[
            Some(0), Some(0), None,    Some(0),
            Some(1), Some(0), Some(0), Some(0),
            Some(0), Some(1), Some(2), Some(0),
        ]);

        let region = find_region(&g, Position::new(0, 0)).unwrap();
        assert_eq!(region.len(), 7);
        assert!(!region.contains(Position::new(0, 2)));
        assert!(region.contains(Position::new(3, 2)));
    }

    #[test]
    fn test_cycle_visits_each_cell_once() {
        // A ring of color 0 around a color-1 center
        #[rustfmt::skip]
        let g = grid(3, 3, &[
            Some(0), Some(0), Some(0),
            Some(0), Some(1), Some(0),
            Some(0), Some(0), Some(0),
        ]);

        let region = find_region(&g, Position::new(1, 0)).unwrap();
        assert_eq!(region.len(), 8);

        let mut sorted = region.positions.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 8);
    }

    #[test]
    fn test_empty_and_out_of_bounds_are_no_ops() {
        let mut g = grid(2, 1, &[None, Some(0)]);
        let before = g.clone();

        assert!(find_region(&g, Position::new(0, 0)).is_none());
        assert!(find_region(&g, Position::new(5, 0)).is_none());
        assert_eq!(find_and_remove_region(&mut g, Position::new(0, 0)).count(), 0);
        assert_eq!(find_and_remove_region(&mut g, Position::new(0, 9)).count(), 0);
        assert_eq!(g, before);
    }

    #[test]
    fn test_removal_reports_tiles() {
        let mut g = grid(3, 1, &[Some(2), Some(2), Some(1)]);
        let removal = find_and_remove_region(&mut g, Position::new(1, 0));

        let mut ids: Vec<_> = removal.removed.iter().map(|(_, t)| t.id.raw()).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1]);
        assert_eq!(g.colors(), vec![None, None, Some(1)]);
    }

    #[test]
    fn test_removable_regions() {
        #[rustfmt::skip]
        let g = grid(3, 3, &[
            Some(0), Some(0), Some(1),
            Some(2), Some(3), Some(1),
            Some(2), Some(0), Some(3),
        ]);

        let regions = removable_regions(&g);
        assert_eq!(regions.len(), 3);
        assert_eq!(regions[0].color, Color(0));
        assert_eq!(regions[1].color, Color(1));
        assert_eq!(regions[2].color, Color(2));
        assert!(regions.iter().all(|r| r.len() == 2));
    }

    #[test]
    fn test_no_removable_regions() {
        let g = grid(2, 2, &[Some(0), Some(1), Some(1), Some(0)]);
        assert!(removable_regions(&g).is_empty());
    }
}
