//! Neighbor lookups shared by the material rules

use emberfall_simulation::Cell;
use smallvec::SmallVec;

use super::Grid;

/// Bounds-checked neighborhood queries over a grid.
pub struct NeighborQueries;

impl NeighborQueries {
    /// The up-to-3 in-bounds cells in the row directly below, left to
    /// right.
    pub fn cells_below(grid: &Grid, r: usize, c: usize) -> SmallVec<[(usize, usize); 3]> {
        let mut cells = SmallVec::new();
        for dc in -1..=1 {
            if let Some(pos) = grid.offset(r, c, 1, dc) {
                cells.push(pos);
            }
        }
        cells
    }

    /// The up-to-3 in-bounds cells in the row directly above, left to
    /// right.
    pub fn cells_above(grid: &Grid, r: usize, c: usize) -> SmallVec<[(usize, usize); 3]> {
        let mut cells = SmallVec::new();
        for dc in -1..=1 {
            if let Some(pos) = grid.offset(r, c, -1, dc) {
                cells.push(pos);
            }
        }
        cells
    }

    /// Count Moore-neighborhood (8-neighbor) cells holding `tag`.
    pub fn count_moore(grid: &Grid, r: usize, c: usize, tag: Cell) -> usize {
        let mut count = 0;
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some((nr, nc)) = grid.offset(r, c, dr, dc) {
                    if grid.cell(nr, nc) == tag {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Does any of the 8 neighbors hold `tag`?
    pub fn any_moore(grid: &Grid, r: usize, c: usize, tag: Cell) -> bool {
        for dr in -1..=1 {
            for dc in -1..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some((nr, nc)) = grid.offset(r, c, dr, dc) {
                    if grid.cell(nr, nc) == tag {
                        return true;
                    }
                }
            }
        }
        false
    }
}
