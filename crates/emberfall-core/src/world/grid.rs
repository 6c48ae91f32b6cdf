//! Fixed-size cell grid and its auxiliary fields
//!
//! The grid owns three same-shaped arrays next to the cell tags:
//! - `smoke_timer`: remaining lifetime, meaningful only for smoke tags.
//!   Values under non-smoke cells are stale and ignored, not cleared.
//! - `water_level`: fluid quantity, meaningful only for water tags.
//! - `static_walls`: positions captured as walls at initialization and
//!   forced back to `Cell::Wall` after every generation.
//!
//! All indexing is bounds-checked; an out-of-range coordinate is a
//! contract violation and panics. Neighbor lookups go through
//! [`Grid::offset`], which treats out-of-range neighbors as nonexistent
//! (no wraparound).

use emberfall_simulation::Cell;
use serde::{Deserialize, Serialize};

/// A rectangular grid of cells with auxiliary smoke and water fields.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    smoke_timer: Vec<u32>,
    water_level: Vec<f32>,
    static_walls: Vec<bool>,
}

impl Grid {
    /// Create an all-empty grid with zeroed auxiliary fields.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        let len = rows * cols;
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
            smoke_timer: vec![0; len],
            water_level: vec![0.0; len],
            static_walls: vec![false; len],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn idx(&self, r: usize, c: usize) -> usize {
        assert!(
            r < self.rows && c < self.cols,
            "cell ({r}, {c}) out of bounds for {}x{} grid",
            self.rows,
            self.cols
        );
        r * self.cols + c
    }

    pub fn cell(&self, r: usize, c: usize) -> Cell {
        self.cells[self.idx(r, c)]
    }

    pub fn set_cell(&mut self, r: usize, c: usize, cell: Cell) {
        let i = self.idx(r, c);
        self.cells[i] = cell;
    }

    pub fn smoke_timer(&self, r: usize, c: usize) -> u32 {
        self.smoke_timer[self.idx(r, c)]
    }

    pub fn set_smoke_timer(&mut self, r: usize, c: usize, ticks: u32) {
        let i = self.idx(r, c);
        self.smoke_timer[i] = ticks;
    }

    pub fn water_level(&self, r: usize, c: usize) -> f32 {
        self.water_level[self.idx(r, c)]
    }

    pub fn set_water_level(&mut self, r: usize, c: usize, level: f32) {
        let i = self.idx(r, c);
        self.water_level[i] = level;
    }

    /// The neighbor at `(r + dr, c + dc)`, or `None` when that position
    /// falls outside the grid.
    pub fn offset(&self, r: usize, c: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let nr = r.checked_add_signed(dr)?;
        let nc = c.checked_add_signed(dc)?;
        (nr < self.rows && nc < self.cols).then_some((nr, nc))
    }

    /// Capture every wall cell into the static wall mask. Called once
    /// when the initial grid is built; later painted walls are not part
    /// of the mask.
    pub fn capture_static_walls(&mut self) {
        for (i, cell) in self.cells.iter().enumerate() {
            self.static_walls[i] = *cell == Cell::Wall;
        }
    }

    /// Force every masked position back to `Cell::Wall`, overwriting
    /// whatever the material rules computed there.
    pub fn reapply_static_walls(&mut self) {
        for (i, wall) in self.static_walls.iter().enumerate() {
            if *wall {
                self.cells[i] = Cell::Wall;
            }
        }
    }

    pub fn is_static_wall(&self, r: usize, c: usize) -> bool {
        self.static_walls[self.idx(r, c)]
    }

    /// The raw cell tags, row-major. Stability comparison works on this
    /// slice alone; auxiliary fields do not participate.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count cells holding the given tag.
    pub fn count(&self, tag: Cell) -> usize {
        self.cells.iter().filter(|&&cell| cell == tag).count()
    }

    /// Total water quantity over the whole grid.
    pub fn total_water(&self) -> f32 {
        self.cells
            .iter()
            .zip(&self.water_level)
            .filter(|(cell, _)| **cell == Cell::Water)
            .map(|(_, level)| *level)
            .sum()
    }
}
