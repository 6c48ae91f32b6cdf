//! Step scheduler - one generation as a fixed sequence of material passes
//!
//! The traversal order of every pass and the already-mutated guard are
//! part of this module's contract, not incidental loop choices:
//!
//! 1. Life/Empty (combined variant only; independent of the materials)
//! 2. Fire, top-to-bottom
//! 3. Smoke (both variants), top-to-bottom - smoke created by fire this
//!    tick is only tagged in the next grid and therefore first moves
//!    next tick
//! 4. Sand, bottom-to-top, so a falling grain is not re-processed after
//!    moving down within the same tick
//! 5. Wood, bottom-to-top, same rationale
//! 6. Water, top-to-bottom
//! 7. Balloon, top-to-bottom
//! 8. The static wall mask is reapplied over everything
//!
//! A pass invokes its rule only where the previous grid holds the pass's
//! material AND the next grid still holds it (the guard against
//! double-processing a cell an earlier pass already rewrote).

use emberfall_simulation::Cell;

use super::{CellularAutomataUpdater, Grid, SimConfig, SimRng, SimStats};

/// Orchestrates one full generation.
pub struct StepScheduler;

impl StepScheduler {
    /// Compute the next generation. The previous grid is only read;
    /// `next` starts as a copy of it so untouched cells carry over.
    pub fn next_generation<R: SimRng>(
        prev: &Grid,
        config: &SimConfig,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) -> Grid {
        let mut next = prev.clone();
        let (rows, cols) = (prev.rows(), prev.cols());

        // Life occupies only the Life/Empty layer and never reads the
        // moving materials, so it runs before them.
        if config.life_enabled {
            for r in 0..rows {
                for c in 0..cols {
                    let cell = prev.cell(r, c);
                    if matches!(cell, Cell::Life | Cell::Empty) && next.cell(r, c) == cell {
                        CellularAutomataUpdater::update_life(prev, &mut next, r, c);
                    }
                }
            }
        }

        // Fire. Rules read only `prev`, so order within a pass cannot
        // change the outcome; across passes it does.
        for r in 0..rows {
            for c in 0..cols {
                if Self::unmoved(prev, &next, r, c, Cell::Fire) {
                    CellularAutomataUpdater::update_fire(prev, &mut next, r, c, config, rng, stats);
                }
            }
        }

        // Smoke, both variants.
        for r in 0..rows {
            for c in 0..cols {
                let cell = prev.cell(r, c);
                if cell.is_smoke() && next.cell(r, c) == cell {
                    CellularAutomataUpdater::update_smoke(prev, &mut next, r, c, rng, stats);
                }
            }
        }

        // Sand, bottom-up.
        for r in (0..rows).rev() {
            for c in 0..cols {
                if Self::unmoved(prev, &next, r, c, Cell::Sand) {
                    CellularAutomataUpdater::update_sand(prev, &mut next, r, c, rng, stats);
                }
            }
        }

        // Wood, bottom-up.
        for r in (0..rows).rev() {
            for c in 0..cols {
                if Self::unmoved(prev, &next, r, c, Cell::Wood) {
                    CellularAutomataUpdater::update_wood(prev, &mut next, r, c, config, rng, stats);
                }
            }
        }

        // Water.
        for r in 0..rows {
            for c in 0..cols {
                if Self::unmoved(prev, &next, r, c, Cell::Water) {
                    CellularAutomataUpdater::update_water(prev, &mut next, r, c, stats);
                }
            }
        }

        // Balloon.
        for r in 0..rows {
            for c in 0..cols {
                if Self::unmoved(prev, &next, r, c, Cell::Balloon) {
                    CellularAutomataUpdater::update_balloon(prev, &mut next, r, c, rng, stats);
                }
            }
        }

        next.reapply_static_walls();
        next
    }

    /// The already-mutated guard: act only if the cell held `tag` before
    /// the tick and no earlier pass has rewritten it.
    fn unmoved(prev: &Grid, next: &Grid, r: usize, c: usize, tag: Cell) -> bool {
        prev.cell(r, c) == tag && next.cell(r, c) == tag
    }
}
