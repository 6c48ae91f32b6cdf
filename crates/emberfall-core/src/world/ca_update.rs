//! Cellular automata update logic - per-material transition rules
//!
//! Each rule is a pure function over one cell of the previous grid: it
//! reads tags from `prev`, reads and writes the auxiliary fields on
//! `next` (the tick's working copy), and writes tags to `next` at the
//! positions it decides to affect.
//!
//! Movement targets follow a claim discipline: a rule only moves
//! material into a cell whose `next` tag still equals its `prev` tag.
//! Together with the scheduler's origin guard this means no two writes
//! ever stack on one cell within a tick, which is what keeps sand
//! conservation exact. The one sanctioned exception is water flowing
//! into a previously-empty cell that other water already reached this
//! tick - accumulation past a full cell is how upward pressure arises.
//!
//! Rules are total over valid coordinates and signal no errors. A cell
//! whose tag matches no rule is left as copied from the previous grid.

use emberfall_simulation::Cell;
use smallvec::SmallVec;

use super::{Grid, NeighborQueries, SimConfig, SimRng, SimStats};

/// Nominal fluid capacity of one cell. A level above this is pressure
/// that escapes upward.
pub const FULL_CELL: f32 = 1.0;

/// Most water a cell gives to one horizontal neighbor per tick.
pub const SIDE_FLOW_LIMIT: f32 = 0.25;

/// Neighbor counts on which a life cell survives.
pub const SURVIVE_NEIGHBORS: std::ops::RangeInclusive<usize> = 2..=8;

/// Neighbor counts on which an empty cell births into life.
pub const BIRTH_NEIGHBORS: std::ops::RangeInclusive<usize> = 6..=8;

/// Cellular automata updater - per-material movement and transformation.
pub struct CellularAutomataUpdater;

impl CellularAutomataUpdater {
    /// Sand falls straight down into empty space or water (displacing
    /// the water), else slides into a random free diagonal-down cell,
    /// else stays put.
    pub fn update_sand<R: SimRng>(
        prev: &Grid,
        next: &mut Grid,
        r: usize,
        c: usize,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        if let Some((br, bc)) = prev.offset(r, c, 1, 0) {
            let below = prev.cell(br, bc);
            if (below == Cell::Empty || below == Cell::Water) && Self::unclaimed(prev, next, br, bc)
            {
                next.set_cell(br, bc, Cell::Sand);
                next.set_cell(r, c, Cell::Empty);
                if below == Cell::Water {
                    // Displaced water is destroyed, not conserved.
                    next.set_water_level(br, bc, 0.0);
                }
                stats.record_cell_moved();
                return;
            }
        }

        let mut candidates: SmallVec<[(usize, usize); 2]> = SmallVec::new();
        for dc in [-1, 1] {
            if let Some((nr, nc)) = prev.offset(r, c, 1, dc) {
                if prev.cell(nr, nc) == Cell::Empty && Self::unclaimed(prev, next, nr, nc) {
                    candidates.push((nr, nc));
                }
            }
        }
        if !candidates.is_empty() {
            let (nr, nc) = candidates[rng.gen_index(candidates.len())];
            next.set_cell(nr, nc, Cell::Sand);
            next.set_cell(r, c, Cell::Empty);
            stats.record_cell_moved();
        }
    }

    /// Wood stays inert while water sits directly below it, ignites when
    /// fire is among its 8 neighbors, and otherwise falls into empty
    /// space below.
    pub fn update_wood<R: SimRng>(
        prev: &Grid,
        next: &mut Grid,
        r: usize,
        c: usize,
        config: &SimConfig,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        // Wet wood neither ignites nor falls.
        if let Some((br, bc)) = prev.offset(r, c, 1, 0) {
            if prev.cell(br, bc) == Cell::Water {
                return;
            }
        }

        if NeighborQueries::any_moore(prev, r, c, Cell::Fire) {
            if rng.check_probability(config.wood_burn_chance) {
                next.set_cell(r, c, Cell::Fire);
                stats.record_ignition();
            }
            return;
        }

        if let Some((br, bc)) = prev.offset(r, c, 1, 0) {
            if prev.cell(br, bc) == Cell::Empty && Self::unclaimed(prev, next, br, bc) {
                next.set_cell(br, bc, Cell::Wood);
                next.set_cell(r, c, Cell::Empty);
                stats.record_cell_moved();
            }
        }
    }

    /// Fire examines the three cells below in random order and consumes
    /// the first that is empty, sand or wood: wood leaves wood-smoke,
    /// everything else plain smoke, and the fire's origin empties. With
    /// nothing to consume the fire keeps burning in place.
    pub fn update_fire<R: SimRng>(
        prev: &Grid,
        next: &mut Grid,
        r: usize,
        c: usize,
        config: &SimConfig,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        let mut candidates = NeighborQueries::cells_below(prev, r, c);
        Self::shuffle(&mut candidates, rng);

        for (nr, nc) in candidates {
            let target = prev.cell(nr, nc);
            if !matches!(target, Cell::Empty | Cell::Sand | Cell::Wood)
                || !Self::unclaimed(prev, next, nr, nc)
            {
                continue;
            }
            if rng.check_probability(config.fire_to_smoke_chance) {
                let smoke = if target == Cell::Wood {
                    Cell::WoodSmoke
                } else {
                    Cell::Smoke
                };
                next.set_cell(nr, nc, smoke);
                next.set_smoke_timer(nr, nc, config.smoke_lifetime);
            } else {
                next.set_cell(nr, nc, Cell::Empty);
            }
            next.set_cell(r, c, Cell::Empty);
            stats.record_cell_moved();
            return;
        }
    }

    /// Smoke vanishes once its timer runs out; otherwise it decrements
    /// the timer and drifts to a random empty cell above, else beside,
    /// else waits in place. The variant (wood smoke or plain) travels
    /// with it; the vacated cell's timer is left stale.
    pub fn update_smoke<R: SimRng>(
        prev: &Grid,
        next: &mut Grid,
        r: usize,
        c: usize,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        let lifetime = next.smoke_timer(r, c);
        if lifetime == 0 {
            next.set_cell(r, c, Cell::Empty);
            stats.record_smoke_expired();
            return;
        }
        let remaining = lifetime - 1;
        let variant = prev.cell(r, c);

        let mut candidates: SmallVec<[(usize, usize); 3]> = NeighborQueries::cells_above(prev, r, c);
        candidates.retain(|&mut (nr, nc)| {
            prev.cell(nr, nc) == Cell::Empty && Self::unclaimed(prev, next, nr, nc)
        });

        if candidates.is_empty() {
            for dc in [-1, 1] {
                if let Some((nr, nc)) = prev.offset(r, c, 0, dc) {
                    if prev.cell(nr, nc) == Cell::Empty && Self::unclaimed(prev, next, nr, nc) {
                        candidates.push((nr, nc));
                    }
                }
            }
        }

        if candidates.is_empty() {
            next.set_smoke_timer(r, c, remaining);
        } else {
            let (nr, nc) = candidates[rng.gen_index(candidates.len())];
            next.set_cell(nr, nc, variant);
            next.set_smoke_timer(nr, nc, remaining);
            next.set_cell(r, c, Cell::Empty);
            stats.record_cell_moved();
        }
    }

    /// Quantity-driven water flow: a full-capacity move straight down
    /// ends the cell's tick; otherwise it spreads up to a quarter cell to
    /// each side, and any level beyond one full cell escapes upward.
    /// Every touched cell is retagged Water while its level stays
    /// positive, Empty once it reaches zero.
    pub fn update_water(
        prev: &Grid,
        next: &mut Grid,
        r: usize,
        c: usize,
        stats: &mut dyn SimStats,
    ) {
        let amount = next.water_level(r, c);
        if amount <= 0.0 {
            return;
        }

        if let Some((br, bc)) = prev.offset(r, c, 1, 0) {
            let capacity = Self::capacity(prev, next, br, bc);
            let flow = amount.min(capacity);
            if flow > 0.0 {
                next.set_water_level(br, bc, next.water_level(br, bc) + flow);
                next.set_water_level(r, c, amount - flow);
                next.set_cell(br, bc, Cell::Water);
                Self::retag(next, r, c);
                stats.record_water_flow();
                return;
            }
        }

        // The remaining level is re-read per side so the source can never
        // go negative when both sides drain it.
        for dc in [-1, 1] {
            if let Some((nr, nc)) = prev.offset(r, c, 0, dc) {
                let capacity = Self::capacity(prev, next, nr, nc);
                let share = next.water_level(r, c).min(SIDE_FLOW_LIMIT).min(capacity);
                if share > 0.0 {
                    next.set_water_level(nr, nc, next.water_level(nr, nc) + share);
                    next.set_water_level(r, c, next.water_level(r, c) - share);
                    next.set_cell(nr, nc, Cell::Water);
                    Self::retag(next, r, c);
                    stats.record_water_flow();
                }
            }
        }

        let level = next.water_level(r, c);
        if level > FULL_CELL {
            if let Some((ur, uc)) = prev.offset(r, c, -1, 0) {
                let capacity = Self::capacity(prev, next, ur, uc);
                let flow = (level - FULL_CELL).min(capacity);
                if flow > 0.0 {
                    next.set_water_level(ur, uc, next.water_level(ur, uc) + flow);
                    next.set_water_level(r, c, level - flow);
                    next.set_cell(ur, uc, Cell::Water);
                    Self::retag(next, r, c);
                    stats.record_water_flow();
                }
            }
        }
    }

    /// Balloons examine the three cells above in random order; the first
    /// candidate decides everything - empty means the balloon floats
    /// there, anything else pops it. The remaining candidates are never
    /// consulted. With no candidate in bounds the balloon floats in
    /// place.
    pub fn update_balloon<R: SimRng>(
        prev: &Grid,
        next: &mut Grid,
        r: usize,
        c: usize,
        rng: &mut R,
        stats: &mut dyn SimStats,
    ) {
        let mut candidates = NeighborQueries::cells_above(prev, r, c);
        Self::shuffle(&mut candidates, rng);

        if let Some(&(nr, nc)) = candidates.first() {
            if prev.cell(nr, nc) == Cell::Empty {
                // An empty candidate someone else already claimed this
                // tick leaves the balloon waiting, not popped.
                if Self::unclaimed(prev, next, nr, nc) {
                    next.set_cell(nr, nc, Cell::Balloon);
                    next.set_cell(r, c, Cell::Empty);
                    stats.record_cell_moved();
                }
            } else {
                next.set_cell(r, c, Cell::Empty);
            }
        }
    }

    /// Neighbor-count automaton over the Life/Empty layer: life survives
    /// with 2..=8 life neighbors, empty cells birth with 6..=8.
    pub fn update_life(prev: &Grid, next: &mut Grid, r: usize, c: usize) {
        let neighbors = NeighborQueries::count_moore(prev, r, c, Cell::Life);
        match prev.cell(r, c) {
            Cell::Life => {
                if !SURVIVE_NEIGHBORS.contains(&neighbors) {
                    next.set_cell(r, c, Cell::Empty);
                }
            }
            Cell::Empty => {
                if BIRTH_NEIGHBORS.contains(&neighbors) {
                    next.set_cell(r, c, Cell::Life);
                }
            }
            _ => {}
        }
    }

    /// Remaining fluid capacity of a target cell. A water cell takes up
    /// to a full cell minus its live level. A previously-empty cell takes
    /// a full cell regardless of what already flowed into it this tick
    /// (water is allowed to pile past capacity there, which the overflow
    /// branch later vents upward). A cell any other rule claimed this
    /// tick takes nothing.
    fn capacity(prev: &Grid, next: &Grid, r: usize, c: usize) -> f32 {
        match (prev.cell(r, c), next.cell(r, c)) {
            (Cell::Water, Cell::Water) => (FULL_CELL - next.water_level(r, c)).max(0.0),
            (Cell::Empty, Cell::Empty | Cell::Water) => FULL_CELL,
            _ => 0.0,
        }
    }

    /// A movement target is claimable only while no earlier write this
    /// tick has changed its tag.
    fn unclaimed(prev: &Grid, next: &Grid, r: usize, c: usize) -> bool {
        next.cell(r, c) == prev.cell(r, c)
    }

    fn retag(next: &mut Grid, r: usize, c: usize) {
        let tag = if next.water_level(r, c) > 0.0 {
            Cell::Water
        } else {
            Cell::Empty
        };
        next.set_cell(r, c, tag);
    }

    /// Fisher-Yates over a candidate list.
    fn shuffle<T, R: SimRng>(items: &mut [T], rng: &mut R) {
        for i in (1..items.len()).rev() {
            items.swap(i, rng.gen_index(i + 1));
        }
    }
}
