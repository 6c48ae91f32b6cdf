//! World facade - owns the grid, config, RNG and generation counter

use emberfall_simulation::Cell;

use super::{
    is_stable, ConfigError, Grid, NoopStats, SimConfig, SimRng, SimStats, StepScheduler,
    WorldGenerator,
};

/// What a single step did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// At least one cell tag changed; the generation counter advanced.
    Advanced,
    /// No cell tag changed; the world paused itself.
    Stable,
}

/// A running simulation: grid state plus everything needed to step it.
pub struct World<R: SimRng> {
    grid: Grid,
    config: SimConfig,
    rng: R,
    generation: u64,
    paused: bool,
}

impl<R: SimRng> World<R> {
    /// Validate the configuration and generate the initial grid.
    pub fn new(config: SimConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = WorldGenerator::create_initial_grid(&config, &mut rng);
        Ok(Self {
            grid,
            config,
            rng,
            generation: 0,
            paused: false,
        })
    }

    /// Advance one generation without collecting statistics.
    pub fn step(&mut self) -> StepOutcome {
        self.step_with_stats(&mut NoopStats)
    }

    /// Advance one generation. When the new grid's tags match the old
    /// ones the world pauses itself and the generation counter stops;
    /// auxiliary-field rebalancing alone does not count as progress.
    pub fn step_with_stats(&mut self, stats: &mut dyn SimStats) -> StepOutcome {
        let next = StepScheduler::next_generation(&self.grid, &self.config, &mut self.rng, stats);

        if is_stable(&self.grid, &next) {
            self.grid = next;
            if !self.paused {
                self.paused = true;
                log::info!("world stable after {} generations, pausing", self.generation);
            }
            StepOutcome::Stable
        } else {
            self.grid = next;
            self.generation += 1;
            self.paused = false;
            StepOutcome::Advanced
        }
    }

    /// Clear the stability pause without touching the grid.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Place a material at a cell, setting up its auxiliary field:
    /// painted water starts at one full cell, painted smoke at the
    /// configured lifetime. Painting unpauses a stable world.
    pub fn paint(&mut self, r: usize, c: usize, cell: Cell) {
        self.grid.set_cell(r, c, cell);
        match cell {
            Cell::Water => {
                self.grid.set_water_level(r, c, 1.0);
            }
            Cell::Smoke | Cell::WoodSmoke => {
                self.grid.set_water_level(r, c, 0.0);
                self.grid.set_smoke_timer(r, c, self.config.smoke_lifetime);
            }
            _ => {
                // A stale level under a repainted cell would inflate the
                // next water flow into it.
                self.grid.set_water_level(r, c, 0.0);
            }
        }
        self.paused = false;
    }

    /// Place water with an explicit quantity, clamped to
    /// `max_water_capacity`. A non-positive level paints emptiness.
    pub fn paint_water(&mut self, r: usize, c: usize, level: f32) {
        let level = level.clamp(0.0, self.config.max_water_capacity);
        if level > 0.0 {
            self.grid.set_cell(r, c, Cell::Water);
            self.grid.set_water_level(r, c, level);
        } else {
            self.grid.set_cell(r, c, Cell::Empty);
            self.grid.set_water_level(r, c, 0.0);
        }
        self.paused = false;
    }

    pub fn cell(&self, r: usize, c: usize) -> Cell {
        self.grid.cell(r, c)
    }

    pub fn water_level(&self, r: usize, c: usize) -> f32 {
        self.grid.water_level(r, c)
    }

    pub fn smoke_timer(&self, r: usize, c: usize) -> u32 {
        self.grid.smoke_timer(r, c)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
