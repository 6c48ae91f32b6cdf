//! World management - grid, material rules, stepping

mod ca_update;
mod config;
mod generation;
mod grid;
mod neighbor_queries;
mod rng_trait;
mod scheduler;
mod stability;
pub mod stats;
#[allow(clippy::module_inception)]
mod world;

pub use ca_update::{
    BIRTH_NEIGHBORS, CellularAutomataUpdater, FULL_CELL, SIDE_FLOW_LIMIT, SURVIVE_NEIGHBORS,
};
pub use config::{ConfigError, SimConfig};
pub use generation::WorldGenerator;
pub use grid::Grid;
pub use neighbor_queries::NeighborQueries;
pub use rng_trait::SimRng;
pub use scheduler::StepScheduler;
pub use stability::is_stable;
pub use stats::{NoopStats, SimStats};
pub use world::{StepOutcome, World};
