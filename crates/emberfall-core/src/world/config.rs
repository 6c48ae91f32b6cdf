//! Simulation configuration and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected at construction time.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("{name} must be within [0, 1], got {value}")]
    RatioOutOfRange { name: &'static str, value: f32 },

    #[error("initial_wall_ratio + initial_sand_ratio must not exceed 1.0, got {sum}")]
    RatioSumTooLarge { sum: f32 },

    #[error("max_water_capacity must be at least 1.0 (one full cell), got {0}")]
    CapacityTooSmall(f32),
}

/// Tunable constants for one simulation run.
///
/// Defaults match the classic variant: an 800x600 window at 7px cells,
/// 45% walls, 5% sand, smoke living 10 ticks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub rows: usize,
    pub cols: usize,
    /// Probability that a cell starts as a wall.
    pub initial_wall_ratio: f32,
    /// Probability that a non-wall cell starts as sand.
    pub initial_sand_ratio: f32,
    /// Ticks a freshly created smoke cell lives.
    pub smoke_lifetime: u32,
    /// Upper bound for painted water levels. A cell's nominal capacity is
    /// 1.0; anything above it is pressure that flows upward.
    pub max_water_capacity: f32,
    /// Probability that wood next to fire ignites in a given tick.
    pub wood_burn_chance: f32,
    /// Probability that a cell consumed by fire leaves smoke behind
    /// rather than nothing.
    pub fire_to_smoke_chance: f32,
    /// Run the Game-of-Life pass (the combined variant).
    pub life_enabled: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows: 85,
            cols: 114,
            initial_wall_ratio: 0.45,
            initial_sand_ratio: 0.05,
            smoke_lifetime: 10,
            max_water_capacity: 2.0,
            wood_burn_chance: 1.0,
            fire_to_smoke_chance: 1.0,
            life_enabled: false,
        }
    }
}

impl SimConfig {
    /// Reject invalid configuration with a descriptive error instead of
    /// silently clamping.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }

        for (name, value) in [
            ("initial_wall_ratio", self.initial_wall_ratio),
            ("initial_sand_ratio", self.initial_sand_ratio),
            ("wood_burn_chance", self.wood_burn_chance),
            ("fire_to_smoke_chance", self.fire_to_smoke_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RatioOutOfRange { name, value });
            }
        }

        let sum = self.initial_wall_ratio + self.initial_sand_ratio;
        if sum > 1.0 {
            return Err(ConfigError::RatioSumTooLarge { sum });
        }

        if self.max_water_capacity < 1.0 {
            return Err(ConfigError::CapacityTooSmall(self.max_water_capacity));
        }

        Ok(())
    }
}
