//! Initial world generation

use emberfall_simulation::Cell;

use super::{Grid, SimConfig, SimRng};

/// Builds the starting grid from the configured material ratios.
pub struct WorldGenerator;

impl WorldGenerator {
    /// Draw one uniform sample per cell: walls with probability
    /// `initial_wall_ratio`, sand with `initial_sand_ratio`, empty
    /// otherwise. The walls drawn here are captured into the static
    /// mask; walls painted later are not.
    pub fn create_initial_grid<R: SimRng>(config: &SimConfig, rng: &mut R) -> Grid {
        let mut grid = Grid::new(config.rows, config.cols);
        let sand_threshold = config.initial_wall_ratio + config.initial_sand_ratio;

        for r in 0..config.rows {
            for c in 0..config.cols {
                let roll = rng.gen_f32();
                if roll < config.initial_wall_ratio {
                    grid.set_cell(r, c, Cell::Wall);
                } else if roll < sand_threshold {
                    grid.set_cell(r, c, Cell::Sand);
                }
            }
        }

        grid.capture_static_walls();
        log::debug!(
            "generated {}x{} grid: {} walls, {} sand",
            config.rows,
            config.cols,
            grid.count(Cell::Wall),
            grid.count(Cell::Sand)
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_wall_ratio_one_fills_grid_with_walls() {
        let config = SimConfig {
            rows: 6,
            cols: 6,
            initial_wall_ratio: 1.0,
            initial_sand_ratio: 0.0,
            ..Default::default()
        };
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);

        let grid = WorldGenerator::create_initial_grid(&config, &mut rng);

        assert_eq!(grid.count(Cell::Wall), 36);
        assert!(grid.is_static_wall(3, 3));
    }

    #[test]
    fn test_zero_ratios_leave_grid_empty() {
        let config = SimConfig {
            rows: 6,
            cols: 6,
            initial_wall_ratio: 0.0,
            initial_sand_ratio: 0.0,
            ..Default::default()
        };
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);

        let grid = WorldGenerator::create_initial_grid(&config, &mut rng);

        assert_eq!(grid.count(Cell::Empty), 36);
    }

    #[test]
    fn test_only_walls_and_sand_and_empty_appear() {
        let config = SimConfig::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);

        let grid = WorldGenerator::create_initial_grid(&config, &mut rng);

        let total = config.rows * config.cols;
        let accounted =
            grid.count(Cell::Wall) + grid.count(Cell::Sand) + grid.count(Cell::Empty);
        assert_eq!(accounted, total);
        assert!(grid.count(Cell::Wall) > 0);
        assert!(grid.count(Cell::Sand) > 0);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let config = SimConfig::default();
        let mut rng_a = Xoshiro256StarStar::seed_from_u64(42);
        let mut rng_b = Xoshiro256StarStar::seed_from_u64(42);

        let a = WorldGenerator::create_initial_grid(&config, &mut rng_a);
        let b = WorldGenerator::create_initial_grid(&config, &mut rng_b);

        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn test_generated_walls_are_in_static_mask() {
        let config = SimConfig::default();
        let mut rng = Xoshiro256StarStar::seed_from_u64(9);

        let grid = WorldGenerator::create_initial_grid(&config, &mut rng);

        for r in 0..config.rows {
            for c in 0..config.cols {
                assert_eq!(grid.is_static_wall(r, c), grid.cell(r, c) == Cell::Wall);
            }
        }
    }
}
