//! Simulation statistics collection trait

/// Trait for collecting simulation statistics
///
/// This allows the engine to record what happened during a tick without
/// depending on a full stats collection implementation in the host.
pub trait SimStats {
    /// Record that a cell moved during a pass
    fn record_cell_moved(&mut self);

    /// Record that a wood cell caught fire
    fn record_ignition(&mut self);

    /// Record that a smoke cell's lifetime expired
    fn record_smoke_expired(&mut self);

    /// Record a water flow event (down, sideways or upward)
    fn record_water_flow(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_cell_moved(&mut self) {}
    fn record_ignition(&mut self) {}
    fn record_smoke_expired(&mut self) {}
    fn record_water_flow(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_stats_all_methods() {
        let mut stats = NoopStats::default();

        // No-op implementation should not track any state, just pass through
        for _ in 0..100 {
            stats.record_cell_moved();
            stats.record_ignition();
            stats.record_smoke_expired();
            stats.record_water_flow();
        }
    }

    /// A simple implementation of SimStats for testing the trait
    struct CountingStats {
        moved: u32,
        ignitions: u32,
        expired: u32,
        flows: u32,
    }

    impl SimStats for CountingStats {
        fn record_cell_moved(&mut self) {
            self.moved += 1;
        }

        fn record_ignition(&mut self) {
            self.ignitions += 1;
        }

        fn record_smoke_expired(&mut self) {
            self.expired += 1;
        }

        fn record_water_flow(&mut self) {
            self.flows += 1;
        }
    }

    #[test]
    fn test_counting_stats_implementation() {
        let mut stats = CountingStats {
            moved: 0,
            ignitions: 0,
            expired: 0,
            flows: 0,
        };

        stats.record_cell_moved();
        stats.record_cell_moved();
        stats.record_ignition();
        stats.record_smoke_expired();
        stats.record_water_flow();
        stats.record_water_flow();
        stats.record_water_flow();

        assert_eq!(stats.moved, 2);
        assert_eq!(stats.ignitions, 1);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.flows, 3);
    }
}
