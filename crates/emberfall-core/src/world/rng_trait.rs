//! RNG trait abstraction for the simulation
//!
//! All randomized tie-breaking (initial grid draw, diagonal sand choice,
//! fire/balloon candidate shuffles, smoke candidate choice) goes through
//! this handle, so a host that injects a seeded RNG gets a reproducible
//! run.

/// Random number generator trait for the simulation.
pub trait SimRng {
    /// Generate random boolean with 50% probability
    fn gen_bool(&mut self) -> bool;

    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Generate a random index in [0, len). `len` must be non-zero.
    fn gen_index(&mut self, len: usize) -> usize;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }
}

// Blanket implementation for any type implementing rand::Rng, so hosts
// can pass a ThreadRng or any seeded generator directly.
impl<T: ?Sized + rand::Rng> SimRng for T {
    fn gen_bool(&mut self) -> bool {
        rand::Rng::r#gen(self)
    }

    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }

    fn gen_index(&mut self, len: usize) -> usize {
        rand::Rng::gen_range(self, 0..len)
    }
}
