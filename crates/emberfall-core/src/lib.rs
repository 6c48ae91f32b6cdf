pub mod world;

pub use emberfall_simulation::{Cell, MaterialType};
