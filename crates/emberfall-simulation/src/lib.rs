//! Cell and material data for the Emberfall automaton
//!
//! This crate provides the foundational types shared by the engine:
//! - Cell tags (`Cell`)
//! - Movement classification (`MaterialType`)

mod cell;

pub use cell::{Cell, MaterialType};
