//! Cell tags and movement classification
//!
//! Exactly one tag occupies each grid position at any instant; the tag
//! decides which material rule the step scheduler applies.

use serde::{Deserialize, Serialize};

/// A single cell of the simulation grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing here.
    #[default]
    Empty,
    /// Immutable terrain, restored from the static wall mask every tick.
    Wall,
    /// Falls straight down, slides diagonally, displaces water.
    Sand,
    /// Falls, ignites near fire, stays dry-side-up on water.
    Wood,
    /// Spreads downward, consuming sand and wood.
    Fire,
    /// Smoke produced by burnt wood.
    WoodSmoke,
    /// Smoke produced by anything else fire consumed.
    Smoke,
    /// Quantity-driven fluid; the grid carries a per-cell level for it.
    Water,
    /// Rises until blocked, then pops.
    Balloon,
    /// Game-of-Life material, present only in the combined variant.
    Life,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Both smoke variants share the smoke movement rule.
    pub fn is_smoke(self) -> bool {
        matches!(self, Cell::WoodSmoke | Cell::Smoke)
    }

    /// How this material moves. Powders want bottom-up traversal so a
    /// falling cell is not re-processed after moving down; everything
    /// else is scanned top-down.
    pub fn material_type(self) -> MaterialType {
        match self {
            Cell::Empty | Cell::Wall => MaterialType::Static,
            Cell::Sand | Cell::Wood => MaterialType::Powder,
            Cell::Fire | Cell::WoodSmoke | Cell::Smoke => MaterialType::Gas,
            Cell::Water => MaterialType::Liquid,
            Cell::Balloon => MaterialType::Buoyant,
            Cell::Life => MaterialType::Alive,
        }
    }
}

/// How a material behaves physically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialType {
    /// Doesn't move (walls, empty space)
    Static,
    /// Falls, piles up (sand, wood)
    Powder,
    /// Flows, seeks level (water)
    Liquid,
    /// Spreads and disperses (fire, smoke)
    Gas,
    /// Rises (balloons)
    Buoyant,
    /// Neighbor-count automaton (life)
    Alive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(Cell::default(), Cell::Empty);
        assert!(Cell::default().is_empty());
        assert!(!Cell::Sand.is_empty());
    }

    #[test]
    fn test_both_smoke_variants_are_smoke() {
        assert!(Cell::Smoke.is_smoke());
        assert!(Cell::WoodSmoke.is_smoke());
        assert!(!Cell::Fire.is_smoke());
        assert!(!Cell::Empty.is_smoke());
    }

    #[test]
    fn test_material_type_classification() {
        assert_eq!(Cell::Wall.material_type(), MaterialType::Static);
        assert_eq!(Cell::Sand.material_type(), MaterialType::Powder);
        assert_eq!(Cell::Wood.material_type(), MaterialType::Powder);
        assert_eq!(Cell::Fire.material_type(), MaterialType::Gas);
        assert_eq!(Cell::WoodSmoke.material_type(), MaterialType::Gas);
        assert_eq!(Cell::Water.material_type(), MaterialType::Liquid);
        assert_eq!(Cell::Balloon.material_type(), MaterialType::Buoyant);
        assert_eq!(Cell::Life.material_type(), MaterialType::Alive);
    }
}
