//! Stability detection between generations

use super::Grid;

/// Two generations are stable when every cell tag matches. Auxiliary
/// fields do not participate: a trapped smoke timer or an internal
/// water rebalance that changes no tag still counts as stable.
pub fn is_stable(a: &Grid, b: &Grid) -> bool {
    a.cells() == b.cells()
}
