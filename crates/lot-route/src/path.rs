//! The result of a routing query.

use lot_core::GridPos;

/// An ordered walk from a start cell to a target cell, inclusive of both,
/// with its total weighted cost.
///
/// `cells` is never empty: a query whose start equals its target yields the
/// one-cell trivial path at cost 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Cells to visit in order, from start to target inclusive.
    pub cells: Vec<GridPos>,
    /// Total weighted cost (1 per lane/entrance step, 2 per slot step).
    pub cost: u32,
}

impl Path {
    /// Number of grid moves, excluding the starting cell.
    #[inline]
    pub fn travel_steps(&self) -> u32 {
        self.cells.len().saturating_sub(1) as u32
    }

    /// The final cell — the slot the vehicle ends up in.
    pub fn target(&self) -> GridPos {
        // Invariant: `cells` holds at least the start.
        self.cells[self.cells.len() - 1]
    }

    /// `true` if the start already was the target.
    pub fn is_trivial(&self) -> bool {
        self.cells.len() == 1
    }
}
