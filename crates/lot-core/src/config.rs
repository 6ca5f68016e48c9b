//! Lot configuration and derived grid dimensions.
//!
//! # Design
//!
//! The caller asks for a *logical* lot size (rows of parking, columns of
//! parking).  The physical grid doubles it:
//!
//!   grid_rows = max(5, requested_rows) * 2 + 1
//!   grid_cols = max(4, requested_cols) * 2 + 1
//!
//! Doubling produces alternating aisle/slot rows and columns, so every slot
//! has lane access on at least one side.  The minimums keep the default
//! dedicated-slot coordinates inside the grid.
//!
//! Layout generation is a deterministic, pure function of this struct: the
//! same config always produces the same lot.

use crate::GridPos;

/// Default EV-dedicated slot coordinates (clamped to bounds at layout time).
pub const DEFAULT_EV_SLOTS: [GridPos; 3] = [
    GridPos::new(10, 6),
    GridPos::new(10, 8),
    GridPos::new(8, 8),
];

/// Default truck-dedicated slot coordinates.
pub const DEFAULT_TRUCK_SLOTS: [GridPos; 2] = [GridPos::new(2, 0), GridPos::new(2, 2)];

/// Top-level lot configuration.
///
/// `Default` produces the standard demonstration lot: a 4×4 request (11×9 grid)
/// with three EV slots and two truck slots at fixed coordinates.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LotConfig {
    /// Requested logical rows of parking.  Clamped up to 5 before doubling.
    pub requested_rows: u32,

    /// Requested logical columns of parking.  Clamped up to 4 before doubling.
    pub requested_cols: u32,

    /// Candidate coordinates for EV-dedicated slots.  Candidates outside the
    /// derived grid (or on rows 0–1) are dropped at layout time.
    pub ev_slots: Vec<GridPos>,

    /// Candidate coordinates for truck-dedicated slots.  Same clamping rules
    /// as `ev_slots`; a coordinate may belong to at most one dedicated set.
    pub truck_slots: Vec<GridPos>,
}

impl LotConfig {
    /// Config with the given logical size and the default dedicated slots.
    pub fn with_size(requested_rows: u32, requested_cols: u32) -> Self {
        Self {
            requested_rows,
            requested_cols,
            ..Self::default()
        }
    }

    // ── Derived grid dimensions ───────────────────────────────────────────

    /// Physical grid row count (always odd, at least 11).
    #[inline]
    pub fn grid_rows(&self) -> u32 {
        self.requested_rows.max(5) * 2 + 1
    }

    /// Physical grid column count (always odd, at least 9).
    #[inline]
    pub fn grid_cols(&self) -> u32 {
        self.requested_cols.max(4) * 2 + 1
    }

    /// The fixed entrance cell: top row, middle column.
    #[inline]
    pub fn entrance(&self) -> GridPos {
        GridPos::new(0, self.grid_cols() / 2)
    }

    /// `true` if some coordinate appears in both dedicated candidate sets.
    ///
    /// The allocator rejects such configs up front; the layout generator
    /// would otherwise have to pick a winner silently.
    pub fn dedicated_sets_overlap(&self) -> bool {
        self.ev_slots.iter().any(|p| self.truck_slots.contains(p))
    }
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            requested_rows: 4,
            requested_cols: 4,
            ev_slots:       DEFAULT_EV_SLOTS.to_vec(),
            truck_slots:    DEFAULT_TRUCK_SLOTS.to_vec(),
        }
    }
}
