//! Grid coordinate type and distance helpers.
//!
//! `GridPos` addresses cells as `(row, col)` with `u32` components.  The
//! derived `Ord` is row-major, which every tie-break in the engine relies on:
//! sorting positions, picking the first of several equally-near slots, and
//! ordering equal-priority frontier entries all resolve the same way.

use std::fmt;

/// A cell address in the parking grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub row: u32,
    pub col: u32,
}

impl GridPos {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance to `other`.
    ///
    /// This is the search heuristic: with orthogonal moves that cost at least
    /// one each, it never overestimates the true path cost.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The cell one step away in direction `(d_row, d_col)`, or `None` if the
    /// step would leave the non-negative quadrant.
    ///
    /// Upper-bound checks are the grid's job; this only guards underflow.
    #[inline]
    pub fn step(self, d_row: i32, d_col: i32) -> Option<GridPos> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Some(GridPos { row, col })
    }

    /// The four orthogonal neighbor candidates (right, down, left, up).
    ///
    /// Candidates that would underflow are skipped; out-of-grid candidates on
    /// the high side are returned and must be bounds-checked by the caller.
    pub fn orthogonal(self) -> impl Iterator<Item = GridPos> {
        [(0, 1), (1, 0), (0, -1), (-1, 0)]
            .into_iter()
            .filter_map(move |(dr, dc)| self.step(dr, dc))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
