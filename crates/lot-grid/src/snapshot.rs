//! Render-ready copy of the grid for presentation layers.
//!
//! The engine never renders; it hands a `Snapshot` to whatever collaborator
//! draws the lot (text renderer, GUI, JSON-over-the-wire).  A snapshot is a
//! plain value detached from the live grid, so the caller may hold it across
//! later mutations.

use lot_core::{CellKind, GridPos, VehicleClass};

use crate::{LotGrid, VehicleLedger};

/// Everything a renderer needs to know about one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellView {
    /// Current cell state.
    pub kind: CellKind,
    /// The class this slot is dedicated to, if any.
    pub dedicated: Option<VehicleClass>,
    /// The class parked here (`kind == Occupied` only).
    pub occupant: Option<VehicleClass>,
}

/// A full-grid snapshot, row-major like the grid itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    rows:  u32,
    cols:  u32,
    cells: Vec<CellView>,
}

impl Snapshot {
    /// Capture the current state of `grid` and `ledger`.
    pub fn capture(grid: &LotGrid, ledger: &VehicleLedger) -> Self {
        let mut cells = Vec::with_capacity((grid.rows() * grid.cols()) as usize);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let pos = GridPos::new(row, col);
                cells.push(CellView {
                    kind:      grid.cells[grid.index(pos)],
                    dedicated: grid.dedication(pos),
                    occupant:  ledger.occupant(pos),
                });
            }
        }
        Self { rows: grid.rows(), cols: grid.cols(), cells }
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// The view of the cell at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is outside the snapshot (snapshots are only indexed
    /// with coordinates produced from their own dimensions).
    pub fn at(&self, pos: GridPos) -> &CellView {
        &self.cells[(pos.row * self.cols + pos.col) as usize]
    }

    /// Iterate all cells row-major with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &CellView)> {
        self.cells.iter().enumerate().map(|(i, view)| {
            (GridPos::new(i as u32 / self.cols, i as u32 % self.cols), view)
        })
    }
}
