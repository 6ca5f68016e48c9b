//! Cell state enum shared across all grid-related crates.
//!
//! A cell's *identity* (slot vs. aisle) is fixed by the layout generator and
//! tracked separately in the grid's slot registry; `CellKind` only records the
//! current *state*.  Slot cells cycle among `EmptySlot`/`Occupied`/`Blocked`
//! and never become `Lane` or `Entrance`.

/// The current state of one grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Drivable aisle cell (default state).
    #[default]
    Lane,
    /// The single fixed entry point of the lot.
    Entrance,
    /// A parking slot with nothing in it.
    EmptySlot,
    /// A parking slot holding a vehicle.
    Occupied,
    /// A parking slot manually taken out of service.
    Blocked,
}

impl CellKind {
    /// `true` if a vehicle may drive through this cell.
    ///
    /// Empty slots are traversable (at a higher step cost); occupied and
    /// blocked cells are walls for the pathfinder.
    #[inline]
    pub fn is_traversable(self) -> bool {
        matches!(self, CellKind::Lane | CellKind::Entrance | CellKind::EmptySlot)
    }

    /// `true` if a vehicle may come to rest here right now.
    #[inline]
    pub fn is_open_slot(self) -> bool {
        matches!(self, CellKind::EmptySlot)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            CellKind::Lane      => "lane",
            CellKind::Entrance  => "entrance",
            CellKind::EmptySlot => "empty",
            CellKind::Occupied  => "occupied",
            CellKind::Blocked   => "blocked",
        }
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
