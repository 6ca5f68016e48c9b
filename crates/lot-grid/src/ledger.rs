//! The vehicle ledger: which class is parked where.
//!
//! A coordinate appears here iff its cell state is `Occupied`.  The
//! allocator maintains that invariant: entries are created only by a
//! successful parking commit and removed only by toggling the occupied cell.

use std::collections::HashMap;

use lot_core::{GridPos, VehicleClass};

/// Mapping from occupied slot coordinate to the parked vehicle's class.
#[derive(Clone, Debug, Default)]
pub struct VehicleLedger {
    occupants: HashMap<GridPos, VehicleClass>,
}

impl VehicleLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a vehicle of `class` parked at `pos`.
    ///
    /// Returns the previous occupant if the coordinate was already recorded
    /// (the allocator never lets that happen).
    pub fn park(&mut self, pos: GridPos, class: VehicleClass) -> Option<VehicleClass> {
        self.occupants.insert(pos, class)
    }

    /// Remove and return the vehicle parked at `pos`, if any.
    pub fn depart(&mut self, pos: GridPos) -> Option<VehicleClass> {
        self.occupants.remove(&pos)
    }

    /// The class parked at `pos`, if any.
    pub fn occupant(&self, pos: GridPos) -> Option<VehicleClass> {
        self.occupants.get(&pos).copied()
    }

    /// Number of parked vehicles.
    pub fn count(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Iterate `(position, class)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, VehicleClass)> + '_ {
        self.occupants.iter().map(|(&p, &c)| (p, c))
    }
}
