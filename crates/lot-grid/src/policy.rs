//! Per-class slot eligibility.
//!
//! Dedicated slots are exclusive to their class and general slots are
//! exclusive to cars — there is no fallback.  An EV is never routed to a
//! general or truck slot even when every EV slot is taken.
//!
//! Together with the disjointness of the dedicated sets this makes
//! eligibility a partition: every slot cell is eligible for exactly one
//! vehicle class.

use lot_core::{GridPos, VehicleClass};

use crate::LotGrid;

/// `true` if a vehicle of `class` may occupy the slot at `pos`.
///
/// Only meaningful for slot cells; callers pre-filter by cell state.
pub fn is_eligible(grid: &LotGrid, pos: GridPos, class: VehicleClass) -> bool {
    match class {
        VehicleClass::Ev    => grid.dedication(pos) == Some(VehicleClass::Ev),
        VehicleClass::Truck => grid.dedication(pos) == Some(VehicleClass::Truck),
        VehicleClass::Car   => grid.dedication(pos).is_none(),
    }
}

/// All currently-empty slots a vehicle of `class` may take, in row-major
/// order.
pub fn open_slots<'a>(
    grid: &'a LotGrid,
    class: VehicleClass,
) -> impl Iterator<Item = GridPos> + 'a {
    grid.slot_cells()
        .iter()
        .copied()
        .filter(move |&pos| {
            grid.kind(pos).is_ok_and(|k| k.is_open_slot()) && is_eligible(grid, pos, class)
        })
}
