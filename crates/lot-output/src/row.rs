//! Plain data row types written by output backends.

/// One command outcome.
///
/// `class`, `row`/`col`, and the step/cost pair are only present where the
/// event carries them (a reset has none of the three).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub seq:          u64,
    /// "parked", "rejected", "departed", "closed", "reopened", "ignored",
    /// or "reset".
    pub event:        &'static str,
    /// Vehicle class label, empty when the event has no vehicle.
    pub class:        &'static str,
    /// Target cell, absent for resets and rejections.
    pub row:          Option<u32>,
    pub col:          Option<u32>,
    /// Moves taken, parked events only.
    pub travel_steps: Option<u32>,
    /// Weighted path cost, parked events only.
    pub path_cost:    Option<u32>,
}

/// One cell of a periodic grid dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRow {
    /// Sequence number of the command after which the dump was taken.
    pub seq:       u64,
    pub row:       u32,
    pub col:       u32,
    pub kind:      &'static str,
    /// Dedicated class label, empty for general slots and non-slots.
    pub dedicated: &'static str,
    /// Occupant class label, empty when the cell holds no vehicle.
    pub occupant:  &'static str,
}
