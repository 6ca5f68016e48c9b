//! Vehicle class enum consumed by the eligibility policy and allocator.
//!
//! A closed enumeration: every consumer matches exhaustively, so an
//! unrecognized class cannot exist at runtime.

/// The class of a vehicle requesting (or holding) a slot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleClass {
    /// Regular car — parks only in general (non-dedicated) slots.
    Car,
    /// Electric vehicle — parks only in EV-dedicated slots.
    Ev,
    /// Truck — parks only in truck-dedicated slots.
    Truck,
}

impl VehicleClass {
    /// All classes, in a fixed order.  Handy for demos and tests.
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Car, VehicleClass::Ev, VehicleClass::Truck];

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleClass::Car   => "car",
            VehicleClass::Ev    => "ev",
            VehicleClass::Truck => "truck",
        }
    }
}

impl std::fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
