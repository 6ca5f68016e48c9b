//! Routing-subsystem error type.

use thiserror::Error;

use lot_core::{GridPos, VehicleClass};

/// Errors produced by `lot-route`.  Both variants mean the same thing to a
/// caller requesting parking: there is no path to report.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no open {0} slot in the lot")]
    NoEligibleSlot(VehicleClass),

    #[error("no route from {from} to {to}")]
    Unreachable { from: GridPos, to: GridPos },
}

pub type RouteResult<T> = Result<T, RouteError>;
