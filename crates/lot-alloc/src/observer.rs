//! Observer trait for command outcomes.
//!
//! All methods have default no-op implementations so implementors only need
//! to override what they care about.
//!
//! # Example — console reporter
//!
//! ```rust,ignore
//! struct Console;
//!
//! impl LotObserver for Console {
//!     fn on_parked(&mut self, seq: u64, alloc: &Allocation) {
//!         println!("#{seq}: {} parked at {} ({} moves)",
//!                  alloc.class, alloc.position, alloc.travel_steps);
//!     }
//! }
//! ```

use lot_core::{GridPos, VehicleClass};
use lot_grid::{LotGrid, VehicleLedger};
use lot_route::RouteError;

use crate::{Allocation, ToggleOutcome};

/// Callbacks invoked by [`Session::apply`][crate::Session::apply] after each
/// command.
pub trait LotObserver {
    /// A parking request succeeded.
    fn on_parked(&mut self, _seq: u64, _alloc: &Allocation) {}

    /// A parking request found no path; the lot is unchanged.
    fn on_rejected(&mut self, _seq: u64, _class: VehicleClass, _why: &RouteError) {}

    /// A toggle ran (including the no-op outcomes).
    fn on_toggled(&mut self, _seq: u64, _pos: GridPos, _outcome: ToggleOutcome) {}

    /// The lot was rebuilt from its config.
    fn on_reset(&mut self, _seq: u64) {}

    /// Called after every command, whatever its outcome, with read access to
    /// the post-command state.  Renderers redraw from here.
    fn on_applied(&mut self, _seq: u64, _grid: &LotGrid, _ledger: &VehicleLedger) {}
}

/// A [`LotObserver`] that does nothing.  Use when you need to drive a
/// session but don't want callbacks.
pub struct NoopObserver;

impl LotObserver for NoopObserver {}
