//! The `ParkingLot` facade: owned grid + ledger + planner.
//!
//! # Mutation discipline
//!
//! The lot is exclusively owned and every operation takes `&mut self`, so
//! all mutation is serialized by construction.  A parking request commits
//! its side effects (cell state + ledger entry) only after the planner
//! succeeds; a failed request leaves the lot untouched.

use lot_core::{CellKind, GridPos, LotConfig, VehicleClass};
use lot_grid::{layout, LotGrid, Snapshot, VehicleLedger};
use lot_route::{AStarPlanner, Path, Planner};

use crate::{AllocError, AllocResult};

/// The result of a successful parking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// The class that was parked.
    pub class: VehicleClass,
    /// The slot the vehicle ended up in.
    pub position: GridPos,
    /// Full route from the entrance to `position`, inclusive.
    pub path: Path,
    /// Moves taken, excluding the starting cell.
    pub travel_steps: u32,
}

/// What a toggle did to its cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// An occupied slot was vacated; the parked class left the lot.
    Departed(VehicleClass),
    /// An empty slot was taken out of service.
    Closed,
    /// A blocked slot was returned to service.
    Reopened,
    /// Lanes and the entrance are not toggleable.
    Unchanged,
}

/// A parking lot session: grid, vehicle ledger, and routing strategy.
///
/// Create with [`ParkingLot::new`] for the default A* planner, or
/// [`with_planner`](ParkingLot::with_planner) to substitute routing.
pub struct ParkingLot<P: Planner = AStarPlanner> {
    config:  LotConfig,
    grid:    LotGrid,
    ledger:  VehicleLedger,
    planner: P,
}

impl ParkingLot<AStarPlanner> {
    /// Build a fresh lot from `config` with the default planner.
    pub fn new(config: LotConfig) -> AllocResult<Self> {
        Self::with_planner(config, AStarPlanner)
    }
}

impl<P: Planner> ParkingLot<P> {
    /// Build a fresh lot from `config` with a caller-supplied planner.
    pub fn with_planner(config: LotConfig, planner: P) -> AllocResult<Self> {
        if config.dedicated_sets_overlap() {
            return Err(AllocError::Config(
                "EV and truck dedicated slot sets overlap".into(),
            ));
        }
        let grid = layout::generate(&config);
        Ok(Self {
            config,
            grid,
            ledger: VehicleLedger::new(),
            planner,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn grid(&self) -> &LotGrid {
        &self.grid
    }

    pub fn ledger(&self) -> &VehicleLedger {
        &self.ledger
    }

    pub fn config(&self) -> &LotConfig {
        &self.config
    }

    /// The fixed entrance every request starts from.
    pub fn entrance(&self) -> GridPos {
        self.grid.entrance()
    }

    /// Render-ready copy of the current lot state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.grid, &self.ledger)
    }

    // ── Operations ────────────────────────────────────────────────────────

    /// Route a vehicle of `class` from the entrance to the nearest eligible
    /// open slot and park it there.
    ///
    /// On failure (`NoEligibleSlot` or `Unreachable`) the grid and ledger
    /// are left exactly as they were.
    pub fn request_parking(&mut self, class: VehicleClass) -> AllocResult<Allocation> {
        let start = self.grid.entrance();
        let path = self.planner.plan_to_slot(&self.grid, start, class)?;
        let position = path.target();

        self.grid.set_kind(position, CellKind::Occupied)?;
        self.ledger.park(position, class);

        let travel_steps = path.travel_steps();
        Ok(Allocation { class, position, path, travel_steps })
    }

    /// Cycle the state of one cell.
    ///
    /// Ledger first: a cell with a parked vehicle empties out regardless of
    /// anything else.  Then empty slots close, blocked slots reopen, and
    /// everything else (lanes, the entrance) is left alone.
    pub fn toggle(&mut self, pos: GridPos) -> AllocResult<ToggleOutcome> {
        let kind = self.grid.kind(pos)?;

        if let Some(class) = self.ledger.depart(pos) {
            self.grid.set_kind(pos, CellKind::EmptySlot)?;
            return Ok(ToggleOutcome::Departed(class));
        }

        let outcome = match kind {
            CellKind::EmptySlot => {
                self.grid.set_kind(pos, CellKind::Blocked)?;
                ToggleOutcome::Closed
            }
            CellKind::Blocked => {
                self.grid.set_kind(pos, CellKind::EmptySlot)?;
                ToggleOutcome::Reopened
            }
            CellKind::Lane | CellKind::Entrance | CellKind::Occupied => ToggleOutcome::Unchanged,
        };
        Ok(outcome)
    }

    /// Discard all state and rebuild the lot from its config.
    pub fn reset(&mut self) {
        self.grid = layout::generate(&self.config);
        self.ledger = VehicleLedger::new();
    }
}
