//! Routing trait and default A* implementation.
//!
//! # Pluggability
//!
//! The allocator calls routing via the [`Planner`] trait, so applications can
//! swap in custom implementations (exhaustive minimum-cost target selection,
//! congestion-aware costs) without touching the engine core.  The default
//! [`AStarPlanner`] is sufficient for interactive lots.
//!
//! # Cost model
//!
//! Moving into a lane or the entrance costs 1; moving into an empty slot
//! costs 2, which discourages cutting through parking rows as a
//! thoroughfare.  Occupied and blocked cells are walls.  The Manhattan
//! heuristic never exceeds the remaining cost under this model, so the first
//! expansion of the target yields an optimal-cost path.
//!
//! # Target selection
//!
//! [`nearest_open_slot`] picks the eligible empty slot with minimum Manhattan
//! distance to the start — a heuristic proxy for "nearest", not a minimum
//! over true path costs.  If that slot turns out to be unreachable the
//! request fails; there is no fallback to the next-nearest slot.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use lot_core::{CellKind, GridPos, VehicleClass};
use lot_grid::{policy, LotGrid};

use crate::{Path, RouteError, RouteResult};

#[cfg(feature = "fx-hash")]
type PosMap<V> = rustc_hash::FxHashMap<GridPos, V>;
#[cfg(not(feature = "fx-hash"))]
type PosMap<V> = std::collections::HashMap<GridPos, V>;

/// Cost of moving into a lane or entrance cell.
pub const LANE_STEP_COST: u32 = 1;

/// Cost of moving into an empty slot cell.
pub const SLOT_STEP_COST: u32 = 2;

// ── Planner trait ─────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a lot can be handed between
/// threads behind an external lock.
pub trait Planner: Send + Sync {
    /// Compute a minimum-cost path from `start` to `goal` over traversable
    /// cells.
    ///
    /// `start == goal` yields the trivial one-cell path at cost 0.
    fn plan(&self, grid: &LotGrid, start: GridPos, goal: GridPos) -> RouteResult<Path>;

    /// Select a target slot for `class` and route to it.
    ///
    /// The default implementation picks the nearest eligible open slot by
    /// Manhattan distance and plans to exactly that slot.
    fn plan_to_slot(
        &self,
        grid: &LotGrid,
        start: GridPos,
        class: VehicleClass,
    ) -> RouteResult<Path> {
        let goal = nearest_open_slot(grid, start, class)?;
        self.plan(grid, start, goal)
    }
}

/// The eligible open slot nearest to `start` by Manhattan distance.
///
/// Ties break row-major, which matches a row-major scan keeping its first
/// minimum.
pub fn nearest_open_slot(
    grid: &LotGrid,
    start: GridPos,
    class: VehicleClass,
) -> RouteResult<GridPos> {
    policy::open_slots(grid, class)
        .min_by_key(|&pos| (pos.manhattan(start), pos))
        .ok_or(RouteError::NoEligibleSlot(class))
}

// ── AStarPlanner ──────────────────────────────────────────────────────────────

/// Best-first search over the 4-connected grid with the Manhattan heuristic.
pub struct AStarPlanner;

impl Planner for AStarPlanner {
    fn plan(&self, grid: &LotGrid, start: GridPos, goal: GridPos) -> RouteResult<Path> {
        astar(grid, start, goal)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Cost of stepping into a cell of the given state.
#[inline]
fn step_cost(kind: CellKind) -> u32 {
    if kind.is_open_slot() { SLOT_STEP_COST } else { LANE_STEP_COST }
}

fn astar(grid: &LotGrid, start: GridPos, goal: GridPos) -> RouteResult<Path> {
    if start == goal {
        return Ok(Path { cells: vec![start], cost: 0 });
    }

    // best[p] = cheapest known cost from start to p.
    let mut best: PosMap<u32> = PosMap::default();
    // prev[p] = predecessor of p on the cheapest known walk; start has none.
    let mut prev: PosMap<GridPos> = PosMap::default();
    best.insert(start, 0);

    // Min-heap on (cost + heuristic, position).  Reverse makes BinaryHeap
    // (max) behave as min-heap; secondary key GridPos gives deterministic
    // tie-breaking among equal-priority entries.
    let mut frontier: BinaryHeap<Reverse<(u32, GridPos)>> = BinaryHeap::new();
    frontier.push(Reverse((start.manhattan(goal), start)));

    while let Some(Reverse((priority, pos))) = frontier.pop() {
        if pos == goal {
            // The heuristic is zero at the goal, so priority == true cost.
            return Ok(reconstruct(&prev, goal, priority));
        }

        let cost = best.get(&pos).copied().unwrap_or(u32::MAX);
        // Skip stale heap entries superseded by a cheaper rediscovery.
        if priority > cost.saturating_add(pos.manhattan(goal)) {
            continue;
        }

        for next in pos.orthogonal() {
            if !grid.is_traversable(next) {
                continue;
            }
            let Ok(kind) = grid.kind(next) else {
                continue;
            };
            let new_cost = cost.saturating_add(step_cost(kind));
            if new_cost < best.get(&next).copied().unwrap_or(u32::MAX) {
                best.insert(next, new_cost);
                prev.insert(next, pos);
                frontier.push(Reverse((new_cost + next.manhattan(goal), next)));
            }
        }
    }

    Err(RouteError::Unreachable { from: start, to: goal })
}

fn reconstruct(prev: &PosMap<GridPos>, goal: GridPos, cost: u32) -> Path {
    let mut cells = vec![goal];
    let mut cur = goal;
    while let Some(&p) = prev.get(&cur) {
        cells.push(p);
        cur = p;
    }
    cells.reverse();
    Path { cells, cost }
}
