//! Deterministic grid construction.
//!
//! The generated topology, for `grid_rows × grid_cols` (both odd):
//!
//! ```text
//! row 0:    all lane, entrance at the middle column
//! row 1:    all lane (buffer aisle beneath the entrance)
//! rows ≥ 2: slot iff the row AND the column are even, else lane
//! ```
//!
//! Dedicated candidates from the config are applied last.  A candidate that
//! survives clamping is registered in its set and its cell is forced to
//! `EmptySlot` — dedicated coordinates may sit off the even/even parity, and
//! the generator must guarantee they are slots regardless.
//!
//! Clamping drops candidates outside the grid and candidates on rows 0–1
//! (the entrance and its buffer aisle are never converted to slots).  A
//! candidate already claimed by the other dedicated set is dropped too, so
//! the sets stay disjoint.

use lot_core::{CellKind, GridPos, LotConfig};

use crate::LotGrid;

/// Build a fresh grid from `config`.  Pure: equal configs yield equal grids.
pub fn generate(config: &LotConfig) -> LotGrid {
    let rows = config.grid_rows();
    let cols = config.grid_cols();
    let entrance = config.entrance();

    let mut cells = vec![CellKind::Lane; (rows * cols) as usize];
    cells[(entrance.row * cols + entrance.col) as usize] = CellKind::Entrance;

    let mut slots = Vec::new();
    for row in 2..rows {
        if row % 2 != 0 {
            continue;
        }
        for col in (0..cols).step_by(2) {
            let pos = GridPos::new(row, col);
            cells[(row * cols + col) as usize] = CellKind::EmptySlot;
            slots.push(pos);
        }
    }

    let mut grid = LotGrid {
        rows,
        cols,
        cells,
        entrance,
        slots,
        ev_slots: Vec::new(),
        truck_slots: Vec::new(),
    };

    apply_dedicated(&mut grid, &config.ev_slots, Dedication::Ev);
    apply_dedicated(&mut grid, &config.truck_slots, Dedication::Truck);

    // Off-parity dedicated slots were appended out of order; the registry
    // must stay sorted for binary search.
    grid.slots.sort_unstable();
    grid.slots.dedup();

    grid
}

enum Dedication {
    Ev,
    Truck,
}

fn apply_dedicated(grid: &mut LotGrid, candidates: &[GridPos], which: Dedication) {
    for &pos in candidates {
        if !grid.in_bounds(pos) || pos.row < 2 {
            continue;
        }
        // At most one dedicated set per coordinate.
        if grid.ev_slots.contains(&pos) || grid.truck_slots.contains(&pos) {
            continue;
        }
        let idx = grid.index(pos);
        grid.cells[idx] = CellKind::EmptySlot;
        grid.slots.push(pos);
        match which {
            Dedication::Ev    => grid.ev_slots.push(pos),
            Dedication::Truck => grid.truck_slots.push(pos),
        }
    }
}
