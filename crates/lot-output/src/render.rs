//! Snapshot → text rendering.
//!
//! One character per cell, one line per grid row:
//!
//! | Glyph | Meaning                      |
//! |-------|------------------------------|
//! | `E`   | entrance                     |
//! | `.`   | lane                         |
//! | `P`   | open general slot            |
//! | `V`   | open EV slot                 |
//! | `T`   | open truck slot              |
//! | `X`   | blocked slot                 |
//! | `c`/`e`/`t` | parked car / EV / truck |
//! | `*`   | path trace (`render_with_path`) |

use lot_core::{CellKind, GridPos, VehicleClass};
use lot_grid::{CellView, Snapshot};
use lot_route::Path;

fn glyph(view: &CellView) -> char {
    match view.kind {
        CellKind::Entrance => 'E',
        CellKind::Lane     => '.',
        CellKind::Blocked  => 'X',
        CellKind::EmptySlot => match view.dedicated {
            Some(VehicleClass::Ev)    => 'V',
            Some(VehicleClass::Truck) => 'T',
            _                         => 'P',
        },
        CellKind::Occupied => match view.occupant {
            Some(VehicleClass::Car)   => 'c',
            Some(VehicleClass::Ev)    => 'e',
            Some(VehicleClass::Truck) => 't',
            // Occupied cell with no ledger entry: raw mutation outside the
            // allocator.  Render it visibly rather than guessing a class.
            None => '?',
        },
    }
}

/// Render the whole snapshot as text.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity((snapshot.rows() * (snapshot.cols() + 1)) as usize);
    for row in 0..snapshot.rows() {
        for col in 0..snapshot.cols() {
            out.push(glyph(snapshot.at(GridPos::new(row, col))));
        }
        out.push('\n');
    }
    out
}

/// Render the snapshot with `path` traced as `*`.
///
/// The final path cell keeps its own glyph so the destination slot (and its
/// occupant, if the snapshot was taken after the commit) stays visible.
pub fn render_with_path(snapshot: &Snapshot, path: &Path) -> String {
    let trace: &[GridPos] = match path.cells.split_last() {
        Some((_, rest)) => rest,
        None => &[],
    };
    let mut out = String::with_capacity((snapshot.rows() * (snapshot.cols() + 1)) as usize);
    for row in 0..snapshot.rows() {
        for col in 0..snapshot.cols() {
            let pos = GridPos::new(row, col);
            if trace.contains(&pos) {
                out.push('*');
            } else {
                out.push(glyph(snapshot.at(pos)));
            }
        }
        out.push('\n');
    }
    out
}
