//! `LotOutputObserver<W>` — bridges `LotObserver` to an `OutputWriter`.

use lot_alloc::{Allocation, LotObserver, ToggleOutcome};
use lot_core::{GridPos, VehicleClass};
use lot_grid::{LotGrid, VehicleLedger};
use lot_route::RouteError;

use crate::row::{CellRow, EventRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`LotObserver`] that writes one event row per command and a full cell
/// dump every `cell_interval` commands, to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the session finishes, check for errors with
/// [`take_error`][Self::take_error].
pub struct LotOutputObserver<W: OutputWriter> {
    writer:        W,
    /// Dump the full grid every N commands; 0 disables dumps.
    cell_interval: u64,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> LotOutputObserver<W> {
    pub fn new(writer: W, cell_interval: u64) -> Self {
        Self { writer, cell_interval, last_error: None }
    }

    /// Take the stored write error (if any) after the session finishes.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the backend and unwrap it (e.g. to inspect files afterwards).
    pub fn finish(mut self) -> (W, Option<OutputError>) {
        let result = self.writer.finish();
        self.store_err(result);
        (self.writer, self.last_error)
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn event(&mut self, row: EventRow) {
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }
}

impl<W: OutputWriter> LotObserver for LotOutputObserver<W> {
    fn on_parked(&mut self, seq: u64, alloc: &Allocation) {
        self.event(EventRow {
            seq,
            event:        "parked",
            class:        alloc.class.as_str(),
            row:          Some(alloc.position.row),
            col:          Some(alloc.position.col),
            travel_steps: Some(alloc.travel_steps),
            path_cost:    Some(alloc.path.cost),
        });
    }

    fn on_rejected(&mut self, seq: u64, class: VehicleClass, _why: &RouteError) {
        self.event(EventRow {
            seq,
            event:        "rejected",
            class:        class.as_str(),
            row:          None,
            col:          None,
            travel_steps: None,
            path_cost:    None,
        });
    }

    fn on_toggled(&mut self, seq: u64, pos: GridPos, outcome: ToggleOutcome) {
        let (event, class) = match outcome {
            ToggleOutcome::Departed(class) => ("departed", class.as_str()),
            ToggleOutcome::Closed          => ("closed", ""),
            ToggleOutcome::Reopened        => ("reopened", ""),
            ToggleOutcome::Unchanged       => ("ignored", ""),
        };
        self.event(EventRow {
            seq,
            event,
            class,
            row:          Some(pos.row),
            col:          Some(pos.col),
            travel_steps: None,
            path_cost:    None,
        });
    }

    fn on_reset(&mut self, seq: u64) {
        self.event(EventRow {
            seq,
            event:        "reset",
            class:        "",
            row:          None,
            col:          None,
            travel_steps: None,
            path_cost:    None,
        });
    }

    fn on_applied(&mut self, seq: u64, grid: &LotGrid, ledger: &VehicleLedger) {
        if self.cell_interval == 0 || seq % self.cell_interval != 0 {
            return;
        }
        let mut rows = Vec::with_capacity((grid.rows() * grid.cols()) as usize);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let pos = GridPos::new(row, col);
                let Ok(kind) = grid.kind(pos) else {
                    continue;
                };
                rows.push(CellRow {
                    seq,
                    row,
                    col,
                    kind:      kind.as_str(),
                    dedicated: grid.dedication(pos).map(VehicleClass::as_str).unwrap_or(""),
                    occupant:  ledger.occupant(pos).map(VehicleClass::as_str).unwrap_or(""),
                });
            }
        }
        let result = self.writer.write_cells(&rows);
        self.store_err(result);
    }
}
