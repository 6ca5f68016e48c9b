//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv` — one row per command outcome
//! - `cells.csv` — periodic full-grid dumps

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CellRow, EventRow, OutputResult};

/// Writes session output to two CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    cells:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["seq", "event", "class", "row", "col", "travel_steps", "path_cost"])?;

        let mut cells = Writer::from_path(dir.join("cells.csv"))?;
        cells.write_record(["seq", "row", "col", "kind", "dedicated", "occupant"])?;

        Ok(Self { events, cells, finished: false })
    }
}

/// Empty string for `None`, decimal digits otherwise.
fn opt_u32(v: Option<u32>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.seq.to_string(),
            row.event.to_string(),
            row.class.to_string(),
            opt_u32(row.row),
            opt_u32(row.col),
            opt_u32(row.travel_steps),
            opt_u32(row.path_cost),
        ])?;
        Ok(())
    }

    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()> {
        for row in rows {
            self.cells.write_record(&[
                row.seq.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                row.kind.to_string(),
                row.dedicated.to_string(),
                row.occupant.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.cells.flush()?;
        Ok(())
    }
}
