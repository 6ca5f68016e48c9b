//! The `OutputWriter` trait implemented by backend writers.

use crate::{CellRow, EventRow, OutputResult};

/// Sink for session output rows.
///
/// Errors are surfaced to [`LotOutputObserver`][crate::LotOutputObserver],
/// which buffers the first one because observer hooks have no return value.
pub trait OutputWriter {
    /// Write one event row.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Write a batch of cell rows (one full grid dump).
    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
