//! `lot-output` — event logging and rendering for lot sessions.
//!
//! The engine proper never touches a file or a screen; this crate is the
//! thin collaborator that turns observer callbacks into CSV rows and
//! snapshots into text.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`row`]      | `EventRow`, `CellRow` — plain data rows             |
//! | [`writer`]   | `OutputWriter` trait                                |
//! | [`csv`]      | `CsvWriter` — `events.csv` + `cells.csv`            |
//! | [`observer`] | `LotOutputObserver<W>` — bridges `LotObserver`      |
//! | [`render`]   | snapshot → text, with optional path trace           |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                    |

pub mod csv;
pub mod error;
pub mod observer;
pub mod render;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::LotOutputObserver;
pub use render::{render, render_with_path};
pub use row::{CellRow, EventRow};
pub use writer::OutputWriter;
