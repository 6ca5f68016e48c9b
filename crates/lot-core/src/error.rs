//! Engine-wide base error type.
//!
//! Sub-crates define their own error enums and either convert `LotError` into
//! them via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::GridPos;

/// The base error type for `lot-core` and the grid accessors built on it.
#[derive(Debug, Error)]
pub enum LotError {
    #[error("position {pos} outside the {rows}x{cols} grid")]
    OutOfBounds { pos: GridPos, rows: u32, cols: u32 },
}

/// Shorthand result type for grid-level operations.
pub type LotResult<T> = Result<T, LotError>;
