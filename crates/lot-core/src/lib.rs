//! `lot-core` — foundational types for the `rust_lot` parking engine.
//!
//! This crate is a dependency of every other `lot-*` crate.  It intentionally
//! has no `lot-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                      |
//! |-------------|-----------------------------------------------|
//! | [`pos`]     | `GridPos`, Manhattan distance, checked steps  |
//! | [`cell`]    | `CellKind` enum                               |
//! | [`vehicle`] | `VehicleClass` enum                           |
//! | [`config`]  | `LotConfig` and derived grid dimensions       |
//! | [`error`]   | `LotError`, `LotResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod config;
pub mod error;
pub mod pos;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::CellKind;
pub use config::LotConfig;
pub use error::{LotError, LotResult};
pub use pos::GridPos;
pub use vehicle::VehicleClass;
