//! `lot-grid` — the parking grid model and its construction rules.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`grid`]     | `LotGrid`: cell state, entrance, slot/dedicated registry |
//! | [`layout`]   | `generate` — deterministic grid construction            |
//! | [`policy`]   | per-class slot eligibility                              |
//! | [`ledger`]   | `VehicleLedger`: occupied cell → vehicle class          |
//! | [`snapshot`] | render-ready copy of grid + occupants                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.   |

pub mod grid;
pub mod layout;
pub mod ledger;
pub mod policy;
pub mod snapshot;


pub use grid::LotGrid;
pub use ledger::VehicleLedger;
pub use snapshot::{CellView, Snapshot};
