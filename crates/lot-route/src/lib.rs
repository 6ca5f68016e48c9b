//! `lot-route` — weighted shortest-path routing to parking slots.
//!
//! # Crate layout
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`path`]    | `Path` — ordered cells plus total weighted cost   |
//! | [`planner`] | `Planner` trait, `AStarPlanner`, target selection |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                    |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                              |
//! |-----------|-----------------------------------------------------|
//! | `fx-hash` | FxHash maps in the search's inner loop.             |

pub mod error;
pub mod path;
pub mod planner;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use path::Path;
pub use planner::{nearest_open_slot, AStarPlanner, Planner};
