//! `lot-alloc` — the parking lot's mutation surface.
//!
//! Everything that changes a lot goes through this crate: parking requests
//! (routed via `lot-route` and committed to the grid), per-cell toggles, and
//! resets.  The [`Session`] driver applies a stream of commands and reports
//! each outcome through [`LotObserver`] hooks.
//!
//! # Crate layout
//!
//! | Module       | Contents                                         |
//! |--------------|--------------------------------------------------|
//! | [`lot`]      | `ParkingLot`, `Allocation`, `ToggleOutcome`      |
//! | [`session`]  | `Command`, `Session` — command stream driver     |
//! | [`observer`] | `LotObserver` trait, `NoopObserver`              |
//! | [`error`]    | `AllocError`, `AllocResult<T>`                   |

pub mod error;
pub mod lot;
pub mod observer;
pub mod session;


pub use error::{AllocError, AllocResult};
pub use lot::{Allocation, ParkingLot, ToggleOutcome};
pub use observer::{LotObserver, NoopObserver};
pub use session::{Command, Session};
