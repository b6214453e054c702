//! `wp-route` — waypoint paths, segment planning, and path persistence.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`path`]    | `Path` — ordered, mutable waypoint sequence               |
//! | [`segment`] | `Segment` — derived per-leg distance/duration             |
//! | [`store`]   | `PathStore` trait + `JsonSlotStore` file implementation   |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                            |
//!
//! # Editing contract
//!
//! A `Path` handed to a running `MovementScheduler` session must not be
//! edited until the session is stopped.  The scheduler snapshots the
//! waypoints at `start`, so a violation cannot corrupt the in-flight
//! traversal — but the caller's view and the emitted positions will
//! disagree.  Front ends should route every append/clear through a
//! stop-first code path.

pub mod error;
pub mod path;
pub mod segment;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use path::Path;
pub use segment::Segment;
pub use store::{JsonSlotStore, PathStore};
