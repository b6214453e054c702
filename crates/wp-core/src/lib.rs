//! `wp-core` — foundational value types for the waysim mock-route framework.
//!
//! This crate is a dependency of every other `wp-*` crate.  It intentionally
//! has no `wp-*` dependencies and no mandatory external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`geo`]   | `GeoPoint`, haversine distance, linear lerp       |
//! | [`speed`] | `Speed` — travel speed value type                 |
//! | [`time`]  | `Clock` trait, `SystemClock`, `ManualClock`       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |
//!           | Required by `wp-route`'s slot store.                |

pub mod geo;
pub mod speed;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use speed::Speed;
pub use time::{Clock, ManualClock, SystemClock};
