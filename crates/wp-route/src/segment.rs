//! Per-leg segment planning.

use wp_core::{GeoPoint, Speed};

/// One leg of a traversal: two consecutive waypoints plus the derived
/// distance and travel duration at a given speed.
///
/// Segments are always derived, never stored in a [`Path`][crate::Path] —
/// the scheduler plans each one lazily on entry, so a speed applies to the
/// whole traversal without any precomputed table to invalidate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: GeoPoint,
    pub end: GeoPoint,
    /// Great-circle length of this leg, metres.
    pub distance_m: f64,
    /// Travel time at the planned speed, milliseconds (rounded).
    pub duration_ms: u64,
}

impl Segment {
    /// Plan the leg from `start` to `end` at `speed`.
    ///
    /// `speed` must be strictly positive — `MovementScheduler::start`
    /// validates that before any planning.  A zero-length leg (two identical
    /// consecutive waypoints) yields `duration_ms == 0` and is skipped
    /// instantly by the traversal loop.
    pub fn plan(start: GeoPoint, end: GeoPoint, speed: Speed) -> Segment {
        let distance_m = start.distance_m(end);
        let duration_ms = (distance_m / speed.mps() * 1000.0).round() as u64;
        Segment { start, end, distance_m, duration_ms }
    }
}
