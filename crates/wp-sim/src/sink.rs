//! Consumer-side interface for emitted positions.

use thiserror::Error;

use wp_core::GeoPoint;

/// Error a sink may raise when it cannot accept a position — for example a
/// revoked mock-location permission or a disabled test provider.
///
/// A sink error halts the session: the scheduler does not retry, since a
/// persistently failing sink should stop the traversal rather than spin.
#[derive(Debug, Clone, Error)]
#[error("sink unavailable: {reason}")]
pub struct SinkError {
    pub reason: String,
}

impl SinkError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Receives the positions a traversal produces.
///
/// The scheduler calls [`emit`][Self::emit] at most once per tick, in
/// chronological order.  For a traversal that runs to completion, the very
/// last call carries the path's exact final waypoint and `is_final = true` —
/// never an interpolated approximation — so consumers relying on arrival
/// precision see the true endpoint regardless of tick granularity.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: `emit` is called from the
/// scheduler's driver task, which may not be the thread that built the sink.
pub trait LocationSink: Send + Sync {
    /// Accept one position.  `timestamp_ms` is Unix wall-clock milliseconds.
    fn emit(&self, position: GeoPoint, timestamp_ms: u64, is_final: bool) -> Result<(), SinkError>;
}

/// A [`LocationSink`] that discards every position.  Use when only the
/// traversal's timing side effects matter.
pub struct NoopSink;

impl LocationSink for NoopSink {
    fn emit(&self, _position: GeoPoint, _timestamp_ms: u64, _is_final: bool) -> Result<(), SinkError> {
        Ok(())
    }
}
