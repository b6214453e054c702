//! Clock abstraction for the movement scheduler.
//!
//! # Design
//!
//! Traversal timing runs against a **monotonic** millisecond counter, never
//! wall-clock time, so an NTP step or a manual system-time change cannot
//! stretch or compress a session.  Wall-clock time appears in exactly one
//! place: the timestamp attached to each emitted position, which downstream
//! location consumers expect in Unix milliseconds.
//!
//! The seam is a trait so the traversal state machine can be driven by a
//! hand-advanced clock in tests; production code uses [`SystemClock`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Time source consumed by the scheduler.
///
/// Implementations must be `Send + Sync`; the driver task and control
/// handles may live on different threads.
pub trait Clock: Send + Sync {
    /// Monotonic milliseconds since an arbitrary fixed origin.
    ///
    /// Successive calls never decrease.  The origin is meaningless; only
    /// differences are used.
    fn now_ms(&self) -> u64;

    /// Wall-clock Unix timestamp in milliseconds, for emitted positions.
    fn unix_ms(&self) -> u64;
}

// ── SystemClock ───────────────────────────────────────────────────────────────

/// The production clock: `Instant` for monotonic time, `SystemTime` for
/// emission timestamps.
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn unix_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0) // pre-1970 system clock; timestamp is best-effort
    }
}

// ── ManualClock ───────────────────────────────────────────────────────────────

/// A hand-advanced clock for deterministic tests.
///
/// `now_ms` returns whatever was last set; `unix_ms` mirrors it so emitted
/// timestamps are predictable too.
#[derive(Debug, Default)]
pub struct ManualClock {
    ms: AtomicU64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { ms: AtomicU64::new(start_ms) }
    }

    /// Move the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: u64) {
        self.ms.fetch_add(delta_ms, Ordering::SeqCst);
    }

    /// Set the clock to an absolute value.  Must not move backwards.
    pub fn set(&self, ms: u64) {
        self.ms.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_ms(&self) -> u64 {
        self.ms.load(Ordering::SeqCst)
    }

    #[inline]
    fn unix_ms(&self) -> u64 {
        self.now_ms()
    }
}
