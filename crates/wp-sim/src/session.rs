//! Session status and the pure traversal state machine.

use std::sync::atomic::{AtomicU8, Ordering};

use wp_core::{GeoPoint, Speed};
use wp_route::Segment;

// ── SessionStatus ─────────────────────────────────────────────────────────────

/// Lifecycle of one movement session.
///
/// ```text
/// Idle → Running → Completed   (path exhausted)
///               ↘  Stopped     (cancelled, or sink failure)
/// ```
///
/// `Completed` and `Stopped` are terminal; a new `start` call creates a
/// fresh session rather than reviving an old one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Running,
    Completed,
    Stopped,
}

impl SessionStatus {
    /// `true` for `Completed` and `Stopped`.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Stopped)
    }

    fn as_u8(self) -> u8 {
        match self {
            SessionStatus::Idle => 0,
            SessionStatus::Running => 1,
            SessionStatus::Completed => 2,
            SessionStatus::Stopped => 3,
        }
    }

    fn from_u8(v: u8) -> Self {
        match v {
            0 => SessionStatus::Idle,
            1 => SessionStatus::Running,
            2 => SessionStatus::Completed,
            _ => SessionStatus::Stopped,
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionStatus::Idle => "idle",
            SessionStatus::Running => "running",
            SessionStatus::Completed => "completed",
            SessionStatus::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

/// Lock-free status cell shared between the driver task and control handles.
///
/// `stop()` must be safe from any thread while a tick is in flight, so the
/// status is an atomic checked at tick entry — never an unsynchronized flag.
#[derive(Debug)]
pub(crate) struct AtomicStatus(AtomicU8);

impl AtomicStatus {
    pub(crate) fn new(status: SessionStatus) -> Self {
        Self(AtomicU8::new(status.as_u8()))
    }

    pub(crate) fn load(&self) -> SessionStatus {
        SessionStatus::from_u8(self.0.load(Ordering::SeqCst))
    }

    /// Transition to `to` only if the current status is `from`.
    /// Returns `true` on success.
    pub(crate) fn transition(&self, from: SessionStatus, to: SessionStatus) -> bool {
        self.0
            .compare_exchange(from.as_u8(), to.as_u8(), Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

// ── Traversal ─────────────────────────────────────────────────────────────────

/// Result of one [`Traversal::advance`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    /// Still en route: emit this interpolated position and schedule the
    /// next tick.
    Progress(GeoPoint),
    /// The path is exhausted: emit this — the exact final waypoint — with
    /// `is_final = true` and stop ticking.
    Arrived(GeoPoint),
}

/// The pure state machine for one traversal.
///
/// Owns a snapshot of the waypoint list (taken at `start`, so later path
/// edits cannot disturb a running session), the session speed, and the
/// current segment bookkeeping.  It is clock-agnostic: callers feed it
/// monotonic millisecond readings and it answers with a [`Step`].  All
/// timer and cancellation concerns live in the
/// [`scheduler`][crate::scheduler] module.
#[derive(Debug)]
pub struct Traversal {
    points: Vec<GeoPoint>,
    speed: Speed,
    segment_index: usize,
    segment: Segment,
    segment_start_ms: u64,
}

impl Traversal {
    /// Begin a traversal over `points` at `speed`, with the first segment
    /// starting at monotonic time `start_ms`.
    ///
    /// # Panics
    /// Panics if `points` holds fewer than two waypoints — the scheduler
    /// validates that before construction.
    pub fn new(points: Vec<GeoPoint>, speed: Speed, start_ms: u64) -> Self {
        assert!(points.len() >= 2, "traversal requires at least 2 waypoints");
        let segment = Segment::plan(points[0], points[1], speed);
        Self {
            points,
            speed,
            segment_index: 0,
            segment,
            segment_start_ms: start_ms,
        }
    }

    /// Index of the segment currently being traversed.  Strictly increases
    /// over the life of a session, never decreases.
    #[inline]
    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    /// The segment currently being traversed.
    #[inline]
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// Advance to monotonic time `now_ms` and produce the position to emit.
    ///
    /// Crosses as many segment boundaries as `now_ms` requires in one call
    /// (a slow tick cadence over short segments must not stall the
    /// traversal).  Each hand-over moves the segment start forward by the
    /// finished segment's duration — not to `now_ms` — so cumulative timing
    /// stays exact across boundaries.
    ///
    /// Once `Arrived` has been returned the traversal is exhausted; further
    /// calls keep returning `Arrived` with the same waypoint.
    pub fn advance(&mut self, now_ms: u64) -> Step {
        let mut elapsed = now_ms.saturating_sub(self.segment_start_ms);
        let last_segment = self.points.len() - 2;

        while elapsed >= self.segment.duration_ms {
            if self.segment_index >= last_segment {
                return Step::Arrived(self.points[self.points.len() - 1]);
            }
            self.segment_start_ms += self.segment.duration_ms;
            self.segment_index += 1;
            self.segment = Segment::plan(
                self.points[self.segment_index],
                self.points[self.segment_index + 1],
                self.speed,
            );
            elapsed = now_ms.saturating_sub(self.segment_start_ms);
        }

        // A zero-duration segment resolves to its endpoint instead of
        // dividing by zero.
        let fraction = if self.segment.duration_ms > 0 {
            elapsed as f64 / self.segment.duration_ms as f64
        } else {
            1.0
        };
        Step::Progress(self.segment.start.lerp(self.segment.end, fraction))
    }
}
