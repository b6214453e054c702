//! `wp-sim` — the movement simulator: traversal state machine and the
//! tick-driven scheduler that feeds positions to a location sink.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`session`]   | `SessionStatus`, `Traversal` — the pure state machine    |
//! | [`sink`]      | `LocationSink` trait, `SinkError`, `NoopSink`            |
//! | [`scheduler`] | `MovementScheduler`, `MovementHandle`, `SchedulerConfig` |
//! | [`error`]     | `SimError`, `SimResult<T>`                               |
//!
//! # Movement model
//!
//! A traversal walks an ordered waypoint list one segment at a time.  Each
//! segment's distance and duration are planned lazily on entry from the
//! session speed; on every tick the elapsed monotonic time within the
//! current segment yields an interpolated position, which is pushed to the
//! [`LocationSink`].  Segment hand-over adds the previous segment's
//! duration to the segment start time instead of resetting it to "now", so
//! timing error never accumulates across boundaries.  The final emission of
//! a completed traversal is the path's exact last waypoint.
//!
//! # Quick start
//!
//! ```rust,ignore
//! let path = Path::from_points(vec![a, b, c]);
//! let scheduler = MovementScheduler::new(Arc::new(MySink));
//! let handle = scheduler.start(&path, 60.0)?;   // km/h
//! // ... later, from any thread:
//! handle.stop();
//! ```

pub mod error;
pub mod scheduler;
pub mod session;
pub mod sink;


pub use error::{SimError, SimResult};
pub use scheduler::{MovementHandle, MovementScheduler, SchedulerConfig};
pub use session::{SessionStatus, Step, Traversal};
pub use sink::{LocationSink, NoopSink, SinkError};
