//! The tick-driven movement scheduler.
//!
//! # Tick model
//!
//! One tokio task per session drives the traversal: an interval fires every
//! `tick_period` (nominal 1 s, first tick immediate), each firing reads the
//! monotonic clock, advances the [`Traversal`], and pushes the resulting
//! position to the sink.  Between ticks the task holds no resources and
//! does no work; only one tick is ever outstanding.
//!
//! # Cancellation
//!
//! [`MovementHandle::stop`] is safe from any thread, concurrently with an
//! in-flight tick: it flips the shared atomic status and signals a watch
//! channel.  The driver re-checks the status at every tick entry, so a stop
//! issued between ticks produces zero further emissions; a stop racing an
//! executing tick takes effect at the next tick boundary.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use wp_core::{Clock, Speed, SystemClock};
use wp_route::Path;

use crate::session::{AtomicStatus, SessionStatus, Step, Traversal};
use crate::{LocationSink, SimError, SimResult};

// ── SchedulerConfig ───────────────────────────────────────────────────────────

/// Tuning knobs for [`MovementScheduler`].
#[derive(Clone, Debug)]
pub struct SchedulerConfig {
    /// Interval between position emissions.  Default: 1000 ms.
    pub tick_period: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { tick_period: Duration::from_millis(1000) }
    }
}

// ── MovementScheduler ─────────────────────────────────────────────────────────

/// Starts and supervises movement sessions.
///
/// Holds the location sink, the clock, and the tick configuration.  At most
/// one session is live per scheduler at a time: `start` while a previous
/// session is still running fails with [`SimError::SessionActive`] — the
/// caller stops first, mirroring the editing contract on
/// [`Path`][wp_route::Path].
///
/// `start` must be called from within a tokio runtime.
pub struct MovementScheduler<C: Clock = SystemClock> {
    sink: Arc<dyn LocationSink>,
    clock: Arc<C>,
    config: SchedulerConfig,
    /// Status cell of the most recently started session, kept to enforce
    /// one-session-at-a-time.
    active: Mutex<Option<Arc<AtomicStatus>>>,
}

impl MovementScheduler<SystemClock> {
    /// A scheduler with the production clock and default tick period.
    pub fn new(sink: Arc<dyn LocationSink>) -> Self {
        Self::with_clock(sink, Arc::new(SystemClock::new()))
    }
}

impl<C: Clock + 'static> MovementScheduler<C> {
    /// A scheduler with a caller-supplied shared clock (tests use
    /// [`ManualClock`][wp_core::ManualClock] and advance it by hand).
    pub fn with_clock(sink: Arc<dyn LocationSink>, clock: Arc<C>) -> Self {
        Self {
            sink,
            clock,
            config: SchedulerConfig::default(),
            active: Mutex::new(None),
        }
    }

    /// Replace the tick configuration.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    /// Start traversing `path` at `speed_kmh`.
    ///
    /// Validates the inputs, snapshots the waypoints, plans the first
    /// segment against the monotonic clock, and spawns the driver task.
    /// The first emission happens on the immediately-following first tick.
    ///
    /// # Errors
    /// - [`SimError::InvalidPath`] — fewer than two waypoints.
    /// - [`SimError::InvalidSpeed`] — speed is zero, negative, or not finite.
    /// - [`SimError::SessionActive`] — the previous session has not reached
    ///   a terminal state.
    pub fn start(&self, path: &Path, speed_kmh: f64) -> SimResult<MovementHandle> {
        if !path.is_traversable() {
            return Err(SimError::InvalidPath { len: path.len() });
        }
        let speed = Speed::from_kmh(speed_kmh);
        if !speed.is_valid() {
            return Err(SimError::InvalidSpeed { kmh: speed_kmh });
        }

        let mut active = self.active.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(status) = &*active {
            if !status.load().is_terminal() {
                return Err(SimError::SessionActive);
            }
        }

        let traversal = Traversal::new(path.points().to_vec(), speed, self.clock.now_ms());
        let status = Arc::new(AtomicStatus::new(SessionStatus::Running));
        let (cancel_tx, cancel_rx) = watch::channel(false);

        info!(
            waypoints = path.len(),
            %speed,
            tick_ms = self.config.tick_period.as_millis() as u64,
            "movement started"
        );

        let task = tokio::spawn(drive(
            traversal,
            Arc::clone(&self.sink),
            Arc::clone(&self.clock),
            Arc::clone(&status),
            cancel_rx,
            self.config.tick_period,
        ));

        *active = Some(Arc::clone(&status));
        Ok(MovementHandle { status, cancel_tx, task })
    }
}

// ── MovementHandle ────────────────────────────────────────────────────────────

/// Control handle for one running session.
///
/// Dropping the handle cancels the session the same way [`stop`][Self::stop]
/// does; hold it (or `wait` on it) for as long as the traversal should run.
#[derive(Debug)]
pub struct MovementHandle {
    status: Arc<AtomicStatus>,
    cancel_tx: watch::Sender<bool>,
    task: JoinHandle<SimResult<SessionStatus>>,
}

impl MovementHandle {
    /// Current session status.
    pub fn status(&self) -> SessionStatus {
        self.status.load()
    }

    /// Cancel the session.
    ///
    /// Callable from any thread and any state; idempotent and never fails.
    /// A running session transitions to `Stopped` and emits nothing further
    /// after the current tick boundary.  A session that already completed
    /// stays `Completed` — terminal states are not overwritten.
    pub fn stop(&self) {
        let stopped = self
            .status
            .transition(SessionStatus::Running, SessionStatus::Stopped)
            || self.status.transition(SessionStatus::Idle, SessionStatus::Stopped);
        if stopped {
            let _ = self.cancel_tx.send(true);
            info!("movement stopped");
        }
    }

    /// Wait for the driver task to finish.
    ///
    /// Returns the terminal status, or the [`SinkError`][crate::SinkError]
    /// that halted the session mid-traversal.
    pub async fn wait(self) -> SimResult<SessionStatus> {
        match self.task.await {
            Ok(result) => result,
            // Driver panicked or was aborted externally; the shared status
            // still reflects how far the session got.
            Err(_) => Ok(self.status.load()),
        }
    }
}

// ── Driver task ───────────────────────────────────────────────────────────────

async fn drive<C: Clock>(
    mut traversal: Traversal,
    sink: Arc<dyn LocationSink>,
    clock: Arc<C>,
    status: Arc<AtomicStatus>,
    mut cancel_rx: watch::Receiver<bool>,
    tick_period: Duration,
) -> SimResult<SessionStatus> {
    let mut ticks = tokio::time::interval(tick_period);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            // Fires on stop() and also when the handle is dropped (the
            // sender side goes away) — either way the session is over.
            _ = cancel_rx.changed() => {
                status.transition(SessionStatus::Running, SessionStatus::Stopped);
                return Ok(status.load());
            }
            _ = ticks.tick() => {
                // A stop issued between ticks lands here, before any emission.
                if status.load() != SessionStatus::Running {
                    return Ok(status.load());
                }

                match traversal.advance(clock.now_ms()) {
                    Step::Progress(position) => {
                        if let Err(e) = sink.emit(position, clock.unix_ms(), false) {
                            warn!(error = %e, "sink failed; halting session");
                            status.transition(SessionStatus::Running, SessionStatus::Stopped);
                            return Err(e.into());
                        }
                        debug!(segment = traversal.segment_index(), %position, "tick");
                    }
                    Step::Arrived(position) => {
                        if let Err(e) = sink.emit(position, clock.unix_ms(), true) {
                            warn!(error = %e, "sink failed on final emission; halting session");
                            status.transition(SessionStatus::Running, SessionStatus::Stopped);
                            return Err(e.into());
                        }
                        status.transition(SessionStatus::Running, SessionStatus::Completed);
                        info!(%position, "path completed");
                        return Ok(status.load());
                    }
                }
            }
        }
    }
}
