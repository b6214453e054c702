//! Slot-indexed path persistence.
//!
//! # File format
//!
//! One JSON file per slot under the store directory:
//!
//! ```text
//! path_slot_0.json    [{"lat":25.033,"lon":121.5654}, ...]
//! path_slot_1.json
//! last_position.json  {"lat":25.033,"lon":121.5654}
//! ```
//!
//! The only contract the simulation core relies on is an order-preserving
//! round-trip of the waypoint list; everything else (directory layout, file
//! naming, the last-position memory) is front-end convenience.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use wp_core::GeoPoint;

use crate::{Path, RouteError, RouteResult};

// ── PathStore trait ───────────────────────────────────────────────────────────

/// Slot-indexed persistence for waypoint paths.
///
/// Implementations must preserve waypoint order across a save/load
/// round-trip.  Loading an unused slot fails with
/// [`RouteError::SlotEmpty`].
pub trait PathStore {
    fn save(&self, slot: u32, path: &Path) -> RouteResult<()>;
    fn load(&self, slot: u32) -> RouteResult<Path>;
}

// ── JsonSlotStore ─────────────────────────────────────────────────────────────

/// File-backed [`PathStore`] writing one JSON file per slot.
pub struct JsonSlotStore {
    dir: PathBuf,
}

impl JsonSlotStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> RouteResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn slot_file(&self, slot: u32) -> PathBuf {
        self.dir.join(format!("path_slot_{slot}.json"))
    }

    /// Remember the last emitted position so a front end can restore its
    /// viewport between runs.
    pub fn save_last_position(&self, position: GeoPoint) -> RouteResult<()> {
        let json = serde_json::to_string(&position)?;
        fs::write(self.dir.join("last_position.json"), json)?;
        Ok(())
    }

    /// The position saved by [`save_last_position`][Self::save_last_position],
    /// or `None` if none was ever saved.
    pub fn load_last_position(&self) -> RouteResult<Option<GeoPoint>> {
        match fs::read_to_string(self.dir.join("last_position.json")) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl PathStore for JsonSlotStore {
    fn save(&self, slot: u32, path: &Path) -> RouteResult<()> {
        let json = serde_json::to_string(path)?;
        fs::write(self.slot_file(slot), json)?;
        Ok(())
    }

    fn load(&self, slot: u32) -> RouteResult<Path> {
        match fs::read_to_string(self.slot_file(slot)) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(RouteError::SlotEmpty(slot)),
            Err(e) => Err(e.into()),
        }
    }
}
