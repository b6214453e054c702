use thiserror::Error;

use crate::SinkError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("path has {len} waypoint(s); traversal requires at least 2")]
    InvalidPath { len: usize },

    #[error("speed {kmh} km/h is not a positive finite value")]
    InvalidSpeed { kmh: f64 },

    #[error("a session is already running; stop it before starting another")]
    SessionActive,

    #[error("location sink failed: {0}")]
    Sink(#[from] SinkError),
}

pub type SimResult<T> = Result<T, SimError>;
