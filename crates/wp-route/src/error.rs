//! Error types for wp-route.

use thiserror::Error;

/// Errors from path persistence.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no path saved in slot {0}")]
    SlotEmpty(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, RouteError>`.
pub type RouteResult<T> = Result<T, RouteError>;
