//! Shared error type.
//!
//! Sub-crates define their own error enums (`RouteError`, `SimError`) and keep
//! `FleetError` for configuration and I/O problems that surface at startup.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand result type for `fleet-core`.
pub type FleetResult<T> = Result<T, FleetError>;
