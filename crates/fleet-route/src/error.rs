//! Routing error type.

use thiserror::Error;

/// Why a path could not be produced.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("routing request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("routing service returned HTTP {0}")]
    Status(u16),

    #[error("malformed routing response: {0}")]
    Malformed(String),

    #[error("malformed routing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no route found ({0})")]
    NoRoute(String),
}

pub type RouteResult<T> = Result<T, RouteError>;
