//! Request-level errors and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fleet_route::RouteError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Well-formed JSON body with out-of-range values.
    #[error("unprocessable request: {0}")]
    Unprocessable(String),

    #[error("routing failed: {0}")]
    RouteUnavailable(#[from] RouteError),
}

pub fn bad_request(msg: impl ToString) -> ApiError {
    ApiError::BadRequest(msg.to_string())
}

pub fn unprocessable(msg: impl ToString) -> ApiError {
    ApiError::Unprocessable(msg.to_string())
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_)       => StatusCode::BAD_REQUEST,
            ApiError::Unprocessable(_)    => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::RouteUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            ApiError::BadRequest(msg) | ApiError::Unprocessable(msg) => msg.clone(),
            ApiError::RouteUnavailable(e) => {
                error!(error = %e, "routing request failed");
                "Routing service unavailable".to_string()
            }
        };
        (self.status(), Json(json!({ "success": false, "detail": detail }))).into_response()
    }
}
