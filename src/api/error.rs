use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Per-request failures surfaced by the HTTP layer. Everything here is
/// recoverable by the caller re-issuing a corrected request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Not found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<crate::query::OptionsError> for ApiError {
    fn from(err: crate::query::OptionsError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<crate::store::types::UnknownKind> for ApiError {
    fn from(err: crate::store::types::UnknownKind) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
