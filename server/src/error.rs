//! Handler error type.
//!
//! # Design
//! The service has exactly two failure modes: a referenced id with no live
//! record, and a request body that does not parse. `NotFound` carries a
//! fixed message; `BadRequest` surfaces the deserialization error text to
//! the caller. Both render as the standard envelope with `data: null`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::response::Envelope;

#[derive(Debug, Error)]
pub enum AppError {
    /// The requested todo does not exist.
    #[error("todo not found")]
    NotFound,

    /// The request body could not be deserialized into the expected shape.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = Envelope::new(self.to_string(), ());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_fixed_message() {
        assert_eq!(AppError::NotFound.to_string(), "todo not found");
    }

    #[test]
    fn bad_request_surfaces_parse_error() {
        let err = AppError::BadRequest("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "expected value at line 1");
    }

    #[test]
    fn not_found_renders_404() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn bad_request_renders_400() {
        let response = AppError::BadRequest("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
