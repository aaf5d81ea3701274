//! JSON envelope wrapping every response body.
//!
//! Shape: `{"message": string, "data": any}`. Success bodies carry the
//! payload in `data`; delete and error bodies carry `data: null`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

/// The `{message, data}` wrapper used for all responses.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    /// 200 response with this envelope as body.
    pub fn ok(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }

    /// 201 response with this envelope as body.
    pub fn created(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}
