//! DTOs for the todos API wire format.
//!
//! # Design
//! Defined independently from the server crate so this client stands alone;
//! the end-to-end test catches schema drift. Every body the server sends is
//! wrapped in the `{message, data}` envelope, so `Envelope<T>` is part of
//! the wire format here, with `data` optional because delete and error
//! responses carry `"data": null`.

use serde::{Deserialize, Serialize};

/// A single todo record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub is_complete: bool,
}

/// Request payload for create and update. Update is a full replacement, so
/// both operations share this shape; the id travels in the path, never in
/// the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// The `{message, data}` wrapper around every response body.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: Option<T>,
}
