//! Synchronous API client for the todos service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the client fully deterministic and
//! testable.
//!
//! # Design
//! - `TodosClient` is stateless — it holds only `base_url`.
//! - Each CRUD operation is a `build_*` / `parse_*` pair, so the I/O
//!   boundary is explicit.
//! - Parse methods understand the server's `{message, data}` envelope and
//!   return the unwrapped payload.
//! - DTOs are defined independently from the server crate; the end-to-end
//!   test catches schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::TodosClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{Envelope, Todo, TodoInput};
