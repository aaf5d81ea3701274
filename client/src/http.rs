//! Plain-data HTTP request and response types.
//!
//! # Design
//! The client never touches the network: it emits `HttpRequest` values and
//! accepts `HttpResponse` values, and the host executes the round-trip in
//! between with whatever transport it likes. Owned fields throughout so the
//! values can be moved across threads or other boundaries freely.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// A request described as data, built by `TodosClient::build_*`. The host
/// executes it and hands the result back as an `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A response described as data, fed to `TodosClient::parse_*`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
