//! In-memory todos HTTP service.
//!
//! # Overview
//! CRUD over a single `Todo` record type (id, title, description, completion
//! flag), exposed as five JSON endpoints under `/todos`. Every response body
//! is the `{message, data}` envelope and CORS is open to any origin.
//!
//! # Design
//! - The store is an explicitly owned `TodoStore` (a `Vec` plus an id
//!   counter) shared behind `Arc<RwLock<_>>`; each request takes the lock
//!   once, so there are no lost updates between concurrent requests.
//! - Ids are assigned by the store from a monotonic counter and never
//!   reused; listing returns insertion order.
//! - Malformed bodies are a recoverable 400, unknown ids a 404; nothing
//!   else fails.

pub mod error;
pub mod handlers;
pub mod response;
pub mod store;
pub mod types;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use response::Envelope;
pub use store::TodoStore;
pub use types::{Todo, TodoInput};

use handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo};

/// Shared handle to the store; one lock guards each read-modify-write.
pub type Db = Arc<RwLock<TodoStore>>;

/// Build the router with a fresh, empty store.
pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(TodoStore::new()));
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
