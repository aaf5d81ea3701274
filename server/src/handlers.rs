//! Axum handlers for the five todo operations.
//!
//! Each handler takes the store lock once for its whole read-modify-write,
//! so operations are atomic with respect to each other. Body extraction uses
//! `Result<Json<_>, JsonRejection>` so a malformed body becomes a 400 with
//! the parse error in the envelope instead of axum's default rejection.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use crate::error::AppError;
use crate::response::Envelope;
use crate::types::TodoInput;
use crate::Db;

pub async fn list_todos(State(db): State<Db>) -> Response {
    let store = db.read().await;
    Envelope::new("success", store.list().to_vec()).ok()
}

pub async fn create_todo(
    State(db): State<Db>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = payload?;
    let todo = db.write().await.create(input);
    tracing::debug!(id = todo.id, "created todo");
    Ok(Envelope::new("todo created", todo).created())
}

pub async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Response, AppError> {
    let store = db.read().await;
    let todo = store.get(id).cloned().ok_or(AppError::NotFound)?;
    Ok(Envelope::new("success", todo).ok())
}

pub async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    payload: Result<Json<TodoInput>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(input) = payload?;
    let todo = db.write().await.update(id, input).ok_or(AppError::NotFound)?;
    tracing::debug!(id, "updated todo");
    Ok(Envelope::new("todo updated", todo).ok())
}

pub async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> Result<Response, AppError> {
    db.write().await.delete(id).ok_or(AppError::NotFound)?;
    tracing::debug!(id, "deleted todo");
    Ok(Envelope::new("todo deleted", ()).ok())
}
