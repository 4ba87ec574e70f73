//! HTTP API for the todo list.
//!
//! The router is built here so tests can drive it directly with `oneshot`
//! and the binary only has to bind a listener around it.

use axum::routing::{delete, get, post, put};
use axum::Router;

mod db;
mod error;
mod handlers;

pub use db::Db;
pub use error::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
}

/// Builds the router with all todo routes attached.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/all-todos", get(handlers::list_todos))
        .route("/api/new-todos", post(handlers::create_todo))
        .route("/api/edit-todo/:id", put(handlers::update_todo))
        .route("/api/all-todos/:id", delete(handlers::delete_todo))
        .with_state(state)
}
