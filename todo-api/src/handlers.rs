use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use todo_domain::{NewTodo, TodoPatch, TodoRecord};

use crate::error::ApiError;
use crate::AppState;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TodoRecord>>, ApiError> {
    let todos = state.db.list_todos()?;
    Ok(Json(todos))
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<NewTodo>,
) -> Result<(StatusCode, Json<TodoRecord>), ApiError> {
    tracing::info!(id = %input.id, "creating todo");
    let todo = state.db.insert_todo(&input.id, &input.text)?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<TodoRecord>, ApiError> {
    tracing::info!(id = %id, "updating todo");
    let todo = state
        .db
        .update_todo(&id, patch.text.as_deref(), patch.completed)?;
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoRecord>, ApiError> {
    tracing::info!(id = %id, "deleting todo");
    let todo = state.db.delete_todo(&id)?;
    Ok(Json(todo))
}
