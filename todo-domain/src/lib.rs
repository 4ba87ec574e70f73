//! Wire contract for the todo API.
//!
//! These types are shared by the server and the client so the two sides
//! cannot drift apart. The JSON field names follow the HTTP contract, which
//! is not always the same as the Rust-side name (see [`NewTodo`]).

use serde::{Deserialize, Serialize};

/// A single todo row, as stored and as returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

/// Request body for `POST /api/new-todos`.
///
/// The id is generated by the client before the request is sent; the server
/// never mints ids. On the wire the description travels under the `data`
/// key. `completed` is not accepted here — a new todo always starts out
/// not completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub id: String,
    #[serde(rename = "data")]
    pub text: String,
}

/// Request body for `PUT /api/edit-todo/{id}`.
///
/// Omitted fields keep their stored value. `None` fields are skipped when
/// serializing so a toggle sends `{"completed":…}` alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
