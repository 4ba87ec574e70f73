use chrono::{SecondsFormat, Utc};
use todo_domain::{NewTodo, TodoPatch, TodoRecord};

use crate::api::TodoApi;

/// Which record, if any, the edit overlay is open for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    /// One record selected, its current text preloaded as the draft.
    Editing { id: String, draft: String },
}

/// In-memory mirror of the todo list, synchronized over the HTTP API.
///
/// The list is filled by [`TodoState::load`] once at startup and afterwards
/// maintained locally: a create is appended before the request is sent, the
/// other mutations patch the list once the server confirms. A rejected
/// request is only reported through [`TodoState::last_error`] — nothing is
/// re-fetched or rolled back, so the local view can stay ahead of the store
/// until the next full `load`.
pub struct TodoState {
    api: TodoApi,
    todos: Vec<TodoRecord>,
    edit: EditMode,
    last_error: Option<String>,
}

impl TodoState {
    pub fn new(api: TodoApi) -> Self {
        Self {
            api,
            todos: Vec::new(),
            edit: EditMode::Idle,
            last_error: None,
        }
    }

    pub fn todos(&self) -> &[TodoRecord] {
        &self.todos
    }

    pub fn edit_mode(&self) -> &EditMode {
        &self.edit
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the local list with the server's. Called once at startup;
    /// also the only way to converge again after a failed mutation.
    pub async fn load(&mut self) {
        match self.api.fetch_all().await {
            Ok(todos) => self.todos = todos,
            Err(e) => self.report(format!("Error loading todos: {e}")),
        }
    }

    /// Appends the new record locally, then sends the create request.
    ///
    /// The id is minted here — the client is the only id authority. A
    /// rejected create (including an id collision, possible when two creates
    /// land in the same millisecond) leaves the appended entry in place
    /// until the next [`TodoState::load`].
    pub async fn add(&mut self, text: &str) {
        let todo = TodoRecord {
            id: generate_id(),
            text: text.to_string(),
            completed: false,
        };
        self.todos.push(todo.clone());
        let input = NewTodo {
            id: todo.id,
            text: todo.text,
        };
        if let Err(e) = self.api.create(&input).await {
            self.report(format!("Error adding todo: {e}"));
        }
    }

    /// Opens the edit overlay for `id`, preloading the stored text. Starting
    /// a new edit while one is open replaces the prior target; an unknown id
    /// is a no-op.
    pub fn begin_edit(&mut self, id: &str) {
        if let Some(todo) = self.todos.iter().find(|t| t.id == id) {
            self.edit = EditMode::Editing {
                id: todo.id.clone(),
                draft: todo.text.clone(),
            };
        }
    }

    /// Closes the edit overlay without submitting.
    pub fn cancel_edit(&mut self) {
        self.edit = EditMode::Idle;
    }

    /// Submits the edit overlay with the final text.
    ///
    /// The outgoing payload always carries `completed: false` next to the
    /// new text — the edit form has no completion control — while locally
    /// only the text is patched; the local completion flag keeps whatever
    /// value it had. On success the overlay closes; on failure it stays
    /// open and the error is recorded.
    pub async fn submit_edit(&mut self, text: &str) {
        let EditMode::Editing { id, .. } = self.edit.clone() else {
            return;
        };
        let patch = TodoPatch {
            text: Some(text.to_string()),
            completed: Some(false),
        };
        match self.api.update(&id, &patch).await {
            Ok(_) => {
                if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
                    todo.text = text.to_string();
                }
                self.edit = EditMode::Idle;
            }
            Err(e) => self.report(format!("Error updating todo: {e}")),
        }
    }

    /// Flips the completion flag of `id`, locally once the server confirms.
    pub async fn toggle(&mut self, id: &str) {
        let Some(completed) = self.todos.iter().find(|t| t.id == id).map(|t| t.completed)
        else {
            return;
        };
        let patch = TodoPatch {
            text: None,
            completed: Some(!completed),
        };
        match self.api.update(id, &patch).await {
            Ok(_) => {
                if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
                    todo.completed = !completed;
                }
            }
            Err(e) => self.report(format!("Error toggling completion status: {e}")),
        }
    }

    /// Deletes `id`, removing it locally once the server confirms.
    pub async fn remove(&mut self, id: &str) {
        match self.api.delete(id).await {
            Ok(_) => self.todos.retain(|t| t.id != id),
            Err(e) => self.report(format!("Error deleting todo: {e}")),
        }
    }

    fn report(&mut self, message: String) {
        tracing::warn!(%message, "todo sync failed");
        self.last_error = Some(message);
    }
}

/// Client-generated identifier: the current UTC instant in RFC 3339 with
/// millisecond precision.
fn generate_id() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
