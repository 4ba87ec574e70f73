//! Client side of the todo list: an HTTP wrapper over the API and the
//! in-memory state it keeps synchronized.

mod api;
mod error;
mod state;

pub use api::TodoApi;
pub use error::ClientError;
pub use state::{EditMode, TodoState};
