use thiserror::Error;

/// Errors surfaced by [`crate::TodoApi`] calls.
///
/// `NotFound` gets its own variant because the server reports a missing row
/// precisely; every other non-success status is carried as an opaque server
/// error with whatever body came back.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("todo not found")]
    NotFound,

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
