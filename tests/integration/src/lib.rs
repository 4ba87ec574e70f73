//! Helpers for driving the real server and client together.

use anyhow::Result;
use tempfile::NamedTempFile;
use todo_api::{app, AppState, Db};

/// A running API instance on an ephemeral port, backed by a throwaway
/// database file that lives as long as this handle.
pub struct TestServer {
    pub base_url: String,
    /// Direct handle to the same store, for store-side assertions.
    pub db: Db,
    _db_file: NamedTempFile,
}

pub async fn spawn_server() -> Result<TestServer> {
    let db_file = NamedTempFile::new()?;
    let db = Db::open(db_file.path())?;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let state = AppState { db: db.clone() };
    tokio::spawn(async move {
        axum::serve(listener, app(state)).await.unwrap();
    });

    Ok(TestServer {
        base_url: format!("http://{addr}"),
        db,
        _db_file: db_file,
    })
}
