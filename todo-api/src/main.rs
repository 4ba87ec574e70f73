//! todo-api binary entry point.

use todo_api::{app, AppState, Db};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3001);
    let db_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "todos.db".to_string());

    let db = Db::open(&db_path).expect("failed to open database");
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    tracing::info!(%addr, db_path = %db_path, "server starting");

    axum::serve(listener, app(AppState { db }))
        .await
        .expect("server error");
}
