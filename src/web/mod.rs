//! Read-only web view of the list.
//!
//! Every request reloads the backing file. Nothing here writes to the list;
//! the checkboxes and the text input on the page are display only.

mod handlers;
pub mod page;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::io::storage::TodoFile;
use crate::model::config::WebConfig;

pub use handlers::TodosResponse;

/// Shared state for the handlers.
#[derive(Debug)]
pub struct WebState {
    pub file: TodoFile,
    pub page: WebConfig,
}

pub fn create_router(file: TodoFile, page: WebConfig) -> Router {
    let state = Arc::new(WebState { file, page });

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/todos", get(handlers::list_todos))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(file: TodoFile, page: WebConfig, addr: &str) -> std::io::Result<()> {
    let app = create_router(file, page);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("web view listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}
