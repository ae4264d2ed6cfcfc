use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::Html, response::IntoResponse};
use serde::{Deserialize, Serialize};

use super::WebState;
use super::page::render_page;
use crate::io::storage::StorageError;
use crate::model::todo::display_text;

#[derive(Debug, Serialize, Deserialize)]
pub struct TodosResponse {
    pub todos: Vec<String>,
}

/// Log the storage error and hand the client a generic 500.
fn internal_error(e: StorageError) -> (StatusCode, String) {
    tracing::error!("storage error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

/// Load the list on the blocking pool so file I/O stays off the runtime threads.
async fn load(state: &Arc<WebState>) -> Result<Vec<String>, (StatusCode, String)> {
    let state = Arc::clone(state);
    let loaded = tokio::task::spawn_blocking(move || state.file.load_or_create())
        .await
        .map_err(|e| {
            tracing::error!("load task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        })?;
    loaded.map(|loaded| loaded.lines).map_err(internal_error)
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn index(
    State(state): State<Arc<WebState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let lines = load(&state).await?;
    Ok(Html(render_page(&state.page, &lines)))
}

pub async fn list_todos(
    State(state): State<Arc<WebState>>,
) -> Result<Json<TodosResponse>, (StatusCode, String)> {
    let lines = load(&state).await?;
    Ok(Json(TodosResponse {
        todos: lines.iter().map(|l| display_text(l).to_string()).collect(),
    }))
}
