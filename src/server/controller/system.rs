use axum::{http::StatusCode, response::Html, Json};
use serde_json::{json, Value};

use crate::server::view::{self, render};

/// Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, render(view::error::not_found_page()))
}
