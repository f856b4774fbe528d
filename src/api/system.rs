//! Service endpoints.

use axum::extract::State;
use axum::http::Uri;
use axum::Json;
use serde_json::{json, Value};

use super::error::{ApiError, ApiResult};
use super::response::{self, Message};
use super::AppState;

/// `GET /`
pub async fn root() -> Json<Message> {
    response::message("Hello World!")
}

/// `GET /mongodb`
pub async fn mongodb() -> Json<Message> {
    response::message("J'aime trop mongodb <3 !")
}

/// `GET /health` - pings the database.
pub async fn health(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.db.ping().await?;
    Ok(Json(json!({ "status": "ok" })))
}

/// Fallback for paths no route matches.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NoRoute(uri.path().to_string())
}
