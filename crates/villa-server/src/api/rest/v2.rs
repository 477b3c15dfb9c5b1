//! The v2 API surface
//!
//! v2 is a stub in this snapshot: it mounts over the same state and the
//! same version-agnostic repositories, but exposes no real operations yet.

use super::types::AppState;
use axum::{routing::get, Json, Router};

async fn list_villa_numbers_v2() -> Json<Vec<String>> {
    Json(vec!["value1".to_string(), "value2".to_string()])
}

/// Router for the v2 endpoints
pub(super) fn router() -> Router<AppState> {
    Router::new().route("/villa-numbers", get(list_villa_numbers_v2))
}
