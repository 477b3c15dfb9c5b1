//! Router creation and configuration
//!
//! Creates Axum routers for the versioned REST API surfaces.

use super::types::{AppState, HealthResponse};
use super::v2;
use super::villa_numbers::*;
use super::villas::*;
use axum::{
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create the REST API router
///
/// Both API versions mount over the same state; the core layers are
/// version-agnostic.
pub fn create_router(state: AppState) -> Router {
    let v1_villas = Router::new()
        .route("/", get(list_villas).post(create_villa))
        .route(
            "/:id",
            get(get_villa)
                .put(update_villa)
                .patch(patch_villa)
                .delete(delete_villa),
        );

    let v1_villa_numbers = Router::new()
        .route("/", get(list_villa_numbers).post(create_villa_number))
        .route(
            "/:id",
            get(get_villa_number)
                .put(update_villa_number)
                .patch(patch_villa_number)
                .delete(delete_villa_number),
        );

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1/villas", v1_villas)
        .nest("/api/v1/villa-numbers", v1_villa_numbers)
        .nest("/api/v2", v2::router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
