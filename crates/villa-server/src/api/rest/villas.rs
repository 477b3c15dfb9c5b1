//! Villa endpoint handlers

use super::extractors::{JsonExtractor, RequireAdmin};
use super::types::{AppState, ListVillasQuery};
use crate::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};
use villa_core::{
    apply_to, ApiResponse, PatchDocument, Pagination, Villa, VillaCreateDto, VillaDto,
    VillaUpdateDto,
};
use villa_repository::{PageRequest, Predicate, QueryOptions, Repository};

/// List villas with optional occupancy filter, substring search, and paging
///
/// The occupancy filter runs as a repository predicate; the search is a
/// case-insensitive substring match over name and amenity applied to the
/// returned window. Pagination metadata travels in the `X-Pagination`
/// header, never in the body.
pub(super) async fn list_villas(
    State(state): State<AppState>,
    Query(query): Query<ListVillasQuery>,
) -> Result<Response, ApiError> {
    let predicate: Option<Predicate<Villa>> = match query.filter_occupancy {
        Some(occupancy) if occupancy > 0 => {
            Some(Box::new(move |v: &Villa| v.occupancy == occupancy))
        }
        _ => None,
    };

    let page = PageRequest::new(query.page_size, query.page_number);
    let mut villas = state.villas.get_all(predicate, page, None).await?;

    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        villas.retain(|v| {
            v.name.to_lowercase().contains(&needle) || v.amenity.to_lowercase().contains(&needle)
        });
    }

    let result: Vec<VillaDto> = villas.into_iter().map(VillaDto::from).collect();
    info!("Getting all villas ({} returned)", result.len());

    let pagination = Pagination {
        page_number: query.page_number,
        page_size: query.page_size,
    };
    Ok((
        StatusCode::OK,
        [(
            "X-Pagination",
            serde_json::to_string(&pagination).unwrap_or_default(),
        )],
        Json(ApiResponse::ok(200, result)),
    )
        .into_response())
}

/// Villa detail by identity
pub(super) async fn get_villa(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let villa = state
        .villas
        .get(Box::new(move |v: &Villa| v.id == id), QueryOptions::default())
        .await?
        .ok_or_else(|| {
            error!("Villa not found with id: {}", id);
            ApiError::NotFound(format!("Villa with id {id} not found"))
        })?;

    info!("Getting villa with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(200, VillaDto::from(villa))),
    )
        .into_response())
}

/// Create a villa (admin only)
pub(super) async fn create_villa(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    JsonExtractor(payload): JsonExtractor<VillaCreateDto>,
) -> Result<Response, ApiError> {
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    if state.villas.find_by_name(&payload.name).await?.is_some() {
        error!("Villa already exists with name: {}", payload.name);
        return Err(ApiError::Validation(vec![
            "Villa already exists!".to_string()
        ]));
    }

    let stored = state.villas.create(payload.into()).await?;

    info!("A new villa has been created with id: {}", stored.id);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(201, VillaDto::from(stored))),
    )
        .into_response())
}

/// Full update of a villa (admin only)
///
/// The path identity must agree with the body identity; mismatches are
/// rejected before the repository is called.
pub(super) async fn update_villa(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<i32>,
    JsonExtractor(payload): JsonExtractor<VillaUpdateDto>,
) -> Result<Response, ApiError> {
    if id != payload.id {
        error!(
            "The specified id {} does not match the model id {}",
            id, payload.id
        );
        return Err(ApiError::BadRequest(format!(
            "Path id {id} does not match body id {}",
            payload.id
        )));
    }

    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    state.villas.update(payload.into()).await?;

    info!("Villa was updated with id: {}", id);
    // Transport stays 200 so the envelope can travel in the body; the
    // payload status records the 204 outcome.
    Ok((StatusCode::OK, Json(ApiResponse::ok_empty(204))).into_response())
}

/// Partial update of a villa
///
/// Fetch (untracked) -> project to the update shape -> apply the patch
/// operations in order -> validate -> commit. Validation gates the commit:
/// a patch that fails validation is never persisted.
pub(super) async fn patch_villa(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonExtractor(document): JsonExtractor<PatchDocument>,
) -> Result<Response, ApiError> {
    if document.is_empty() {
        return Err(ApiError::BadRequest("Patch document is empty".to_string()));
    }

    let villa = state
        .villas
        .get(
            Box::new(move |v: &Villa| v.id == id),
            QueryOptions::untracked(),
        )
        .await?
        .ok_or_else(|| {
            error!("Villa not found for partial update with id: {}", id);
            ApiError::NotFound(format!("Villa with id {id} not found"))
        })?;

    let shape = VillaUpdateDto::from(villa);
    let patched = apply_to(&shape, &document).map_err(ApiError::Validation)?;

    if patched.id != id {
        return Err(ApiError::Validation(vec![
            "Identity cannot be patched".to_string()
        ]));
    }

    let errors = patched.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    state.villas.update(patched.into()).await?;

    info!("Villa was partially updated with id: {}", id);
    Ok((StatusCode::OK, Json(ApiResponse::ok_empty(204))).into_response())
}

/// Delete a villa (admin only)
pub(super) async fn delete_villa(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let villa = state
        .villas
        .get(
            Box::new(move |v: &Villa| v.id == id),
            QueryOptions::untracked(),
        )
        .await?
        .ok_or_else(|| {
            error!("Villa not found for deletion with id: {}", id);
            ApiError::NotFound(format!("Villa with id {id} not found"))
        })?;

    state.villas.remove(&villa).await?;

    info!("Villa was removed with id: {}", id);
    Ok((StatusCode::OK, Json(ApiResponse::ok_empty(204))).into_response())
}
