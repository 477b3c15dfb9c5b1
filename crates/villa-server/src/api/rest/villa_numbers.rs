//! VillaNumber endpoint handlers
//!
//! Same verbs and envelope shape as the villa endpoints, with two
//! differences: the number itself is the caller-supplied key, and writes
//! check that the referenced villa exists. The existence check and the
//! insert are independent calls; a villa deleted in between is an accepted
//! race, not mitigated here.

use super::extractors::{JsonExtractor, RequireAdmin};
use super::types::{AppState, ListVillaNumbersQuery};
use crate::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info};
use villa_core::{
    apply_to, ApiResponse, PatchDocument, Pagination, VillaNumber, VillaNumberCreateDto,
    VillaNumberDto, VillaNumberUpdateDto,
};
use villa_repository::{PageRequest, QueryOptions, Repository, INCLUDE_VILLA};

/// List villa numbers, eagerly loading the owning villa by default
pub(super) async fn list_villa_numbers(
    State(state): State<AppState>,
    Query(query): Query<ListVillaNumbersQuery>,
) -> Result<Response, ApiError> {
    let include = query.include_villa.then_some(INCLUDE_VILLA);
    let page = PageRequest::new(query.page_size, query.page_number);
    let rows = state.villa_numbers.get_all(None, page, include).await?;

    let result: Vec<VillaNumberDto> = rows.into_iter().map(VillaNumberDto::from).collect();
    info!("Getting all villa numbers ({} returned)", result.len());

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

/// Villa number detail by number
pub(super) async fn get_villa_number(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let number = state
        .villa_numbers
        .get(
            Box::new(move |n: &VillaNumber| n.villa_no == id),
            QueryOptions::default(),
        )
        .await?
        .ok_or_else(|| {
            error!("Villa number not found: {}", id);
            ApiError::NotFound(format!("Villa number {id} not found"))
        })?;

    info!("Getting villa number: {}", id);
    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok(200, VillaNumberDto::from(number))),
    )
        .into_response())
}

/// Create a villa number (admin only)
pub(super) async fn create_villa_number(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    JsonExtractor(payload): JsonExtractor<VillaNumberCreateDto>,
) -> Result<Response, ApiError> {
    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let villa_no = payload.villa_no;
    let existing = state
        .villa_numbers
        .get(
            Box::new(move |n: &VillaNumber| n.villa_no == villa_no),
            QueryOptions::untracked(),
        )
        .await?;
    if existing.is_some() {
        error!("Villa number already exists: {}", villa_no);
        return Err(ApiError::Validation(vec![
            "Villa number already exists!".to_string(),
        ]));
    }

    if !state.villa_numbers.villa_exists(payload.villa_id).await? {
        error!("Villa id {} is invalid", payload.villa_id);
        return Err(ApiError::Validation(vec![
            "Villa ID is invalid!".to_string()
        ]));
    }

    let stored = state.villa_numbers.create(payload.into()).await?;

    info!("A new villa number has been created: {}", stored.villa_no);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(201, VillaNumberDto::from(stored))),
    )
        .into_response())
}

/// Full update of a villa number (admin only)
pub(super) async fn update_villa_number(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<i32>,
    JsonExtractor(payload): JsonExtractor<VillaNumberUpdateDto>,
) -> Result<Response, ApiError> {
    if id != payload.villa_no {
        error!(
            "The specified id {} does not match the model id {}",
            id, payload.villa_no
        );
        return Err(ApiError::BadRequest(format!(
            "Path id {id} does not match body id {}",
            payload.villa_no
        )));
    }

    let errors = payload.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    if !state.villa_numbers.villa_exists(payload.villa_id).await? {
        error!("Villa id {} is invalid", payload.villa_id);
        return Err(ApiError::Validation(vec![
            "Villa ID is invalid!".to_string()
        ]));
    }

    state.villa_numbers.update(payload.into()).await?;

    info!("Villa number was updated: {}", id);
    Ok((StatusCode::OK, Json(ApiResponse::ok_empty(204))).into_response())
}

/// Partial update of a villa number
///
/// Same pipeline as the villa patch endpoint; the referenced villa is
/// re-checked when the patch moves the number to another villa.
pub(super) async fn patch_villa_number(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonExtractor(document): JsonExtractor<PatchDocument>,
) -> Result<Response, ApiError> {
    if document.is_empty() {
        return Err(ApiError::BadRequest("Patch document is empty".to_string()));
    }

    let number = state
        .villa_numbers
        .get(
            Box::new(move |n: &VillaNumber| n.villa_no == id),
            QueryOptions::untracked(),
        )
        .await?
        .ok_or_else(|| {
            error!("Villa number not found for partial update: {}", id);
            ApiError::NotFound(format!("Villa number {id} not found"))
        })?;

    let shape = VillaNumberUpdateDto::from(number);
    let patched = apply_to(&shape, &document).map_err(ApiError::Validation)?;

    if patched.villa_no != id {
        return Err(ApiError::Validation(vec![
            "Identity cannot be patched".to_string()
        ]));
    }

    let errors = patched.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    if !state.villa_numbers.villa_exists(patched.villa_id).await? {
        return Err(ApiError::Validation(vec![
            "Villa ID is invalid!".to_string()
        ]));
    }

    state.villa_numbers.update(patched.into()).await?;

    info!("Villa number was partially updated: {}", id);
    Ok((StatusCode::OK, Json(ApiResponse::ok_empty(204))).into_response())
}

/// Delete a villa number (admin only)
pub(super) async fn delete_villa_number(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<i32>,
) -> Result<Response, ApiError> {
    let number = state
        .villa_numbers
        .get(
            Box::new(move |n: &VillaNumber| n.villa_no == id),
            QueryOptions::untracked(),
        )
        .await?
        .ok_or_else(|| {
            error!("Villa number not found for deletion: {}", id);
            ApiError::NotFound(format!("Villa number {id} not found"))
        })?;

    state.villa_numbers.remove(&number).await?;

    info!("Villa number was removed: {}", id);
    Ok((StatusCode::OK, Json(ApiResponse::ok_empty(204))).into_response())
}
