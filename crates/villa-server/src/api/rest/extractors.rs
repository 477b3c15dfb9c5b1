//! Custom extractors and middleware
//!
//! A JSON extractor that renders body rejections as failure envelopes, and
//! the admin gate for mutating v1 endpoints.

use super::types::AppState;
use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    Json,
};
use villa_core::ApiResponse;

/// Custom JSON extractor with envelope-shaped error responses
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => {
                let error_message = match rejection {
                    JsonRejection::JsonDataError(err) => {
                        format!("Invalid JSON data: {}", err)
                    }
                    JsonRejection::JsonSyntaxError(err) => {
                        format!("JSON syntax error: {}", err)
                    }
                    JsonRejection::MissingJsonContentType(_) => {
                        "Missing 'Content-Type: application/json' header".to_string()
                    }
                    _ => format!("Failed to parse JSON: {}", rejection),
                };

                Err((
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::failure(400, vec![error_message])),
                ))
            }
        }
    }
}

/// Admin gate for mutating v1 endpoints
///
/// Token issuance and validation are external; the gate only compares the
/// presented bearer against the configured admin token. Missing or
/// malformed credentials are 401, a wrong token is 403.
pub struct RequireAdmin;

#[axum::async_trait]
impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Unauthorized)?;

        if token != state.config.admin_token {
            return Err(ApiError::Forbidden);
        }

        Ok(RequireAdmin)
    }
}
