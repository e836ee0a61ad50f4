use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use ectopica_cases::error::{CaseError, LifecycleError, StoreError};
use ectopica_core::error::CoreError;
use ectopica_scoring::error::ScoringError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    TooManyRequests { retry_after_secs: u64 },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::TooManyRequests { retry_after_secs } => {
                let mut response = (
                    StatusCode::TOO_MANY_REQUESTS,
                    Json(ErrorBody {
                        error: "too many requests".to_string(),
                    }),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
                return response;
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ScoringError> for ApiError {
    fn from(e: ScoringError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::VisitAlreadyRecorded(_)
            | CoreError::VisitOutOfOrder { .. }
            | CoreError::VisitLogFull => ApiError::Conflict(e.to_string()),
            CoreError::InvalidVisitNumber(_) | CoreError::InvalidFolio(_) => {
                ApiError::BadRequest(e.to_string())
            }
        }
    }
}

impl From<CaseError> for ApiError {
    fn from(e: CaseError) -> Self {
        match e {
            CaseError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            CaseError::Scoring(inner) => inner.into(),
            CaseError::Core(inner) | CaseError::Lifecycle(LifecycleError::Visit(inner)) => {
                inner.into()
            }
            CaseError::Lifecycle(inner) => ApiError::Conflict(inner.to_string()),
            CaseError::Store(StoreError::VersionMismatch { .. }) => {
                ApiError::Conflict(e.to_string())
            }
            CaseError::Store(StoreError::InvalidKey(key)) => {
                ApiError::BadRequest(format!("invalid folio: {key}"))
            }
            CaseError::Store(other) => ApiError::Internal(other.to_string()),
        }
    }
}
