//! Error types and their HTTP mapping.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("no such key: {0}")]
    InvalidKey(String),
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Storage failures on a write are the caller's fault: duplicate keys,
    /// dangling foreign keys and the like.
    pub fn rejected_write(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => ApiError::Database(err),
            other => ApiError::BadRequest(other.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::InvalidKey(_) => StatusCode::NOT_FOUND,
            ApiError::Database(DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        tracing::Span::current().record("error", message.as_str());
        if status.is_server_error() {
            tracing::error!(error = %message, "request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// A key segment that does not parse as the key type cannot name a row.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidKey(rejection.body_text())
    }
}

/// `axum::extract::Path` with unparseable keys reported as a JSON 404.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// `axum::Json` with body errors reported as 400 instead of axum's 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_entity_name() {
        let err = ApiError::NotFound("Caregiver");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Caregiver not found");
    }

    #[test]
    fn constraint_failures_on_write_are_bad_requests() {
        let err = ApiError::rejected_write(DbErr::Custom("UNIQUE constraint failed".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("UNIQUE constraint failed"));
    }

    #[test]
    fn missing_record_on_write_stays_not_found() {
        let err = ApiError::rejected_write(DbErr::RecordNotUpdated);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unparseable_key_maps_to_404() {
        let err = ApiError::InvalidKey("Cannot parse \"abc\" to a i32".into());
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert!(err.to_string().starts_with("no such key"));
    }

    #[test]
    fn other_database_errors_are_internal() {
        let err = ApiError::from(DbErr::Conn(sea_orm::RuntimeErr::Internal("down".into())));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
