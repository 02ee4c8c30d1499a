use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::DbError;
use crate::domain::csv::CsvError;
use crate::domain::validation::ValidationErrors;
use crate::email::EmailError;

pub const LOCATION_IN_USE: &str = "Location may still be linked to assets or employees";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": "Validation failed", "fields": errors }),
            ),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, json!({ "error": msg })),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, json!({ "error": msg })),
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg }))
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionError(msg) | DbError::QueryError(msg) => ApiError::DatabaseError(msg),
            DbError::ConstraintViolation(msg) => ApiError::Conflict(msg),
            DbError::Duplicate(msg) => ApiError::Conflict(format!("Duplicate value: {}", msg)),
            DbError::StaleWrite(msg) => ApiError::Conflict(msg),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<CsvError> for ApiError {
    fn from(err: CsvError) -> Self {
        ApiError::InvalidRequest(err.to_string())
    }
}

impl From<EmailError> for ApiError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::ClientBuild(msg) => ApiError::InternalError(msg),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::InvalidRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Validation(ValidationErrors::new()), StatusCode::UNPROCESSABLE_ENTITY),
            (ApiError::Conflict("x".into()), StatusCode::CONFLICT),
            (ApiError::Upstream("x".into()), StatusCode::BAD_GATEWAY),
            (ApiError::DatabaseError("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_db_errors_map_to_conflict() {
        assert!(matches!(
            ApiError::from(DbError::StaleWrite("s".into())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(DbError::ConstraintViolation("fk".into())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(DbError::QueryError("q".into())),
            ApiError::DatabaseError(_)
        ));
    }

    #[test]
    fn test_empty_export_is_bad_request() {
        match ApiError::from(CsvError::Empty) {
            ApiError::InvalidRequest(msg) => assert_eq!(msg, "No data to export"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
