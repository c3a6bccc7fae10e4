use super::ErrorResponse;
use crate::store::store_error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kitem_core::{CoreError, StoreError, ValidationError};
use thiserror::Error;

pub const MISSING_REFERENCE: &str = "Registro referenciado não existe.";
pub const DUPLICATE_RECORD: &str = "Registro duplicado.";
const INTERNAL: &str = "Erro interno do servidor.";

/// Every failure a handler can return, mapped onto one HTTP response shape.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{}", MISSING_REFERENCE)]
    MissingReference,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: &str) -> Self {
        ApiError::NotFound(message.to_string())
    }

    /// Replaces the generic duplicate message with one naming the relation.
    pub fn duplicate_as(self, message: &str) -> Self {
        match self {
            ApiError::Duplicate(_) => ApiError::Duplicate(message.to_string()),
            other => other,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation => ApiError::Duplicate(DUPLICATE_RECORD.to_string()),
            StoreError::ForeignKeyViolation => ApiError::MissingReference,
            StoreError::Backend(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(err) => ApiError::Validation(err),
            CoreError::NotFound(message) => ApiError::NotFound(message),
            CoreError::DuplicateRelation(message) => ApiError::Duplicate(message),
            CoreError::Store(err) => err.into(),
        }
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        store_error(err).into()
    }
}

impl From<diesel::r2d2::PoolError> for ApiError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        ApiError::Internal(format!("Failed to get database connection: {err}"))
    }
}

impl From<argon2::password_hash::Error> for ApiError {
    fn from(err: argon2::password_hash::Error) -> Self {
        ApiError::Internal(format!("Failed to hash password: {err}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: err.message,
                    field: Some(err.field),
                },
            ),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, ErrorResponse::new(message)),
            ApiError::Duplicate(message) => (StatusCode::BAD_REQUEST, ErrorResponse::new(message)),
            ApiError::MissingReference => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(MISSING_REFERENCE))
            }
            ApiError::Internal(detail) => {
                tracing::error!("{}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(INTERNAL))
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                ApiError::from(ValidationError::new("tipo", "Tipo inválido")),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::not_found("Receita não encontrada."), StatusCode::NOT_FOUND),
            (
                ApiError::from(CoreError::DuplicateRelation("dup".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(StoreError::ForeignKeyViolation),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(StoreError::Backend("boom".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::from(diesel::result::Error::NotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_duplicate_as_only_rewrites_duplicates() {
        let err = ApiError::from(StoreError::UniqueViolation).duplicate_as("Já existe.");
        assert!(matches!(err, ApiError::Duplicate(ref m) if m == "Já existe."));

        let err = ApiError::MissingReference.duplicate_as("Já existe.");
        assert!(matches!(err, ApiError::MissingReference));
    }
}
