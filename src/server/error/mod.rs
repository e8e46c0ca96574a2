//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum is the
//! classified failure produced by the operation pipeline, plus a few startup-only
//! variants. `DataError` is the unclassified failure produced by the data layer.

pub mod config;
pub mod data;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, data::DataError},
};

/// Top-level application error type.
///
/// Request handling only ever produces the four classified variants
/// (`InvalidArgument`, `ValidationFailure`, `NotFound`, `StorageFailure`). The
/// remaining variants are raised during startup and map to a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// A precondition on the operation input failed.
    ///
    /// Raised for a missing entity, a non-zero id on create, a non-positive id
    /// on lookup, update and delete, and for requests whose body, path or query
    /// cannot be extracted. Results in 400 Bad Request.
    #[error("{0}")]
    InvalidArgument(String),

    /// The entity failed field validation.
    ///
    /// Carries every violation found, not just the first. Results in 400 Bad
    /// Request with the violations listed in the body.
    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailure(Vec<String>),

    /// Entity with the requested id does not exist.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{message}")]
    NotFound {
        /// Client facing description of the missing record
        message: String,
        /// The data layer lookup that found nothing
        #[source]
        source: DataError,
    },

    /// The store failed while executing an otherwise valid operation.
    ///
    /// The message is safe to show to clients; the underlying `DataError` is
    /// logged by the pipeline. Results in 500 Internal Server Error.
    #[error("{message}")]
    StorageFailure {
        /// Client facing description of the failed operation
        message: String,
        /// The data layer failure that caused it
        #[source]
        source: DataError,
    },

    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database error from SeaORM outside request handling (connection, migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Socket error while binding or serving.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// HTTP status code the boundary adapter uses for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) | Self::ValidationFailure(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::StorageFailure { .. } | Self::ConfigErr(_) | Self::DbErr(_) | Self::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidArgument` and `ValidationFailure`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For `StorageFailure` and the startup variants
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            Self::ValidationFailure(violations) => (
                status,
                Json(ErrorDto {
                    error: "Validation failed".to_string(),
                    violations,
                }),
            )
                .into_response(),
            Self::InvalidArgument(msg) => (status, Json(ErrorDto::new(msg))).into_response(),
            Self::NotFound { message, .. } | Self::StorageFailure { message, .. } => {
                (status, Json(ErrorDto::new(message))).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error")),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_failure() -> AppError {
        AppError::StorageFailure {
            message: "Can't create Faculty".to_string(),
            source: DataError::storage(
                "Faculty",
                "create",
                sea_orm::DbErr::Custom("disk I/O error".to_string()),
            ),
        }
    }

    fn not_found() -> AppError {
        AppError::NotFound {
            message: "Faculty with id 7 not found".to_string(),
            source: DataError::not_found("Faculty", 7),
        }
    }

    /// Tests the status code mapping of every classified failure.
    ///
    /// Expected: 400, 400, 404 and 500 respectively
    #[test]
    fn maps_classified_failures_to_status_codes() {
        let cases = [
            (AppError::InvalidArgument("bad".into()), StatusCode::BAD_REQUEST),
            (
                AppError::ValidationFailure(vec!["name is blank".into()]),
                StatusCode::BAD_REQUEST,
            ),
            (not_found(), StatusCode::NOT_FOUND),
            (storage_failure(), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    /// Tests that startup failures surface as a generic 500.
    ///
    /// Expected: 500 Internal Server Error
    #[test]
    fn maps_startup_failures_to_internal_error() {
        let err = AppError::ConfigErr(ConfigError::MissingEnvVar("DATABASE_URL".into()));

        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    /// Tests that the validation failure message lists every violation.
    ///
    /// Expected: violations joined with "; "
    #[test]
    fn validation_failure_lists_all_violations() {
        let err = AppError::ValidationFailure(vec!["first".into(), "second".into()]);

        assert_eq!(err.to_string(), "Validation failed: first; second");
    }

    /// Tests that a storage failure keeps the data error as its source.
    ///
    /// Expected: source chain contains the store operation
    #[test]
    fn storage_failure_keeps_source() {
        use std::error::Error;

        let err = storage_failure();
        let source = err.source().map(ToString::to_string);

        assert_eq!(err.to_string(), "Can't create Faculty");
        assert!(source.is_some_and(|s| s.starts_with("Failed to create Faculty")));
    }

    /// Tests that a not found failure keeps the data error as its source.
    ///
    /// Expected: source is the `DataError::NotFound` of the same entity and id
    #[test]
    fn not_found_keeps_source() {
        use std::error::Error;

        let err = not_found();
        let source = err
            .source()
            .and_then(|source| source.downcast_ref::<DataError>());

        assert_eq!(err.to_string(), "Faculty with id 7 not found");
        assert!(matches!(
            source,
            Some(DataError::NotFound {
                entity: "Faculty",
                id: 7
            })
        ));
    }
}
