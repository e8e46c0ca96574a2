//! Request extractors that report malformed input as `AppError`.
//!
//! Axum's own `Json`, `Path` and `Query` extractors answer with their own status
//! codes and plain text bodies (415, 422 and so on). These wrappers run the same
//! extraction but turn every rejection into `AppError::InvalidArgument`, so a
//! malformed request gets a 400 with an `ErrorDto` like any other invalid argument.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    Json,
};

use crate::server::error::AppError;

/// JSON request body, e.g. `JsonBody(payload): JsonBody<Option<FacultyDto>>`.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Path parameters, e.g. `PathParam(id): PathParam<i32>`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

/// Query string parameters, e.g. `QueryParams(params): QueryParams<GroupIdParam>`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);

fn malformed(part: &str, reason: String) -> AppError {
    tracing::warn!(part, reason = %reason, "Malformed request");
    AppError::InvalidArgument(format!("Malformed request {}: {}", part, reason))
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        malformed("body", rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        malformed("path", rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        malformed("query", rejection.body_text())
    }
}
