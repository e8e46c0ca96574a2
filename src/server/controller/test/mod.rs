use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    controller::extract::{JsonBody, PathParam, QueryParams},
    state::AppState,
};

mod group;
mod lesson;
mod malformed;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Reads a JSON response body.
async fn body<T: DeserializeOwned>(response: Response) -> Result<T, Box<dyn std::error::Error>> {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

    Ok(serde_json::from_slice(&bytes)?)
}
