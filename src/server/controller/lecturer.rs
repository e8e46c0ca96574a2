use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        person::LecturerDto,
    },
    server::{
        controller::{
            deleted,
            extract::{JsonBody, PathParam},
        },
        error::AppError,
        model::{person::Lecturer, DomainModel},
        service::lecturer::LecturerService,
        state::AppState,
    },
};

/// Tag for grouping lecturer endpoints in OpenAPI documentation
pub static LECTURER_TAG: &str = "lecturers";

#[utoipa::path(
    get,
    path = "/lecturers",
    tag = LECTURER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved lecturers", body = Vec<LecturerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lecturers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let lecturers = LecturerService::new(&state.db).get_all().await?;
    let dtos: Vec<LecturerDto> = lecturers.into_iter().map(Lecturer::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/lecturers/{id}",
    tag = LECTURER_TAG,
    params(
        ("id" = i32, Path, description = "Lecturer id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved lecturer", body = LecturerDto),
        (status = 400, description = "Id is not positive", body = ErrorDto),
        (status = 404, description = "Lecturer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lecturer(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let lecturer = LecturerService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(lecturer.into_dto())))
}

/// Create a lecturer.
///
/// Names need two leading non-blank symbols, the phone number is `+` and twelve
/// digits, and the email must be well formed. All violations are reported together.
#[utoipa::path(
    post,
    path = "/lecturers",
    tag = LECTURER_TAG,
    request_body = LecturerDto,
    responses(
        (status = 200, description = "Successfully created lecturer", body = LecturerDto),
        (status = 400, description = "Invalid lecturer data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_lecturer(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Option<LecturerDto>>,
) -> Result<impl IntoResponse, AppError> {
    let lecturer = LecturerService::new(&state.db)
        .create(payload.map(Lecturer::from_dto))
        .await?;

    Ok((StatusCode::OK, Json(lecturer.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/lecturers/{id}",
    tag = LECTURER_TAG,
    params(
        ("id" = i32, Path, description = "Lecturer id")
    ),
    request_body = LecturerDto,
    responses(
        (status = 200, description = "Successfully updated lecturer", body = LecturerDto),
        (status = 400, description = "Invalid lecturer data", body = ErrorDto),
        (status = 404, description = "Lecturer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_lecturer(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<Option<LecturerDto>>,
) -> Result<impl IntoResponse, AppError> {
    let lecturer = payload.map(|dto| {
        let mut lecturer = Lecturer::from_dto(dto);
        lecturer.set_id(id);
        lecturer
    });

    let lecturer = LecturerService::new(&state.db).update(lecturer).await?;

    Ok((StatusCode::OK, Json(lecturer.into_dto())))
}

/// Delete a lecturer together with every lesson they teach.
#[utoipa::path(
    delete,
    path = "/lecturers/{id}",
    tag = LECTURER_TAG,
    params(
        ("id" = i32, Path, description = "Lecturer id")
    ),
    responses(
        (status = 200, description = "Successfully deleted lecturer", body = MessageDto),
        (status = 400, description = "Id is not positive", body = ErrorDto),
        (status = 404, description = "Lecturer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_lecturer(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    LecturerService::new(&state.db).delete_by_id(id).await?;

    Ok((StatusCode::OK, Json(deleted(Lecturer::KIND, id))))
}
