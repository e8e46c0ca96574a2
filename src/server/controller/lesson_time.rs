use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        lesson_time::LessonTimeDto,
    },
    server::{
        controller::{
            deleted,
            extract::{JsonBody, PathParam},
        },
        error::AppError,
        model::{lesson_time::LessonTime, DomainModel},
        service::lesson_time::LessonTimeService,
        state::AppState,
    },
};

/// Tag for grouping lesson time endpoints in OpenAPI documentation
pub static LESSON_TIME_TAG: &str = "lesson-time-parameters";

/// Get all lesson times ordered by start time.
#[utoipa::path(
    get,
    path = "/lesson-time-parameters",
    tag = LESSON_TIME_TAG,
    responses(
        (status = 200, description = "Successfully retrieved lesson times", body = Vec<LessonTimeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson_times(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let lesson_times = LessonTimeService::new(&state.db).get_all().await?;
    let dtos: Vec<LessonTimeDto> = lesson_times
        .into_iter()
        .map(LessonTime::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/lesson-time-parameters/{id}",
    tag = LESSON_TIME_TAG,
    params(
        ("id" = i32, Path, description = "Lesson time id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved lesson time", body = LessonTimeDto),
        (status = 400, description = "Id is not positive", body = ErrorDto),
        (status = 404, description = "Lesson time not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson_time(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let lesson_time = LessonTimeService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(lesson_time.into_dto())))
}

/// Create a lesson time. The start time must be before the end time.
#[utoipa::path(
    post,
    path = "/lesson-time-parameters",
    tag = LESSON_TIME_TAG,
    request_body = LessonTimeDto,
    responses(
        (status = 200, description = "Successfully created lesson time", body = LessonTimeDto),
        (status = 400, description = "Invalid lesson time data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_lesson_time(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Option<LessonTimeDto>>,
) -> Result<impl IntoResponse, AppError> {
    let lesson_time = LessonTimeService::new(&state.db)
        .create(payload.map(LessonTime::from_dto))
        .await?;

    Ok((StatusCode::OK, Json(lesson_time.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/lesson-time-parameters/{id}",
    tag = LESSON_TIME_TAG,
    params(
        ("id" = i32, Path, description = "Lesson time id")
    ),
    request_body = LessonTimeDto,
    responses(
        (status = 200, description = "Successfully updated lesson time", body = LessonTimeDto),
        (status = 400, description = "Invalid lesson time data", body = ErrorDto),
        (status = 404, description = "Lesson time not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_lesson_time(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<Option<LessonTimeDto>>,
) -> Result<impl IntoResponse, AppError> {
    let lesson_time = payload.map(|dto| {
        let mut lesson_time = LessonTime::from_dto(dto);
        lesson_time.set_id(id);
        lesson_time
    });

    let lesson_time = LessonTimeService::new(&state.db).update(lesson_time).await?;

    Ok((StatusCode::OK, Json(lesson_time.into_dto())))
}

/// Delete a lesson time together with every lesson scheduled in it.
#[utoipa::path(
    delete,
    path = "/lesson-time-parameters/{id}",
    tag = LESSON_TIME_TAG,
    params(
        ("id" = i32, Path, description = "Lesson time id")
    ),
    responses(
        (status = 200, description = "Successfully deleted lesson time", body = MessageDto),
        (status = 400, description = "Id is not positive", body = ErrorDto),
        (status = 404, description = "Lesson time not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_lesson_time(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    LessonTimeService::new(&state.db).delete_by_id(id).await?;

    Ok((StatusCode::OK, Json(deleted(LessonTime::KIND, id))))
}
