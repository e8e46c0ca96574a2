//! Week and month schedule endpoints for groups and lecturers.
//!
//! Week schedules are keyed by day name (`MONDAY`..`SUNDAY`), month schedules by
//! calendar date (`yyyy-mm-dd`). Keys without lessons are omitted and lessons within
//! a key are ordered by start time.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::{
    model::{
        api::ErrorDto,
        schedule::{MonthScheduleDto, ScheduledLessonDto, WeekScheduleDto},
    },
    server::{
        controller::{extract::QueryParams, GroupIdParam},
        error::AppError,
        model::schedule::{MonthSchedule, ScheduledLesson, Subject, WeekSchedule, YearMonth},
        service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

#[derive(Deserialize, Debug)]
pub struct LecturerIdParam {
    #[serde(rename = "lecturer-id")]
    pub lecturer_id: i32,
}

#[derive(Deserialize, Debug)]
pub struct GroupMonthParams {
    #[serde(rename = "group-id")]
    pub group_id: i32,
    #[serde(rename = "month-value")]
    pub month_value: String,
}

#[derive(Deserialize, Debug)]
pub struct LecturerMonthParams {
    #[serde(rename = "lecturer-id")]
    pub lecturer_id: i32,
    #[serde(rename = "month-value")]
    pub month_value: String,
}

fn into_dtos(lessons: Vec<ScheduledLesson>) -> Vec<ScheduledLessonDto> {
    lessons.into_iter().map(ScheduledLesson::into_dto).collect()
}

fn week_dto(week: WeekSchedule) -> WeekScheduleDto {
    week.into_iter()
        .map(|(day, lessons)| (day.into(), into_dtos(lessons)))
        .collect()
}

fn month_dto(month: MonthSchedule) -> MonthScheduleDto {
    month
        .into_iter()
        .map(|(date, lessons)| (date, into_dtos(lessons)))
        .collect()
}

async fn week_lessons(state: &AppState, subject: Subject) -> Result<impl IntoResponse, AppError> {
    let week = ScheduleService::new(&state.db).week_lessons(subject).await?;

    Ok((StatusCode::OK, Json(week_dto(week))))
}

async fn month_lessons(
    state: &AppState,
    subject: Subject,
    month_value: &str,
) -> Result<impl IntoResponse, AppError> {
    let month: YearMonth = month_value.parse()?;

    let schedule = ScheduleService::new(&state.db)
        .month_lessons(subject, month)
        .await?;

    Ok((StatusCode::OK, Json(month_dto(schedule))))
}

/// Get the weekly lessons of a group.
///
/// # Returns
/// - `200 OK` - Lessons keyed by day of week, empty for a group without lessons
/// - `400 Bad Request` - Group id is not positive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/week-lessons/find-for-group",
    tag = SCHEDULE_TAG,
    params(
        ("group-id" = i32, Query, description = "Group id")
    ),
    responses(
        (status = 200, description = "Lessons keyed by day of week", body = BTreeMap<String, Vec<ScheduledLessonDto>>),
        (status = 400, description = "Group id is not positive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_week_lessons_for_group(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<GroupIdParam>,
) -> Result<impl IntoResponse, AppError> {
    week_lessons(&state, Subject::Group(params.group_id)).await
}

/// Get the weekly lessons of a lecturer.
#[utoipa::path(
    get,
    path = "/week-lessons/find-for-lecturer",
    tag = SCHEDULE_TAG,
    params(
        ("lecturer-id" = i32, Query, description = "Lecturer id")
    ),
    responses(
        (status = 200, description = "Lessons keyed by day of week", body = BTreeMap<String, Vec<ScheduledLessonDto>>),
        (status = 400, description = "Lecturer id is not positive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_week_lessons_for_lecturer(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<LecturerIdParam>,
) -> Result<impl IntoResponse, AppError> {
    week_lessons(&state, Subject::Lecturer(params.lecturer_id)).await
}

/// Get the lessons of a group on every date of a month.
///
/// # Returns
/// - `200 OK` - Lessons keyed by date, only dates with lessons are present
/// - `400 Bad Request` - Group id is not positive or month is not `yyyy-mm`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/month-lessons/find-for-group",
    tag = SCHEDULE_TAG,
    params(
        ("group-id" = i32, Query, description = "Group id"),
        ("month-value" = String, Query, description = "Month in yyyy-mm format, e.g. 2021-03")
    ),
    responses(
        (status = 200, description = "Lessons keyed by date", body = BTreeMap<String, Vec<ScheduledLessonDto>>),
        (status = 400, description = "Invalid group id or month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_month_lessons_for_group(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<GroupMonthParams>,
) -> Result<impl IntoResponse, AppError> {
    month_lessons(&state, Subject::Group(params.group_id), &params.month_value).await
}

/// Get the lessons of a lecturer on every date of a month.
#[utoipa::path(
    get,
    path = "/month-lessons/find-for-lecturer",
    tag = SCHEDULE_TAG,
    params(
        ("lecturer-id" = i32, Query, description = "Lecturer id"),
        ("month-value" = String, Query, description = "Month in yyyy-mm format, e.g. 2021-03")
    ),
    responses(
        (status = 200, description = "Lessons keyed by date", body = BTreeMap<String, Vec<ScheduledLessonDto>>),
        (status = 400, description = "Invalid lecturer id or month", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_month_lessons_for_lecturer(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<LecturerMonthParams>,
) -> Result<impl IntoResponse, AppError> {
    month_lessons(
        &state,
        Subject::Lecturer(params.lecturer_id),
        &params.month_value,
    )
    .await
}
