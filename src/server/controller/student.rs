use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        person::StudentDto,
    },
    server::{
        controller::{
            deleted,
            extract::{JsonBody, PathParam, QueryParams},
            GroupIdParam,
        },
        error::AppError,
        model::{person::Student, DomainModel},
        service::{group::GroupService, student::StudentService},
        state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "students";

/// Resolves the `group-id` parameter before the student itself is checked.
async fn with_group(
    state: &AppState,
    group_id: i32,
    payload: Option<StudentDto>,
) -> Result<Option<Student>, AppError> {
    let group = GroupService::new(&state.db).get_by_id(group_id).await?;

    Ok(payload.map(|dto| Student {
        group_id: group.id,
        ..Student::from_dto(dto)
    }))
}

#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;
    let dtos: Vec<StudentDto> = students.into_iter().map(Student::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved student", body = StudentDto),
        (status = 400, description = "Id is not positive", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Enroll a student into the group given by `group-id`.
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    params(
        ("group-id" = i32, Query, description = "Group the student belongs to")
    ),
    request_body = StudentDto,
    responses(
        (status = 200, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<GroupIdParam>,
    JsonBody(payload): JsonBody<Option<StudentDto>>,
) -> Result<impl IntoResponse, AppError> {
    let student = with_group(&state, params.group_id, payload).await?;

    let student = StudentService::new(&state.db).create(student).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Update a student, moving them to the group given by `group-id`.
#[utoipa::path(
    patch,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id"),
        ("group-id" = i32, Query, description = "Group the student belongs to")
    ),
    request_body = StudentDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Student or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    QueryParams(params): QueryParams<GroupIdParam>,
    JsonBody(payload): JsonBody<Option<StudentDto>>,
) -> Result<impl IntoResponse, AppError> {
    let student = with_group(&state, params.group_id, payload)
        .await?
        .map(|mut student| {
            student.set_id(id);
            student
        });

    let student = StudentService::new(&state.db).update(student).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Successfully deleted student", body = MessageDto),
        (status = 400, description = "Id is not positive", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete_by_id(id).await?;

    Ok((StatusCode::OK, Json(deleted(Student::KIND, id))))
}
