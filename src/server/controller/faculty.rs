use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        faculty::FacultyDto,
    },
    server::{
        controller::{
            deleted,
            extract::{JsonBody, PathParam},
        },
        error::AppError,
        model::{faculty::Faculty, DomainModel},
        service::faculty::FacultyService,
        state::AppState,
    },
};

/// Tag for grouping faculty endpoints in OpenAPI documentation
pub static FACULTY_TAG: &str = "faculties";

/// Get all faculties.
///
/// # Returns
/// - `200 OK` - Every faculty ordered by id, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/faculties",
    tag = FACULTY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved faculties", body = Vec<FacultyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faculties(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = FacultyService::new(&state.db);

    let faculties = service.get_all().await?;
    let dtos: Vec<FacultyDto> = faculties.into_iter().map(Faculty::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a faculty by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Faculty id, must be positive
///
/// # Returns
/// - `200 OK` - The faculty
/// - `400 Bad Request` - Id is not positive
/// - `404 Not Found` - No faculty has the id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/faculties/{id}",
    tag = FACULTY_TAG,
    params(
        ("id" = i32, Path, description = "Faculty id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved faculty", body = FacultyDto),
        (status = 400, description = "Id is not positive", body = ErrorDto),
        (status = 404, description = "Faculty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faculty(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FacultyService::new(&state.db);

    let faculty = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(faculty.into_dto())))
}

/// Create a faculty.
///
/// The body must not carry an id (or carry `0`); the stored faculty is returned with
/// the id assigned by the store. A `null` body is rejected.
///
/// # Returns
/// - `200 OK` - The stored faculty
/// - `400 Bad Request` - Missing body, id set or invalid name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/faculties",
    tag = FACULTY_TAG,
    request_body = FacultyDto,
    responses(
        (status = 200, description = "Successfully created faculty", body = FacultyDto),
        (status = 400, description = "Invalid faculty data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_faculty(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Option<FacultyDto>>,
) -> Result<impl IntoResponse, AppError> {
    let service = FacultyService::new(&state.db);

    let faculty = service.create(payload.map(Faculty::from_dto)).await?;

    Ok((StatusCode::OK, Json(faculty.into_dto())))
}

/// Update a faculty.
///
/// The path id replaces any id in the body.
///
/// # Returns
/// - `200 OK` - The updated faculty
/// - `400 Bad Request` - Missing body, id not positive or invalid name
/// - `404 Not Found` - No faculty has the id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/faculties/{id}",
    tag = FACULTY_TAG,
    params(
        ("id" = i32, Path, description = "Faculty id")
    ),
    request_body = FacultyDto,
    responses(
        (status = 200, description = "Successfully updated faculty", body = FacultyDto),
        (status = 400, description = "Invalid faculty data", body = ErrorDto),
        (status = 404, description = "Faculty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_faculty(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<Option<FacultyDto>>,
) -> Result<impl IntoResponse, AppError> {
    let service = FacultyService::new(&state.db);

    let faculty = payload.map(|dto| {
        let mut faculty = Faculty::from_dto(dto);
        faculty.set_id(id);
        faculty
    });
    let faculty = service.update(faculty).await?;

    Ok((StatusCode::OK, Json(faculty.into_dto())))
}

/// Delete a faculty.
///
/// A faculty that still has groups cannot be deleted.
///
/// # Returns
/// - `200 OK` - Confirmation message
/// - `400 Bad Request` - Id is not positive
/// - `404 Not Found` - No faculty has the id
/// - `500 Internal Server Error` - Database error or faculty still referenced
#[utoipa::path(
    delete,
    path = "/faculties/{id}",
    tag = FACULTY_TAG,
    params(
        ("id" = i32, Path, description = "Faculty id")
    ),
    responses(
        (status = 200, description = "Successfully deleted faculty", body = MessageDto),
        (status = 400, description = "Id is not positive", body = ErrorDto),
        (status = 404, description = "Faculty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_faculty(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FacultyService::new(&state.db);

    service.delete_by_id(id).await?;

    Ok((StatusCode::OK, Json(deleted(Faculty::KIND, id))))
}
