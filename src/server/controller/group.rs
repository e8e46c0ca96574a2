use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        group::GroupDto,
    },
    server::{
        controller::{
            deleted,
            extract::{JsonBody, PathParam, QueryParams},
            FacultyIdParam,
        },
        error::AppError,
        model::{group::Group, DomainModel},
        service::{faculty::FacultyService, group::GroupService},
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "groups";

/// Resolves the `faculty-id` parameter and attaches the faculty to the group.
///
/// The lookup runs before the group is checked, so an unknown faculty is reported
/// as not found even when the body is missing.
async fn with_faculty(
    state: &AppState,
    faculty_id: i32,
    payload: Option<GroupDto>,
) -> Result<Option<Group>, AppError> {
    let faculty = FacultyService::new(&state.db).get_by_id(faculty_id).await?;

    Ok(payload.map(|dto| Group {
        faculty_id: faculty.id,
        ..Group::from_dto(dto)
    }))
}

/// Get all groups.
///
/// # Returns
/// - `200 OK` - Every group ordered by id, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "Successfully retrieved groups", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).get_all().await?;
    let dtos: Vec<GroupDto> = groups.into_iter().map(Group::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a group by id.
#[utoipa::path(
    get,
    path = "/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved group", body = GroupDto),
        (status = 400, description = "Id is not positive", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Create a group in the faculty given by `faculty-id`.
///
/// # Returns
/// - `200 OK` - The stored group
/// - `400 Bad Request` - Missing body, id set, invalid name or faculty id not positive
/// - `404 Not Found` - Faculty not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/groups",
    tag = GROUP_TAG,
    params(
        ("faculty-id" = i32, Query, description = "Faculty the group belongs to")
    ),
    request_body = GroupDto,
    responses(
        (status = 200, description = "Successfully created group", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 404, description = "Faculty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<FacultyIdParam>,
    JsonBody(payload): JsonBody<Option<GroupDto>>,
) -> Result<impl IntoResponse, AppError> {
    let group = with_faculty(&state, params.faculty_id, payload).await?;

    let group = GroupService::new(&state.db).create(group).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Update a group, moving it to the faculty given by `faculty-id`.
///
/// The path id replaces any id in the body.
#[utoipa::path(
    patch,
    path = "/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id"),
        ("faculty-id" = i32, Query, description = "Faculty the group belongs to")
    ),
    request_body = GroupDto,
    responses(
        (status = 200, description = "Successfully updated group", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ErrorDto),
        (status = 404, description = "Group or faculty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    QueryParams(params): QueryParams<FacultyIdParam>,
    JsonBody(payload): JsonBody<Option<GroupDto>>,
) -> Result<impl IntoResponse, AppError> {
    let group = with_faculty(&state, params.faculty_id, payload)
        .await?
        .map(|mut group| {
            group.set_id(id);
            group
        });

    let group = GroupService::new(&state.db).update(group).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group.
///
/// A group that still has students cannot be deleted; its lessons are removed with it.
#[utoipa::path(
    delete,
    path = "/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id")
    ),
    responses(
        (status = 200, description = "Successfully deleted group", body = MessageDto),
        (status = 400, description = "Id is not positive", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    GroupService::new(&state.db).delete_by_id(id).await?;

    Ok((StatusCode::OK, Json(deleted(Group::KIND, id))))
}
