//! HTTP request handlers.
//!
//! Controllers are the boundary adapter: they convert DTOs to domain models, resolve
//! side-channel query parameters (such as `faculty-id`) through lookups, call a
//! service and convert the result back. Failures are returned as `AppError`, whose
//! `IntoResponse` implementation picks the status code.

pub mod extract;
pub mod faculty;
pub mod group;
pub mod lecturer;
pub mod lesson;
pub mod lesson_time;
pub mod schedule;
pub mod student;

#[cfg(test)]
mod test;

use serde::Deserialize;

use crate::model::api::MessageDto;

/// Query parameter naming the faculty a group belongs to.
#[derive(Deserialize, Debug)]
pub struct FacultyIdParam {
    #[serde(rename = "faculty-id")]
    pub faculty_id: i32,
}

/// Query parameter naming the group of a student or a schedule.
#[derive(Deserialize, Debug)]
pub struct GroupIdParam {
    #[serde(rename = "group-id")]
    pub group_id: i32,
}

/// Confirmation returned after a successful delete, e.g. "Faculty with id: 3 was deleted."
pub(crate) fn deleted(kind: &str, id: i32) -> MessageDto {
    MessageDto {
        message: format!("{} with id: {} was deleted.", kind, id),
    }
}
