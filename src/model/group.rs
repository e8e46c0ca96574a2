use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A student group. The owning faculty is given by the `faculty-id` query parameter
/// on create and update and returned here on reads.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct GroupDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub faculty_id: i32,
}
