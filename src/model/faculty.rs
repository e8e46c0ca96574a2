use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct FacultyDto {
    /// Zero or omitted when creating
    #[serde(default)]
    pub id: i32,
    pub name: String,
}
