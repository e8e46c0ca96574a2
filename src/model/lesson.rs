use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Day of the week a lesson recurs on. Ordered Monday first.
#[derive(
    Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeekDto {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A weekly recurring lesson. The lesson time, lecturer and group are given by
/// query parameters on create and update and returned here on reads.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct LessonDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub audience: String,
    pub day: DayOfWeekDto,
    #[serde(default)]
    pub lesson_time_id: i32,
    #[serde(default)]
    pub lecturer_id: i32,
    #[serde(default)]
    pub group_id: i32,
}
