use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A daily time slot, e.g. 09:00:00 to 10:30:00.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct LessonTimeDto {
    #[serde(default)]
    pub id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}
