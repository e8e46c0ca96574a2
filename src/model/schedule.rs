use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::{lesson::DayOfWeekDto, lesson_time::LessonTimeDto};

/// A lesson with its time slot resolved, as listed in week and month schedules.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ScheduledLessonDto {
    pub id: i32,
    pub name: String,
    pub audience: String,
    pub day: DayOfWeekDto,
    pub lecturer_id: i32,
    pub group_id: i32,
    pub lesson_time: LessonTimeDto,
}

/// Lessons keyed by day of week. Days without lessons are omitted.
pub type WeekScheduleDto = BTreeMap<DayOfWeekDto, Vec<ScheduledLessonDto>>;

/// Lessons keyed by calendar date (`yyyy-mm-dd`). Dates without lessons are omitted.
pub type MonthScheduleDto = BTreeMap<NaiveDate, Vec<ScheduledLessonDto>>;
