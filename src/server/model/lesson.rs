use chrono::Weekday;
use entity::sea_orm_active_enums::DayOfWeek;

use crate::{
    model::lesson::{DayOfWeekDto, LessonDto},
    server::model::DomainModel,
};

/// A weekly recurring lesson of one group with one lecturer in one time slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: i32,
    pub name: String,
    pub audience: String,
    pub day: DayOfWeek,
    pub lesson_time_id: i32,
    pub lecturer_id: i32,
    pub group_id: i32,
}

impl Lesson {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::lesson::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            audience: entity.audience,
            day: entity.day,
            lesson_time_id: entity.lesson_time_id,
            lecturer_id: entity.lecturer_id,
            group_id: entity.group_id,
        }
    }

    pub fn from_dto(dto: LessonDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            audience: dto.audience,
            day: dto.day.into(),
            lesson_time_id: dto.lesson_time_id,
            lecturer_id: dto.lecturer_id,
            group_id: dto.group_id,
        }
    }

    pub fn into_dto(self) -> LessonDto {
        LessonDto {
            id: self.id,
            name: self.name,
            audience: self.audience,
            day: self.day.into(),
            lesson_time_id: self.lesson_time_id,
            lecturer_id: self.lecturer_id,
            group_id: self.group_id,
        }
    }
}

impl DomainModel for Lesson {
    const KIND: &'static str = "Lesson";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

/// Maps a calendar weekday onto the stored day of week.
pub fn day_of_week(weekday: Weekday) -> DayOfWeek {
    match weekday {
        Weekday::Mon => DayOfWeek::Monday,
        Weekday::Tue => DayOfWeek::Tuesday,
        Weekday::Wed => DayOfWeek::Wednesday,
        Weekday::Thu => DayOfWeek::Thursday,
        Weekday::Fri => DayOfWeek::Friday,
        Weekday::Sat => DayOfWeek::Saturday,
        Weekday::Sun => DayOfWeek::Sunday,
    }
}

impl From<DayOfWeek> for DayOfWeekDto {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => DayOfWeekDto::Monday,
            DayOfWeek::Tuesday => DayOfWeekDto::Tuesday,
            DayOfWeek::Wednesday => DayOfWeekDto::Wednesday,
            DayOfWeek::Thursday => DayOfWeekDto::Thursday,
            DayOfWeek::Friday => DayOfWeekDto::Friday,
            DayOfWeek::Saturday => DayOfWeekDto::Saturday,
            DayOfWeek::Sunday => DayOfWeekDto::Sunday,
        }
    }
}

impl From<DayOfWeekDto> for DayOfWeek {
    fn from(day: DayOfWeekDto) -> Self {
        match day {
            DayOfWeekDto::Monday => DayOfWeek::Monday,
            DayOfWeekDto::Tuesday => DayOfWeek::Tuesday,
            DayOfWeekDto::Wednesday => DayOfWeek::Wednesday,
            DayOfWeekDto::Thursday => DayOfWeek::Thursday,
            DayOfWeekDto::Friday => DayOfWeek::Friday,
            DayOfWeekDto::Saturday => DayOfWeek::Saturday,
            DayOfWeekDto::Sunday => DayOfWeek::Sunday,
        }
    }
}
