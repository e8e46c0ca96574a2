use chrono::NaiveTime;

use crate::{model::lesson_time::LessonTimeDto, server::model::DomainModel};

/// A daily time slot shared by lessons, e.g. the first pair from 08:30 to 10:05.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonTime {
    pub id: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl LessonTime {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::lesson_time::Model) -> Self {
        Self {
            id: entity.id,
            start_time: entity.start_time,
            end_time: entity.end_time,
        }
    }

    pub fn from_dto(dto: LessonTimeDto) -> Self {
        Self {
            id: dto.id,
            start_time: dto.start_time,
            end_time: dto.end_time,
        }
    }

    pub fn into_dto(self) -> LessonTimeDto {
        LessonTimeDto {
            id: self.id,
            start_time: self.start_time,
            end_time: self.end_time,
        }
    }

    /// Whether two slots share any instant. Touching slots (one ends when the
    /// other starts) do not overlap.
    pub fn overlaps(&self, other: &LessonTime) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }
}

impl DomainModel for LessonTime {
    const KIND: &'static str = "LessonTime";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}
