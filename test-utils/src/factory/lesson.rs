//! Lesson factory for creating weekly recurring test lessons.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::DayOfWeek;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating lessons. Defaults to a Monday lesson.
///
/// # Example
///
/// ```rust,ignore
/// let lesson = LessonFactory::new(&db, group.id, lecturer.id, slot.id)
///     .day(DayOfWeek::Wednesday)
///     .audience("B-204")
///     .build()
///     .await?;
/// ```
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::lesson::Model,
}

impl<'a> LessonFactory<'a> {
    /// Creates a new factory referencing the given group, lecturer and lesson time.
    pub fn new(
        db: &'a DatabaseConnection,
        group_id: i32,
        lecturer_id: i32,
        lesson_time_id: i32,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::lesson::Model {
                id: 0,
                name: format!("Lesson {}", id),
                audience: format!("A-{}", id),
                day: DayOfWeek::Monday,
                lesson_time_id,
                lecturer_id,
                group_id,
            },
        }
    }

    /// Sets the lesson name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the audience (room) label.
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.entity.audience = audience.into();
        self
    }

    /// Sets the day of week the lesson recurs on.
    pub fn day(mut self, day: DayOfWeek) -> Self {
        self.entity.day = day;
        self
    }

    /// Builds and inserts the lesson entity into the database.
    pub async fn build(self) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            audience: ActiveValue::Set(self.entity.audience),
            day: ActiveValue::Set(self.entity.day),
            lesson_time_id: ActiveValue::Set(self.entity.lesson_time_id),
            lecturer_id: ActiveValue::Set(self.entity.lecturer_id),
            group_id: ActiveValue::Set(self.entity.group_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Monday lesson with default values.
pub async fn create_lesson(
    db: &DatabaseConnection,
    group_id: i32,
    lecturer_id: i32,
    lesson_time_id: i32,
) -> Result<entity::lesson::Model, DbErr> {
    LessonFactory::new(db, group_id, lecturer_id, lesson_time_id)
        .build()
        .await
}
