//! Lesson time factory for creating test lesson time slots.

use chrono::NaiveTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating lesson time slots. Defaults to 09:00-10:30.
///
/// # Example
///
/// ```rust,ignore
/// let slot = LessonTimeFactory::new(&db)
///     .hours(11, 0, 12, 30)
///     .build()
///     .await?;
/// ```
pub struct LessonTimeFactory<'a> {
    db: &'a DatabaseConnection,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl<'a> LessonTimeFactory<'a> {
    /// Creates a new factory with the default 09:00-10:30 slot.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap_or_default(),
        }
    }

    /// Sets the slot start time.
    pub fn start_time(mut self, start_time: NaiveTime) -> Self {
        self.start_time = start_time;
        self
    }

    /// Sets the slot end time.
    pub fn end_time(mut self, end_time: NaiveTime) -> Self {
        self.end_time = end_time;
        self
    }

    /// Sets start and end from hour/minute pairs.
    pub fn hours(self, start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Self {
        let start = NaiveTime::from_hms_opt(start_hour, start_min, 0).unwrap_or_default();
        let end = NaiveTime::from_hms_opt(end_hour, end_min, 0).unwrap_or_default();
        self.start_time(start).end_time(end)
    }

    /// Builds and inserts the lesson time entity into the database.
    pub async fn build(self) -> Result<entity::lesson_time::Model, DbErr> {
        entity::lesson_time::ActiveModel {
            id: ActiveValue::NotSet,
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 09:00-10:30 lesson time.
pub async fn create_lesson_time(
    db: &DatabaseConnection,
) -> Result<entity::lesson_time::Model, DbErr> {
    LessonTimeFactory::new(db).build().await
}
