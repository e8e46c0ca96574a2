use sea_orm::DatabaseConnection;

use crate::server::{
    data::lesson::LessonRepository,
    service::{pipeline::Pipeline, validation::FieldValidator},
};

/// Lesson operations. The lesson time, lecturer and group must be resolved by the
/// caller first.
pub type LessonService<'a> = Pipeline<LessonRepository<'a>, FieldValidator>;

impl<'a> LessonService<'a> {
    /// Creates the service; with `strict_slots` a lesson that overlaps another lesson
    /// of the same lecturer or group on the same day fails validation.
    pub fn new(db: &'a DatabaseConnection, strict_slots: bool) -> Self {
        Pipeline::with_validator(
            LessonRepository::new(db).with_slot_check(strict_slots),
            FieldValidator,
        )
    }
}
