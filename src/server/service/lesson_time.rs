use sea_orm::DatabaseConnection;

use crate::server::{
    data::lesson_time::LessonTimeRepository,
    service::{pipeline::Pipeline, validation::FieldValidator},
};

/// Lesson time operations run through the pipeline with the default field rules.
pub type LessonTimeService<'a> = Pipeline<LessonTimeRepository<'a>, FieldValidator>;

impl<'a> LessonTimeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Pipeline::with_validator(LessonTimeRepository::new(db), FieldValidator)
    }
}
