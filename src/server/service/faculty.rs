use sea_orm::DatabaseConnection;

use crate::server::{
    data::faculty::FacultyRepository,
    service::{pipeline::Pipeline, validation::FieldValidator},
};

/// Faculty operations run through the pipeline with the default field rules.
pub type FacultyService<'a> = Pipeline<FacultyRepository<'a>, FieldValidator>;

impl<'a> FacultyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Pipeline::with_validator(FacultyRepository::new(db), FieldValidator)
    }
}
