use sea_orm::DatabaseConnection;

use crate::server::{
    data::lecturer::LecturerRepository,
    service::{pipeline::Pipeline, validation::FieldValidator},
};

/// Lecturer operations run through the pipeline with the default field rules.
pub type LecturerService<'a> = Pipeline<LecturerRepository<'a>, FieldValidator>;

impl<'a> LecturerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Pipeline::with_validator(LecturerRepository::new(db), FieldValidator)
    }
}
