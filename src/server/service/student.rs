use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    service::{pipeline::Pipeline, validation::FieldValidator},
};

/// Student operations. The group must be resolved by the caller first.
pub type StudentService<'a> = Pipeline<StudentRepository<'a>, FieldValidator>;

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Pipeline::with_validator(StudentRepository::new(db), FieldValidator)
    }
}
