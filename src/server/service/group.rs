use sea_orm::DatabaseConnection;

use crate::server::{
    data::group::GroupRepository,
    service::{pipeline::Pipeline, validation::FieldValidator},
};

/// Group operations. The owning faculty must be resolved by the caller first.
pub type GroupService<'a> = Pipeline<GroupRepository<'a>, FieldValidator>;

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Pipeline::with_validator(GroupRepository::new(db), FieldValidator)
    }
}
