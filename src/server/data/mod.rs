//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity kind. Repositories use SeaORM entity models internally and return domain models,
//! and report failures as `DataError` so the service layer never handles a raw `DbErr`.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod faculty;
pub mod group;
pub mod lecturer;
pub mod lesson;
pub mod lesson_time;
pub mod student;

#[cfg(test)]
mod test;

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::{error::data::DataError, model::DomainModel};

/// Entity store operations shared by every entity kind.
///
/// Implementations only ever fail with `DataError::NotFound` or `DataError::Storage`.
/// Preconditions on ids and fields are checked by the pipeline before any of these
/// methods is called.
#[async_trait]
pub trait Repository: Send + Sync {
    type Model: DomainModel;

    /// Inserts the model and returns it with its store-assigned id.
    async fn create(&self, model: Self::Model) -> Result<Self::Model, DataError>;

    /// Returns every stored model ordered by id. No rows is an empty list, not an error.
    async fn find_all(&self) -> Result<Vec<Self::Model>, DataError>;

    /// Returns the model with the given id, or `DataError::NotFound`.
    async fn find_by_id(&self, id: i32) -> Result<Self::Model, DataError>;

    /// Replaces every field of the stored model with the same id.
    async fn update(&self, model: Self::Model) -> Result<Self::Model, DataError>;

    /// Removes the model with the given id, or fails with `DataError::NotFound`.
    async fn delete(&self, id: i32) -> Result<(), DataError>;

    /// Store-level rule violations the model would introduce, e.g. a double-booked
    /// lesson slot. An empty list means the model can be written.
    async fn conflicts(&self, _model: &Self::Model) -> Result<Vec<String>, DataError> {
        Ok(Vec::new())
    }
}

/// Builds a `map_err` adapter that wraps a `DbErr` as a storage failure.
pub(crate) fn storage_err(
    entity: &'static str,
    operation: &'static str,
) -> impl FnOnce(DbErr) -> DataError {
    move |source| DataError::storage(entity, operation, source)
}
