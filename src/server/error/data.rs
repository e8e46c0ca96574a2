use sea_orm::DbErr;
use thiserror::Error;

/// Failures raised by the entity store and the schedule resolver.
///
/// Repositories never surface a raw `DbErr`; every storage failure carries the
/// entity kind and the operation that was running so the pipeline can classify
/// and log it without inspecting driver messages.
#[derive(Error, Debug)]
pub enum DataError {
    /// No row with the given id exists for the entity kind.
    ///
    /// Results in 404 Not Found once classified by the pipeline.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Entity kind, e.g. `Faculty`
        entity: &'static str,
        /// Requested id
        id: i32,
    },

    /// The backing store rejected or failed the operation.
    ///
    /// Covers connection failures, constraint violations (such as deleting a
    /// faculty that still has groups) and malformed rows. Results in 500 Internal
    /// Server Error once classified by the pipeline.
    #[error("Failed to {operation} {entity}: {source}")]
    Storage {
        /// Entity kind, e.g. `Faculty`
        entity: &'static str,
        /// Store operation, e.g. `create`
        operation: &'static str,
        /// The underlying SeaORM error
        #[source]
        source: DbErr,
    },
}

impl DataError {
    /// Wraps a SeaORM error for the given entity kind and store operation.
    ///
    /// `DbErr::RecordNotFound` and `DbErr::RecordNotUpdated` are reported as
    /// storage failures here; repositories that know the requested id map those
    /// to `NotFound` themselves.
    pub fn storage(entity: &'static str, operation: &'static str, source: DbErr) -> Self {
        Self::Storage {
            entity,
            operation,
            source,
        }
    }

    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}
