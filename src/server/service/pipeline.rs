//! Operation pipeline shared by every entity and schedule operation.
//!
//! Each operation runs three ordered steps:
//!
//! 1. **Precondition** - the input is checked before any store access: a model must be
//!    present, a new model must not carry an id, lookups need a positive id and models
//!    to write must pass field validation and store conflict checks.
//! 2. **Execution** - the entity store or the schedule resolver does the work.
//! 3. **Classification** - a `DataError` is re-raised as `AppError::NotFound` or
//!    `AppError::StorageFailure`, so callers only ever see classified failures.
//!
//! Writes are logged at `info` on entry and on success, reads at `debug`, empty reads at
//! `trace`. Rejections and missing records are logged at `warn`, storage failures at `error`.

use std::{fmt, future::Future};

use crate::server::{
    data::Repository,
    error::{data::DataError, AppError},
    model::DomainModel,
    service::validation::{FieldValidator, Validator},
};

/// Operation names used in log records and failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    GetById,
    GetAll,
    WeekLessons,
    MonthLessons,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::GetById => "get",
            Self::GetAll => "get all",
            Self::WeekLessons => "get week lessons of",
            Self::MonthLessons => "get month lessons of",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logs a failed precondition and hands the failure back.
fn reject(kind: &'static str, operation: Operation, err: AppError) -> AppError {
    tracing::warn!(kind, operation = %operation, error = %err, "Operation rejected");
    err
}

/// Fails with `InvalidArgument` when the operation received no model.
pub(crate) fn require_present<M>(
    kind: &'static str,
    operation: Operation,
    model: Option<M>,
) -> Result<M, AppError> {
    model.ok_or_else(|| {
        reject(
            kind,
            operation,
            AppError::InvalidArgument(format!("{} to {} must not be null", kind, operation)),
        )
    })
}

/// Fails with `InvalidArgument` for ids that no stored record can have.
pub(crate) fn require_positive_id(
    kind: &'static str,
    operation: Operation,
    id: i32,
) -> Result<(), AppError> {
    if id > 0 {
        return Ok(());
    }

    Err(reject(
        kind,
        operation,
        AppError::InvalidArgument(format!("{} id must be positive, got {}", kind, id)),
    ))
}

/// Re-raises a data layer failure as a classified failure.
///
/// The store's own message is kept for `NotFound`; storage failures get a generic
/// client message. Both keep the `DataError` as their source.
pub(crate) fn classify(kind: &'static str, operation: Operation, err: DataError) -> AppError {
    match err {
        DataError::NotFound { .. } => {
            let message = err.to_string();
            tracing::warn!(kind, operation = %operation, "{}", message);
            AppError::NotFound {
                message,
                source: err,
            }
        }
        DataError::Storage { .. } => {
            tracing::error!(kind, operation = %operation, error = ?err, "Storage failure");
            AppError::StorageFailure {
                message: format!("Can't {} {}", operation, kind),
                source: err,
            }
        }
    }
}

/// Awaits a store or resolver call and classifies its failure.
pub(crate) async fn execute<T>(
    kind: &'static str,
    operation: Operation,
    execution: impl Future<Output = Result<T, DataError>>,
) -> Result<T, AppError> {
    execution.await.map_err(|err| classify(kind, operation, err))
}

/// Logs a successful read; empty results are logged below the normal read level.
pub(crate) fn log_read(kind: &'static str, operation: Operation, count: usize) {
    if count == 0 {
        tracing::trace!(kind, operation = %operation, "No results");
    } else {
        tracing::debug!(kind, operation = %operation, count, "Read completed");
    }
}

/// Runs entity operations of one kind through precondition, execution and
/// classification.
///
/// Entity services are type aliases of this struct with a concrete repository, e.g.
/// `FacultyService<'a> = Pipeline<FacultyRepository<'a>>`.
pub struct Pipeline<R, V = FieldValidator> {
    repository: R,
    validator: V,
}

impl<R, V> Pipeline<R, V>
where
    R: Repository,
    V: Validator<R::Model>,
{
    pub fn with_validator(repository: R, validator: V) -> Self {
        Self {
            repository,
            validator,
        }
    }

    /// Stores a new model and returns it with its assigned id.
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored model
    /// - `Err(AppError::InvalidArgument)` - Model is missing or already has an id
    /// - `Err(AppError::ValidationFailure)` - Field rules or store conflicts violated
    /// - `Err(AppError::StorageFailure)` - Store failed, e.g. a dangling reference
    pub async fn create(&self, model: Option<R::Model>) -> Result<R::Model, AppError> {
        let kind = R::Model::KIND;
        let operation = Operation::Create;

        let model = require_present(kind, operation, model)?;
        tracing::info!(kind, "Creating {}", kind);

        if model.id() != 0 {
            return Err(reject(
                kind,
                operation,
                AppError::InvalidArgument(format!(
                    "{} to create must not have an id, got {}",
                    kind,
                    model.id()
                )),
            ));
        }
        self.check_fields(&model, operation).await?;

        let created = execute(kind, operation, self.repository.create(model)).await?;

        tracing::info!(kind, id = created.id(), "Created {}", kind);
        Ok(created)
    }

    /// Replaces the stored model with the same id.
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated model
    /// - `Err(AppError::InvalidArgument)` - Model is missing or its id is not positive
    /// - `Err(AppError::ValidationFailure)` - Field rules or store conflicts violated
    /// - `Err(AppError::NotFound)` - No stored model has the id
    /// - `Err(AppError::StorageFailure)` - Store failed
    pub async fn update(&self, model: Option<R::Model>) -> Result<R::Model, AppError> {
        let kind = R::Model::KIND;
        let operation = Operation::Update;

        let model = require_present(kind, operation, model)?;
        tracing::info!(kind, id = model.id(), "Updating {}", kind);

        require_positive_id(kind, operation, model.id())?;
        self.check_fields(&model, operation).await?;

        let updated = execute(kind, operation, self.repository.update(model)).await?;

        tracing::info!(kind, id = updated.id(), "Updated {}", kind);
        Ok(updated)
    }

    /// # Returns
    /// - `Ok(Model)` - The stored model
    /// - `Err(AppError::InvalidArgument)` - Id is not positive; the store is not queried
    /// - `Err(AppError::NotFound)` - No stored model has the id
    /// - `Err(AppError::StorageFailure)` - Store failed
    pub async fn get_by_id(&self, id: i32) -> Result<R::Model, AppError> {
        let kind = R::Model::KIND;
        let operation = Operation::GetById;

        require_positive_id(kind, operation, id)?;
        tracing::debug!(kind, id, "Getting {}", kind);

        let model = execute(kind, operation, self.repository.find_by_id(id)).await?;

        log_read(kind, operation, 1);
        Ok(model)
    }

    /// Returns every stored model; an empty store yields an empty list.
    pub async fn get_all(&self) -> Result<Vec<R::Model>, AppError> {
        let kind = R::Model::KIND;
        let operation = Operation::GetAll;

        tracing::debug!(kind, "Getting all {}", kind);

        let models = execute(kind, operation, self.repository.find_all()).await?;

        log_read(kind, operation, models.len());
        Ok(models)
    }

    /// # Returns
    /// - `Ok(())` - The model was removed
    /// - `Err(AppError::InvalidArgument)` - Id is not positive; the store is not queried
    /// - `Err(AppError::NotFound)` - No stored model has the id
    /// - `Err(AppError::StorageFailure)` - Store failed, e.g. the model is still referenced
    pub async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        let kind = R::Model::KIND;
        let operation = Operation::Delete;

        require_positive_id(kind, operation, id)?;
        tracing::info!(kind, id, "Deleting {}", kind);

        execute(kind, operation, self.repository.delete(id)).await?;

        tracing::info!(kind, id, "Deleted {}", kind);
        Ok(())
    }

    /// Field validation first; store conflicts are only queried for a valid model.
    async fn check_fields(&self, model: &R::Model, operation: Operation) -> Result<(), AppError> {
        let kind = R::Model::KIND;

        let violations = self.validator.validate(model);
        if !violations.is_empty() {
            return Err(reject(kind, operation, AppError::ValidationFailure(violations)));
        }

        let conflicts = execute(kind, operation, self.repository.conflicts(model)).await?;
        if !conflicts.is_empty() {
            return Err(reject(kind, operation, AppError::ValidationFailure(conflicts)));
        }

        Ok(())
    }
}
