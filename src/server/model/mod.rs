//! Server-side domain models.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Every storable model implements
//! `DomainModel` so the operation pipeline can treat all entity kinds uniformly.

pub mod faculty;
pub mod group;
pub mod lesson;
pub mod lesson_time;
pub mod person;
pub mod schedule;

/// Common surface of every entity kind handled by the entity store.
///
/// Ids are assigned by the store: a model that has not been stored yet has id `0`,
/// stored models have ids `>= 1`.
pub trait DomainModel: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Entity kind used in log records and failure messages, e.g. `Faculty`.
    const KIND: &'static str;

    fn id(&self) -> i32;

    fn set_id(&mut self, id: i32);
}
