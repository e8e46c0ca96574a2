//! Group factory for creating test group entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups belonging to a faculty.
///
/// # Example
///
/// ```rust,ignore
/// let group = GroupFactory::new(&db, faculty.id).name("AB-12").build().await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    faculty_id: i32,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new factory for a group owned by `faculty_id`.
    pub fn new(db: &'a DatabaseConnection, faculty_id: i32) -> Self {
        Self {
            db,
            name: format!("Group {}", next_id()),
            faculty_id,
        }
    }

    /// Sets the group name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the group entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::group::Model)` - Created group entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown faculty)
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        entity::group::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            faculty_id: ActiveValue::Set(self.faculty_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values in the given faculty.
pub async fn create_group(
    db: &DatabaseConnection,
    faculty_id: i32,
) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db, faculty_id).build().await
}
