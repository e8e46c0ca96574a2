//! Faculty factory for creating test faculty entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test faculties with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let faculty = FacultyFactory::new(&db).name("Physics").build().await?;
/// ```
pub struct FacultyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> FacultyFactory<'a> {
    /// Creates a new factory with a unique default name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Faculty {}", next_id()),
        }
    }

    /// Sets the faculty name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the faculty entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::faculty::Model)` - Created faculty entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::faculty::Model, DbErr> {
        entity::faculty::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a faculty with default values.
///
/// Shorthand for `FacultyFactory::new(db).build().await`.
pub async fn create_faculty(db: &DatabaseConnection) -> Result<entity::faculty::Model, DbErr> {
    FacultyFactory::new(db).build().await
}
