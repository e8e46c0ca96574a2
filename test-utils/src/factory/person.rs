//! Person factory for creating test lecturers and students.
//!
//! Both roles live in the `persons` table; the factory sets the `role` column
//! and, for students, the owning group.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::{Gender, PersonRole};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating persons with a given role.
///
/// # Example
///
/// ```rust,ignore
/// let lecturer = PersonFactory::lecturer(&db).first_name("Ada").build().await?;
/// let student = PersonFactory::student(&db, group.id).build().await?;
/// ```
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::person::Model,
}

impl<'a> PersonFactory<'a> {
    fn with_role(db: &'a DatabaseConnection, role: PersonRole, group_id: Option<i32>) -> Self {
        let id = next_id();
        Self {
            db,
            entity: entity::person::Model {
                id: 0,
                role,
                first_name: format!("First{}", id),
                last_name: format!("Last{}", id),
                gender: Gender::Female,
                phone_number: "+380501234567".to_string(),
                email: format!("person{}@university.edu", id),
                group_id,
            },
        }
    }

    /// Creates a factory for a lecturer.
    pub fn lecturer(db: &'a DatabaseConnection) -> Self {
        Self::with_role(db, PersonRole::Lecturer, None)
    }

    /// Creates a factory for a student of `group_id`.
    pub fn student(db: &'a DatabaseConnection, group_id: i32) -> Self {
        Self::with_role(db, PersonRole::Student, Some(group_id))
    }

    /// Sets the first name.
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.entity.first_name = first_name.into();
        self
    }

    /// Sets the last name.
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.entity.last_name = last_name.into();
        self
    }

    /// Sets the gender.
    pub fn gender(mut self, gender: Gender) -> Self {
        self.entity.gender = gender;
        self
    }

    /// Builds and inserts the person entity into the database.
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        entity::person::ActiveModel {
            id: ActiveValue::NotSet,
            role: ActiveValue::Set(self.entity.role),
            first_name: ActiveValue::Set(self.entity.first_name),
            last_name: ActiveValue::Set(self.entity.last_name),
            gender: ActiveValue::Set(self.entity.gender),
            phone_number: ActiveValue::Set(self.entity.phone_number),
            email: ActiveValue::Set(self.entity.email),
            group_id: ActiveValue::Set(self.entity.group_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lecturer with default values.
pub async fn create_lecturer(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::lecturer(db).build().await
}

/// Creates a student with default values in the given group.
pub async fn create_student(
    db: &DatabaseConnection,
    group_id: i32,
) -> Result<entity::person::Model, DbErr> {
    PersonFactory::student(db, group_id).build().await
}
