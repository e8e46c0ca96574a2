//! Lecturer repository.
//!
//! Lecturers share the `persons` table with students. Every query here is scoped to
//! rows with the lecturer role, so a student id is reported as not found.

use async_trait::async_trait;
use entity::sea_orm_active_enums::PersonRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::{storage_err, Repository},
    error::data::DataError,
    model::{person::Lecturer, DomainModel},
};

pub struct LecturerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LecturerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_entity(&self, id: i32) -> Result<entity::person::Model, DataError> {
        entity::prelude::Person::find_by_id(id)
            .filter(entity::person::Column::Role.eq(PersonRole::Lecturer))
            .one(self.db)
            .await
            .map_err(storage_err(Lecturer::KIND, "find"))?
            .ok_or(DataError::not_found(Lecturer::KIND, id))
    }
}

#[async_trait]
impl Repository for LecturerRepository<'_> {
    type Model = Lecturer;

    async fn create(&self, lecturer: Lecturer) -> Result<Lecturer, DataError> {
        let person = lecturer.person;

        let model = entity::person::ActiveModel {
            role: ActiveValue::Set(PersonRole::Lecturer),
            first_name: ActiveValue::Set(person.first_name),
            last_name: ActiveValue::Set(person.last_name),
            gender: ActiveValue::Set(person.gender),
            phone_number: ActiveValue::Set(person.phone_number),
            email: ActiveValue::Set(person.email),
            group_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(storage_err(Lecturer::KIND, "create"))?;

        Ok(Lecturer::from_entity(model))
    }

    async fn find_all(&self) -> Result<Vec<Lecturer>, DataError> {
        let models = entity::prelude::Person::find()
            .filter(entity::person::Column::Role.eq(PersonRole::Lecturer))
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
            .map_err(storage_err(Lecturer::KIND, "find all"))?;

        Ok(models.into_iter().map(Lecturer::from_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Lecturer, DataError> {
        self.find_entity(id).await.map(Lecturer::from_entity)
    }

    async fn update(&self, lecturer: Lecturer) -> Result<Lecturer, DataError> {
        let person = lecturer.person;

        let mut active: entity::person::ActiveModel = self.find_entity(person.id).await?.into();
        active.first_name = ActiveValue::Set(person.first_name);
        active.last_name = ActiveValue::Set(person.last_name);
        active.gender = ActiveValue::Set(person.gender);
        active.phone_number = ActiveValue::Set(person.phone_number);
        active.email = ActiveValue::Set(person.email);

        let model = active
            .update(self.db)
            .await
            .map_err(storage_err(Lecturer::KIND, "update"))?;

        Ok(Lecturer::from_entity(model))
    }

    /// Deleting a lecturer also removes every lesson they teach.
    async fn delete(&self, id: i32) -> Result<(), DataError> {
        let result = entity::prelude::Person::delete_many()
            .filter(entity::person::Column::Id.eq(id))
            .filter(entity::person::Column::Role.eq(PersonRole::Lecturer))
            .exec(self.db)
            .await
            .map_err(storage_err(Lecturer::KIND, "delete"))?;

        if result.rows_affected == 0 {
            return Err(DataError::not_found(Lecturer::KIND, id));
        }

        Ok(())
    }
}
