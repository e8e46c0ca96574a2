use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    data::{storage_err, Repository},
    error::data::DataError,
    model::{faculty::Faculty, DomainModel},
};

pub struct FacultyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FacultyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_entity(&self, id: i32) -> Result<entity::faculty::Model, DataError> {
        entity::prelude::Faculty::find_by_id(id)
            .one(self.db)
            .await
            .map_err(storage_err(Faculty::KIND, "find"))?
            .ok_or(DataError::not_found(Faculty::KIND, id))
    }
}

#[async_trait]
impl Repository for FacultyRepository<'_> {
    type Model = Faculty;

    async fn create(&self, faculty: Faculty) -> Result<Faculty, DataError> {
        let model = entity::faculty::ActiveModel {
            name: ActiveValue::Set(faculty.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(storage_err(Faculty::KIND, "create"))?;

        Ok(Faculty::from_entity(model))
    }

    async fn find_all(&self) -> Result<Vec<Faculty>, DataError> {
        let models = entity::prelude::Faculty::find()
            .order_by_asc(entity::faculty::Column::Id)
            .all(self.db)
            .await
            .map_err(storage_err(Faculty::KIND, "find all"))?;

        Ok(models.into_iter().map(Faculty::from_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Faculty, DataError> {
        self.find_entity(id).await.map(Faculty::from_entity)
    }

    async fn update(&self, faculty: Faculty) -> Result<Faculty, DataError> {
        let mut active: entity::faculty::ActiveModel = self.find_entity(faculty.id).await?.into();
        active.name = ActiveValue::Set(faculty.name);

        let model = active
            .update(self.db)
            .await
            .map_err(storage_err(Faculty::KIND, "update"))?;

        Ok(Faculty::from_entity(model))
    }

    async fn delete(&self, id: i32) -> Result<(), DataError> {
        let result = entity::prelude::Faculty::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(storage_err(Faculty::KIND, "delete"))?;

        if result.rows_affected == 0 {
            return Err(DataError::not_found(Faculty::KIND, id));
        }

        Ok(())
    }
}
