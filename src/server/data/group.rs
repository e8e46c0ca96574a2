use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    data::{storage_err, Repository},
    error::data::DataError,
    model::{group::Group, DomainModel},
};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_entity(&self, id: i32) -> Result<entity::group::Model, DataError> {
        entity::prelude::Group::find_by_id(id)
            .one(self.db)
            .await
            .map_err(storage_err(Group::KIND, "find"))?
            .ok_or(DataError::not_found(Group::KIND, id))
    }
}

#[async_trait]
impl Repository for GroupRepository<'_> {
    type Model = Group;

    async fn create(&self, group: Group) -> Result<Group, DataError> {
        let model = entity::group::ActiveModel {
            name: ActiveValue::Set(group.name),
            faculty_id: ActiveValue::Set(group.faculty_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(storage_err(Group::KIND, "create"))?;

        Ok(Group::from_entity(model))
    }

    async fn find_all(&self) -> Result<Vec<Group>, DataError> {
        let models = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await
            .map_err(storage_err(Group::KIND, "find all"))?;

        Ok(models.into_iter().map(Group::from_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Group, DataError> {
        self.find_entity(id).await.map(Group::from_entity)
    }

    async fn update(&self, group: Group) -> Result<Group, DataError> {
        let mut active: entity::group::ActiveModel = self.find_entity(group.id).await?.into();
        active.name = ActiveValue::Set(group.name);
        active.faculty_id = ActiveValue::Set(group.faculty_id);

        let model = active
            .update(self.db)
            .await
            .map_err(storage_err(Group::KIND, "update"))?;

        Ok(Group::from_entity(model))
    }

    async fn delete(&self, id: i32) -> Result<(), DataError> {
        let result = entity::prelude::Group::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(storage_err(Group::KIND, "delete"))?;

        if result.rows_affected == 0 {
            return Err(DataError::not_found(Group::KIND, id));
        }

        Ok(())
    }
}
