use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    data::{storage_err, Repository},
    error::data::DataError,
    model::{lesson_time::LessonTime, DomainModel},
};

pub struct LessonTimeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonTimeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_entity(&self, id: i32) -> Result<entity::lesson_time::Model, DataError> {
        entity::prelude::LessonTime::find_by_id(id)
            .one(self.db)
            .await
            .map_err(storage_err(LessonTime::KIND, "find"))?
            .ok_or(DataError::not_found(LessonTime::KIND, id))
    }
}

#[async_trait]
impl Repository for LessonTimeRepository<'_> {
    type Model = LessonTime;

    async fn create(&self, lesson_time: LessonTime) -> Result<LessonTime, DataError> {
        let model = entity::lesson_time::ActiveModel {
            start_time: ActiveValue::Set(lesson_time.start_time),
            end_time: ActiveValue::Set(lesson_time.end_time),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(storage_err(LessonTime::KIND, "create"))?;

        Ok(LessonTime::from_entity(model))
    }

    /// Returns every lesson time ordered by start time, then id.
    async fn find_all(&self) -> Result<Vec<LessonTime>, DataError> {
        let models = entity::prelude::LessonTime::find()
            .order_by_asc(entity::lesson_time::Column::StartTime)
            .order_by_asc(entity::lesson_time::Column::Id)
            .all(self.db)
            .await
            .map_err(storage_err(LessonTime::KIND, "find all"))?;

        Ok(models.into_iter().map(LessonTime::from_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<LessonTime, DataError> {
        self.find_entity(id).await.map(LessonTime::from_entity)
    }

    async fn update(&self, lesson_time: LessonTime) -> Result<LessonTime, DataError> {
        let mut active: entity::lesson_time::ActiveModel =
            self.find_entity(lesson_time.id).await?.into();
        active.start_time = ActiveValue::Set(lesson_time.start_time);
        active.end_time = ActiveValue::Set(lesson_time.end_time);

        let model = active
            .update(self.db)
            .await
            .map_err(storage_err(LessonTime::KIND, "update"))?;

        Ok(LessonTime::from_entity(model))
    }

    /// Deleting a lesson time also removes every lesson scheduled in it.
    async fn delete(&self, id: i32) -> Result<(), DataError> {
        let result = entity::prelude::LessonTime::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(storage_err(LessonTime::KIND, "delete"))?;

        if result.rows_affected == 0 {
            return Err(DataError::not_found(LessonTime::KIND, id));
        }

        Ok(())
    }
}
