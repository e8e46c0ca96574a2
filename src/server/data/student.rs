use async_trait::async_trait;
use entity::sea_orm_active_enums::PersonRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::{storage_err, Repository},
    error::data::DataError,
    model::{person::Student, DomainModel},
};

/// Repository for students, scoped to `persons` rows with the student role.
pub struct StudentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_entity(&self, id: i32) -> Result<entity::person::Model, DataError> {
        entity::prelude::Person::find_by_id(id)
            .filter(entity::person::Column::Role.eq(PersonRole::Student))
            .one(self.db)
            .await
            .map_err(storage_err(Student::KIND, "find"))?
            .ok_or(DataError::not_found(Student::KIND, id))
    }
}

#[async_trait]
impl Repository for StudentRepository<'_> {
    type Model = Student;

    async fn create(&self, student: Student) -> Result<Student, DataError> {
        let person = student.person;

        let model = entity::person::ActiveModel {
            role: ActiveValue::Set(PersonRole::Student),
            first_name: ActiveValue::Set(person.first_name),
            last_name: ActiveValue::Set(person.last_name),
            gender: ActiveValue::Set(person.gender),
            phone_number: ActiveValue::Set(person.phone_number),
            email: ActiveValue::Set(person.email),
            group_id: ActiveValue::Set(Some(student.group_id)),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(storage_err(Student::KIND, "create"))?;

        Ok(Student::from_entity(model))
    }

    async fn find_all(&self) -> Result<Vec<Student>, DataError> {
        let models = entity::prelude::Person::find()
            .filter(entity::person::Column::Role.eq(PersonRole::Student))
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await
            .map_err(storage_err(Student::KIND, "find all"))?;

        Ok(models.into_iter().map(Student::from_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Student, DataError> {
        self.find_entity(id).await.map(Student::from_entity)
    }

    async fn update(&self, student: Student) -> Result<Student, DataError> {
        let person = student.person;

        let mut active: entity::person::ActiveModel = self.find_entity(person.id).await?.into();
        active.first_name = ActiveValue::Set(person.first_name);
        active.last_name = ActiveValue::Set(person.last_name);
        active.gender = ActiveValue::Set(person.gender);
        active.phone_number = ActiveValue::Set(person.phone_number);
        active.email = ActiveValue::Set(person.email);
        active.group_id = ActiveValue::Set(Some(student.group_id));

        let model = active
            .update(self.db)
            .await
            .map_err(storage_err(Student::KIND, "update"))?;

        Ok(Student::from_entity(model))
    }

    async fn delete(&self, id: i32) -> Result<(), DataError> {
        let result = entity::prelude::Person::delete_many()
            .filter(entity::person::Column::Id.eq(id))
            .filter(entity::person::Column::Role.eq(PersonRole::Student))
            .exec(self.db)
            .await
            .map_err(storage_err(Student::KIND, "delete"))?;

        if result.rows_affected == 0 {
            return Err(DataError::not_found(Student::KIND, id));
        }

        Ok(())
    }
}
