//! Lesson repository.
//!
//! Besides the CRUD operations shared with other entity kinds, lessons are the source
//! of every schedule: `find_by_subject` loads the lessons of a group or lecturer with
//! their lesson time resolved. When slot checking is enabled the repository also
//! reports lessons that would double-book a lecturer or a group.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{storage_err, Repository},
    error::data::DataError,
    model::{
        lesson::Lesson,
        lesson_time::LessonTime,
        schedule::{ScheduledLesson, Subject},
        DomainModel,
    },
};

pub struct LessonRepository<'a> {
    db: &'a DatabaseConnection,
    check_slots: bool,
}

impl<'a> LessonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            check_slots: false,
        }
    }

    /// Enables or disables the double-booking check reported by `conflicts`.
    pub fn with_slot_check(mut self, enabled: bool) -> Self {
        self.check_slots = enabled;
        self
    }

    async fn find_entity(&self, id: i32) -> Result<entity::lesson::Model, DataError> {
        entity::prelude::Lesson::find_by_id(id)
            .one(self.db)
            .await
            .map_err(storage_err(Lesson::KIND, "find"))?
            .ok_or(DataError::not_found(Lesson::KIND, id))
    }

    /// Loads every lesson of a group or lecturer together with its lesson time.
    ///
    /// The subject is not checked for existence: an unknown id yields an empty list.
    ///
    /// # Returns
    /// - `Ok(Vec<ScheduledLesson>)` - Lessons of the subject ordered by id
    /// - `Err(DataError::Storage)` - Database error during the query
    pub async fn find_by_subject(&self, subject: Subject) -> Result<Vec<ScheduledLesson>, DataError> {
        let condition = match subject {
            Subject::Group(id) => entity::lesson::Column::GroupId.eq(id),
            Subject::Lecturer(id) => entity::lesson::Column::LecturerId.eq(id),
        };

        let rows = entity::prelude::Lesson::find()
            .filter(condition)
            .find_also_related(entity::prelude::LessonTime)
            .order_by_asc(entity::lesson::Column::Id)
            .all(self.db)
            .await
            .map_err(storage_err(subject.kind(), "find lessons of"))?;

        rows.into_iter()
            .map(|(lesson, time)| match time {
                Some(time) => Ok(ScheduledLesson::from_entity(lesson, time)),
                None => Err(DataError::storage(
                    subject.kind(),
                    "find lessons of",
                    DbErr::RecordNotFound(format!(
                        "Lesson time {} of lesson {} not found",
                        lesson.lesson_time_id, lesson.id
                    )),
                )),
            })
            .collect()
    }
}

#[async_trait]
impl Repository for LessonRepository<'_> {
    type Model = Lesson;

    async fn create(&self, lesson: Lesson) -> Result<Lesson, DataError> {
        let model = entity::lesson::ActiveModel {
            name: ActiveValue::Set(lesson.name),
            audience: ActiveValue::Set(lesson.audience),
            day: ActiveValue::Set(lesson.day),
            lesson_time_id: ActiveValue::Set(lesson.lesson_time_id),
            lecturer_id: ActiveValue::Set(lesson.lecturer_id),
            group_id: ActiveValue::Set(lesson.group_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(storage_err(Lesson::KIND, "create"))?;

        Ok(Lesson::from_entity(model))
    }

    async fn find_all(&self) -> Result<Vec<Lesson>, DataError> {
        let models = entity::prelude::Lesson::find()
            .order_by_asc(entity::lesson::Column::Id)
            .all(self.db)
            .await
            .map_err(storage_err(Lesson::KIND, "find all"))?;

        Ok(models.into_iter().map(Lesson::from_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Lesson, DataError> {
        self.find_entity(id).await.map(Lesson::from_entity)
    }

    async fn update(&self, lesson: Lesson) -> Result<Lesson, DataError> {
        let mut active: entity::lesson::ActiveModel = self.find_entity(lesson.id).await?.into();
        active.name = ActiveValue::Set(lesson.name);
        active.audience = ActiveValue::Set(lesson.audience);
        active.day = ActiveValue::Set(lesson.day);
        active.lesson_time_id = ActiveValue::Set(lesson.lesson_time_id);
        active.lecturer_id = ActiveValue::Set(lesson.lecturer_id);
        active.group_id = ActiveValue::Set(lesson.group_id);

        let model = active
            .update(self.db)
            .await
            .map_err(storage_err(Lesson::KIND, "update"))?;

        Ok(Lesson::from_entity(model))
    }

    async fn delete(&self, id: i32) -> Result<(), DataError> {
        let result = entity::prelude::Lesson::delete_by_id(id)
            .exec(self.db)
            .await
            .map_err(storage_err(Lesson::KIND, "delete"))?;

        if result.rows_affected == 0 {
            return Err(DataError::not_found(Lesson::KIND, id));
        }

        Ok(())
    }

    /// Lists other lessons on the same day whose time slot overlaps this one and
    /// that share its lecturer or its group. Always empty when slot checking is off.
    async fn conflicts(&self, lesson: &Lesson) -> Result<Vec<String>, DataError> {
        if !self.check_slots {
            return Ok(Vec::new());
        }

        // A missing lesson time fails later as a foreign key violation on write
        let Some(time) = entity::prelude::LessonTime::find_by_id(lesson.lesson_time_id)
            .one(self.db)
            .await
            .map_err(storage_err(Lesson::KIND, "check slot of"))?
        else {
            return Ok(Vec::new());
        };
        let slot = LessonTime::from_entity(time);

        let rows = entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::Day.eq(lesson.day))
            .filter(entity::lesson::Column::Id.ne(lesson.id))
            .filter(
                Condition::any()
                    .add(entity::lesson::Column::LecturerId.eq(lesson.lecturer_id))
                    .add(entity::lesson::Column::GroupId.eq(lesson.group_id)),
            )
            .find_also_related(entity::prelude::LessonTime)
            .order_by_asc(entity::lesson::Column::Id)
            .all(self.db)
            .await
            .map_err(storage_err(Lesson::KIND, "check slot of"))?;

        let conflicts = rows
            .into_iter()
            .filter_map(|(other, time)| time.map(|time| (other, LessonTime::from_entity(time))))
            .filter(|(_, other_slot)| slot.overlaps(other_slot))
            .map(|(other, other_slot)| {
                let mut owners = Vec::new();
                if other.lecturer_id == lesson.lecturer_id {
                    owners.push(format!("Lecturer {}", lesson.lecturer_id));
                }
                if other.group_id == lesson.group_id {
                    owners.push(format!("Group {}", lesson.group_id));
                }
                let verb = if owners.len() > 1 { "have" } else { "has" };

                format!(
                    "{} already {} lesson {} on {:?} from {} to {}",
                    owners.join(" and "),
                    verb,
                    other.id,
                    other.day,
                    other_slot.start_time,
                    other_slot.end_time
                )
            })
            .collect();

        Ok(conflicts)
    }
}
