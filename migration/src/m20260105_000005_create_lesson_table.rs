use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_group_table::Group,
    m20260105_000003_create_lesson_time_table::LessonTime,
    m20260105_000004_create_person_table::Person,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lesson::Table)
                    .if_not_exists()
                    .col(pk_auto(Lesson::Id))
                    .col(string(Lesson::Name))
                    .col(string(Lesson::Audience))
                    .col(string_len(Lesson::Day, 9))
                    .col(integer(Lesson::LessonTimeId))
                    .col(integer(Lesson::LecturerId))
                    .col(integer(Lesson::GroupId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_lesson_time_id")
                            .from(Lesson::Table, Lesson::LessonTimeId)
                            .to(LessonTime::Table, LessonTime::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_lecturer_id")
                            .from(Lesson::Table, Lesson::LecturerId)
                            .to(Person::Table, Person::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_lesson_group_id")
                            .from(Lesson::Table, Lesson::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Schedule lookups filter by subject and day.
        manager
            .create_index(
                Index::create()
                    .name("idx_lesson_group_day")
                    .table(Lesson::Table)
                    .col(Lesson::GroupId)
                    .col(Lesson::Day)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_lesson_lecturer_day")
                    .table(Lesson::Table)
                    .col(Lesson::LecturerId)
                    .col(Lesson::Day)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lesson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lesson {
    #[sea_orm(iden = "lessons")]
    Table,
    Id,
    Name,
    Audience,
    Day,
    LessonTimeId,
    LecturerId,
    GroupId,
}
