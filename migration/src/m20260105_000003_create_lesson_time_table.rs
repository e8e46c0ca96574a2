use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LessonTime::Table)
                    .if_not_exists()
                    .col(pk_auto(LessonTime::Id))
                    .col(time(LessonTime::StartTime))
                    .col(time(LessonTime::EndTime))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LessonTime::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LessonTime {
    #[sea_orm(iden = "lesson_times")]
    Table,
    Id,
    StartTime,
    EndTime,
}
