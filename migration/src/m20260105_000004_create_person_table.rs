use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_group_table::Group;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string_len(Person::Role, 8))
                    .col(string(Person::FirstName))
                    .col(string(Person::LastName))
                    .col(string_len(Person::Gender, 6))
                    .col(string(Person::PhoneNumber))
                    .col(string(Person::Email))
                    .col(integer_null(Person::GroupId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_person_group_id")
                            .from(Person::Table, Person::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_person_role")
                    .table(Person::Table)
                    .col(Person::Role)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Person {
    #[sea_orm(iden = "persons")]
    Table,
    Id,
    Role,
    FirstName,
    LastName,
    Gender,
    PhoneNumber,
    Email,
    GroupId,
}
