pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_faculty_table;
mod m20260105_000002_create_group_table;
mod m20260105_000003_create_lesson_time_table;
mod m20260105_000004_create_person_table;
mod m20260105_000005_create_lesson_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_faculty_table::Migration),
            Box::new(m20260105_000002_create_group_table::Migration),
            Box::new(m20260105_000003_create_lesson_time_table::Migration),
            Box::new(m20260105_000004_create_person_table::Migration),
            Box::new(m20260105_000005_create_lesson_table::Migration),
        ]
    }
}
