//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a faculty and a group inside it.
///
/// # Returns
/// - `Ok((faculty, group))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_faculty(
    db: &DatabaseConnection,
) -> Result<(entity::faculty::Model, entity::group::Model), DbErr> {
    let faculty = crate::factory::faculty::create_faculty(db).await?;
    let group = crate::factory::group::create_group(db, faculty.id).await?;

    Ok((faculty, group))
}

/// Creates a lesson together with every record it references.
///
/// Creates a faculty, a group, a lecturer and a lesson time, then a Monday lesson
/// linking them. Use the individual factories to customize any of them.
///
/// # Returns
/// - `Ok((group, lecturer, lesson_time, lesson))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_lesson_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::group::Model,
        entity::person::Model,
        entity::lesson_time::Model,
        entity::lesson::Model,
    ),
    DbErr,
> {
    let (_faculty, group) = create_group_with_faculty(db).await?;
    let lecturer = crate::factory::person::create_lecturer(db).await?;
    let lesson_time = crate::factory::lesson_time::create_lesson_time(db).await?;
    let lesson =
        crate::factory::lesson::create_lesson(db, group.id, lecturer.id, lesson_time.id).await?;

    Ok((group, lecturer, lesson_time, lesson))
}
