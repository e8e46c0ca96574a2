//! SeaORM entities for the university schema.
//!
//! Lecturers and students share the `persons` table and are told apart by the
//! `role` column. Lessons reference their group, lecturer and lesson time by id.

pub mod prelude;

pub mod faculty;
pub mod group;
pub mod lesson;
pub mod lesson_time;
pub mod person;
pub mod sea_orm_active_enums;
