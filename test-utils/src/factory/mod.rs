//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation. Factories take the ids of the
//! records they reference, so parents must be created first (or use the helpers).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let faculty = factory::create_faculty(&db).await?;
//! let group = factory::create_group(&db, faculty.id).await?;
//!
//! // Lesson with freshly created group, lecturer and lesson time
//! let (group, lecturer, lesson_time, lesson) =
//!     factory::helpers::create_lesson_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let lesson = factory::lesson::LessonFactory::new(&db, group.id, lecturer.id, lesson_time.id)
//!     .name("Algebra")
//!     .day(DayOfWeek::Wednesday)
//!     .build()
//!     .await?;
//! ```

pub mod faculty;
pub mod group;
pub mod helpers;
pub mod lesson;
pub mod lesson_time;
pub mod person;

pub use faculty::create_faculty;
pub use group::create_group;
pub use lesson::create_lesson;
pub use lesson_time::create_lesson_time;
pub use person::{create_lecturer, create_student};
