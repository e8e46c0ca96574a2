pub use super::faculty::Entity as Faculty;
pub use super::group::Entity as Group;
pub use super::lesson::Entity as Lesson;
pub use super::lesson_time::Entity as LessonTime;
pub use super::person::Entity as Person;
