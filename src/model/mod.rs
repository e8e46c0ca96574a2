//! Data transfer objects shared by the HTTP boundary.
//!
//! DTOs are the wire shape of every request and response body. Controllers convert
//! them to and from the server domain models in `server::model`.

pub mod api;
pub mod faculty;
pub mod group;
pub mod lesson;
pub mod lesson_time;
pub mod person;
pub mod schedule;
