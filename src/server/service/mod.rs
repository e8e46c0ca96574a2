//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Every entity service is the generic operation pipeline bound to one repository, so
//! all entity kinds share the same preconditions, logging and failure classification.
//! The schedule service runs the schedule resolver through the same pipeline steps.

pub mod faculty;
pub mod group;
pub mod lecturer;
pub mod lesson;
pub mod lesson_time;
pub mod pipeline;
pub mod schedule;
pub mod student;
pub mod validation;

#[cfg(test)]
mod test;
