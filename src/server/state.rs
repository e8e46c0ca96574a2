//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Requests share nothing else in memory;
//! all shared data lives in the database.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Clones share the same pool.
    pub db: DatabaseConnection,

    /// Whether lesson writes are checked for double-booked lecturers and groups.
    pub strict_lesson_slots: bool,
}

impl AppState {
    pub fn new(db: DatabaseConnection, strict_lesson_slots: bool) -> Self {
        Self {
            db,
            strict_lesson_slots,
        }
    }
}
