//! University Test Utils
//!
//! Shared testing utilities for the university backend. Provides a builder for test
//! contexts backed by in-memory SQLite databases and factories for inserting records
//! with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Record factories with foreign-key aware helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_faculty_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_university_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     let faculty = test_utils::factory::create_faculty(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
