mod faculty;
mod group;
mod lecturer;
mod student;

/// Result type for repository tests, which mix `DbErr` from factories with
/// `DataError` from repositories.
type TestResult = Result<(), Box<dyn std::error::Error>>;
