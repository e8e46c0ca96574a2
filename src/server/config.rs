use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

pub struct Config {
    /// SeaORM connection string, e.g. `sqlite://university.db?mode=rwc`
    pub database_url: String,

    pub bind_address: SocketAddr,

    /// Reject lessons that overlap another lesson of the same lecturer or group
    pub strict_lesson_slots: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: parse_var("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?,
            strict_lesson_slots: parse_var("STRICT_LESSON_SLOTS", "false")?,
        })
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());

    value.parse().map_err(|err: T::Err| ConfigError::InvalidValue {
        name: name.to_string(),
        value: value.clone(),
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let address: SocketAddr = parse_var("UNIVERSITY_TEST_UNSET_ADDRESS", DEFAULT_BIND_ADDRESS)
            .unwrap();
        let strict: bool = parse_var("UNIVERSITY_TEST_UNSET_STRICT", "false").unwrap();

        assert_eq!(address.port(), 8080);
        assert!(!strict);
    }

    #[test]
    fn reports_invalid_default() {
        let result = parse_var::<bool>("UNIVERSITY_TEST_UNSET_FLAG", "sometimes");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref name, ref value, .. })
                if name == "UNIVERSITY_TEST_UNSET_FLAG" && value == "sometimes"
        ));
    }
}
