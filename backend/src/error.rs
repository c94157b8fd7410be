//! Persistence layer error types

use thiserror::Error;

/// Configuration errors raised while reading the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    #[error("DB_PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Errors raised by the connection wrapper.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Postgres(#[from] postgres::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_names_the_variable() {
        let display = ConfigError::MissingVar("DB_PASSWORD").to_string();
        assert_eq!(display, "missing environment variable DB_PASSWORD");
    }

    #[test]
    fn test_invalid_port_keeps_the_raw_value() {
        let display = ConfigError::InvalidPort("99999999".to_string()).to_string();
        assert!(display.contains("99999999"));
    }

    #[test]
    fn test_db_error_from_config_error() {
        let err: DbError = ConfigError::MissingVar("DB_HOST").into();
        assert!(matches!(err, DbError::Config(_)));
        assert!(err.to_string().contains("DB_HOST"));
    }
}
