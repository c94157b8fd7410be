//! Database configuration
//!
//! Connection parameters come from the process environment; nothing is read
//! from disk. `DB_PORT` falls back to the PostgreSQL default when unset;
//! every other variable is required.

use std::env;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 5432;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Reads `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD` and
    /// `DB_DATABASE` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: require("DB_HOST")?,
            port: port_from_env()?,
            user: require("DB_USER")?,
            password: require("DB_PASSWORD")?,
            database: require("DB_DATABASE")?,
        })
    }

    /// Key/value parameter string understood by the client library.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={}",
            self.host, self.port, self.user, self.password, self.database
        )
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

fn port_from_env() -> Result<u16, ConfigError> {
    match env::var("DB_PORT") {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw)),
        Err(_) => Ok(DEFAULT_PORT),
    }
}
