//! Connection resource for the persistence layer
//!
//! Constructed explicitly at service start and closed at shutdown; callers
//! receive it by reference instead of reaching for a global.

use postgres::{Client, NoTls};
use tracing::info;

use crate::config::DbConfig;
use crate::error::DbError;

pub struct Database {
    client: Client,
}

impl Database {
    /// Opens a connection with the given parameters.
    pub fn connect(config: &DbConfig) -> Result<Self, DbError> {
        let client = Client::connect(&config.connection_string(), NoTls)?;
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "database connection established"
        );
        Ok(Self { client })
    }

    /// Round-trips a trivial query to verify the connection is alive.
    pub fn ping(&mut self) -> Result<(), DbError> {
        self.client.simple_query("SELECT 1")?;
        Ok(())
    }

    /// Direct access for callers issuing queries.
    pub fn client(&mut self) -> &mut Client {
        &mut self.client
    }

    /// Terminates the connection, consuming the resource.
    pub fn close(self) -> Result<(), DbError> {
        self.client.close()?;
        info!("database connection closed");
        Ok(())
    }
}
