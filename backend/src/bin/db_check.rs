//! Connection smoke check
//!
//! Reads the connection parameters from the environment, connects, pings,
//! and closes. Exits non-zero on any failure.

use sono_ai_backend::{init_logging, Database, DbConfig, DbError};

fn main() -> Result<(), DbError> {
    init_logging();

    let config = DbConfig::from_env()?;
    let mut db = Database::connect(&config)?;
    db.ping()?;
    tracing::info!("database reachable");
    db.close()?;
    Ok(())
}
