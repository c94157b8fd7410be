//! Sono AI persistence layer
//!
//! Environment-driven configuration and an explicitly constructed database
//! connection resource. The schema itself belongs to the inference backend;
//! this crate only owns the connection lifecycle.

pub mod config;
pub mod db;
pub mod error;

pub use config::DbConfig;
pub use db::Database;
pub use error::{ConfigError, DbError};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the process-wide log subscriber. Call once at service start.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "sono_ai_backend=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
