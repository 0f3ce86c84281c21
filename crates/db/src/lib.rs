//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions that run each ledger operation in one database transaction
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    CapitalRepository, ExpenseRepository, ProductRepository, ReportRepository,
    TransactionRepository,
};

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use stockbook_shared::config::DatabaseConfig;
use tracing::info;

use migration::Migrator;

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Establishes a pooled connection sized from configuration.
///
/// `SQLite` pools are capped at one connection: the database admits a single
/// writer, and a second pooled connection upgrading a read lock inside a
/// transaction fails with `SQLITE_BUSY` instead of waiting.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_with(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let max_connections = pool_size(config);
    if max_connections < config.max_connections {
        info!(
            requested = config.max_connections,
            max_connections, "Capping SQLite pool size"
        );
    }

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(max_connections)
        .min_connections(config.min_connections.min(max_connections))
        .acquire_timeout(Duration::from_secs(30))
        .sqlx_logging(false);

    Database::connect(options).await
}

fn pool_size(config: &DatabaseConfig) -> u32 {
    if config.url.starts_with("sqlite:") {
        config.max_connections.min(1)
    } else {
        config.max_connections
    }
}

/// Applies every pending migration.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, max_connections: u32) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            max_connections,
            ..DatabaseConfig::default()
        }
    }

    #[test]
    fn test_sqlite_pool_is_capped_at_one() {
        assert_eq!(pool_size(&config("sqlite://stockbook.db?mode=rwc", 10)), 1);
        assert_eq!(pool_size(&config("sqlite::memory:", 4)), 1);
    }

    #[test]
    fn test_other_pools_keep_configured_size() {
        assert_eq!(pool_size(&config("postgres://localhost/stockbook", 10)), 10);
    }
}
