//! Shared helpers for database integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use stockbook_db::{
    ProductRepository, entities::products, migrate, repositories::CreateProductInput,
};
use tempfile::TempDir;

/// Fresh in-memory database with the schema applied.
///
/// One connection only: every pooled connection to `sqlite::memory:` would
/// open its own empty database.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("connect to in-memory sqlite");
    migrate(&db).await.expect("apply migrations");
    db
}

/// Database file in a temporary directory, served by a pool of
/// `max_connections` connections that really run side by side.
///
/// Keep the returned `TempDir` alive for as long as the connection is used.
pub async fn setup_file_db(max_connections: u32) -> (DatabaseConnection, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let mut options = ConnectOptions::new(file_url(&dir));
    options
        .max_connections(max_connections)
        .min_connections(max_connections)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("connect to file sqlite");
    migrate(&db).await.expect("apply migrations");
    (db, dir)
}

/// `SQLite` URL for a fresh database file inside `dir`.
pub fn file_url(dir: &TempDir) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join("stockbook.db").display())
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub async fn create_product(
    db: &DatabaseConnection,
    name: &str,
    stock: i32,
    price: Decimal,
    cost_price: Decimal,
) -> products::Model {
    ProductRepository::new(db.clone())
        .create(CreateProductInput {
            name: name.to_string(),
            stock,
            price,
            cost_price,
        })
        .await
        .expect("create product")
}
