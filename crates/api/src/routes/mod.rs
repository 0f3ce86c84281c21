//! API route definitions.

use axum::Router;
use serde::Serialize;

use crate::AppState;

pub mod capital;
pub mod dashboard;
pub mod expenses;
pub mod health;
pub mod products;
pub mod reports;
pub mod transactions;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(transactions::routes())
        .merge(products::routes())
        .merge(expenses::routes())
        .merge(capital::routes())
        .merge(reports::routes())
        .merge(dashboard::routes())
}

/// Body returned with `201 Created`.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// ID of the new record.
    pub id: i32,
}

/// Body returned by successful updates and deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: &'static str,
}

impl MessageResponse {
    pub(crate) const fn new(message: &'static str) -> Self {
        Self { message }
    }
}
