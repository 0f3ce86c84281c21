//! Sale routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockbook_core::sales::SaleLine;
use stockbook_db::{
    TransactionRepository, entities::transactions, repositories::CreateSaleInput,
};
use stockbook_shared::local_today;
use validator::Validate;

use super::{CreatedResponse, MessageResponse};
use crate::{
    ApiResult, AppState,
    extractors::{DateRangeQuery, PathId, ValidatedJson},
};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for recording a sale.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Name of the product sold.
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub product_name: String,
    /// Units sold.
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub quantity: i32,
    /// Unit cost price.
    pub cost_price: Decimal,
    /// Unit selling price.
    pub selling_price: Decimal,
}

/// Request body for editing a sale.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    /// New units sold.
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub quantity: i32,
    /// New unit cost price.
    pub cost_price: Decimal,
    /// New unit selling price.
    pub selling_price: Decimal,
}

/// A recorded sale.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    /// Sale ID.
    pub id: i32,
    /// Product ID, null once the product is deleted.
    pub product_id: Option<i32>,
    /// Product name at the time of sale.
    pub product_name: String,
    /// Units sold.
    pub quantity: i32,
    /// Unit cost price.
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_price: Decimal,
    /// Unit selling price.
    #[serde(with = "rust_decimal::serde::float")]
    pub selling_price: Decimal,
    /// Selling price minus cost price.
    #[serde(with = "rust_decimal::serde::float")]
    pub profit_per_unit: Decimal,
    /// Quantity times selling price.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Sale date.
    pub date: NaiveDate,
}

impl From<transactions::Model> for TransactionResponse {
    fn from(t: transactions::Model) -> Self {
        Self {
            id: t.id,
            product_id: t.product_id,
            product_name: t.product_name,
            quantity: t.quantity,
            cost_price: t.cost_price,
            selling_price: t.selling_price,
            profit_per_unit: t.profit_per_unit,
            total: t.total,
            date: t.date,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/transactions` - List sales, optionally within a date range.
async fn list_transactions(
    State(state): State<AppState>,
    DateRangeQuery(range): DateRangeQuery,
) -> ApiResult<Json<Vec<TransactionResponse>>> {
    let repo = TransactionRepository::new((*state.db).clone());
    let transactions = repo.list(range).await?;

    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

/// POST `/transactions` - Record a sale dated today.
async fn create_transaction(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTransactionRequest>,
) -> ApiResult<impl IntoResponse> {
    let line = SaleLine::new(payload.quantity, payload.cost_price, payload.selling_price)?;
    let repo = TransactionRepository::new((*state.db).clone());

    let transaction = repo
        .create(CreateSaleInput {
            product_name: payload.product_name,
            line,
            date: local_today(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse { id: transaction.id }),
    ))
}

/// GET `/transactions/{id}` - Get one sale.
async fn get_transaction(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ApiResult<Json<TransactionResponse>> {
    let repo = TransactionRepository::new((*state.db).clone());
    let transaction = repo.find_by_id(id).await?;

    Ok(Json(transaction.into()))
}

/// PUT `/transactions/{id}` - Edit a sale's quantity and prices.
async fn update_transaction(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<UpdateTransactionRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let line = SaleLine::new(payload.quantity, payload.cost_price, payload.selling_price)?;
    let repo = TransactionRepository::new((*state.db).clone());
    repo.update(id, line).await?;

    Ok(Json(MessageResponse::new("Transaction updated successfully.")))
}

/// DELETE `/transactions/{id}` - Delete a sale and restore its stock.
async fn delete_transaction(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ApiResult<Json<MessageResponse>> {
    let repo = TransactionRepository::new((*state.db).clone());
    repo.delete(id).await?;

    Ok(Json(MessageResponse::new(
        "Transaction deleted successfully and stock restored.",
    )))
}
