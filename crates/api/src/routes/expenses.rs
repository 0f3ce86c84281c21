//! Expense routes.

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
use stockbook_db::{ExpenseRepository, entities::expenses};
use stockbook_shared::local_today;
use validator::Validate;

use super::{CreatedResponse, MessageResponse};
use crate::{
    ApiResult, AppState,
    extractors::{DateRangeQuery, PathId, ValidatedJson},
};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}

/// Request body for creating or editing an expense.
#[derive(Debug, Deserialize, Validate)]
pub struct ExpenseRequest {
    /// What the money was spent on.
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub description: String,
    /// Amount spent.
    pub amount: Decimal,
}

/// A recorded expense.
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    /// Expense ID.
    pub id: i32,
    /// Description.
    pub description: String,
    /// Amount spent.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Expense date.
    pub date: NaiveDate,
}

impl From<expenses::Model> for ExpenseResponse {
    fn from(e: expenses::Model) -> Self {
        Self {
            id: e.id,
            description: e.description,
            amount: e.amount,
            date: e.date,
        }
    }
}

/// GET `/expenses` - List expenses, optionally within a date range.
async fn list_expenses(
    State(state): State<AppState>,
    DateRangeQuery(range): DateRangeQuery,
) -> ApiResult<Json<Vec<ExpenseResponse>>> {
    let repo = ExpenseRepository::new((*state.db).clone());
    let expenses = repo.list(range).await?;

    Ok(Json(expenses.into_iter().map(Into::into).collect()))
}

/// POST `/expenses` - Record an expense dated today.
async fn create_expense(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ExpenseRequest>,
) -> ApiResult<impl IntoResponse> {
    let repo = ExpenseRepository::new((*state.db).clone());
    let expense = repo
        .create(&payload.description, payload.amount, local_today())
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: expense.id })))
}

/// GET `/expenses/{id}` - Get one expense.
async fn get_expense(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ApiResult<Json<ExpenseResponse>> {
    let repo = ExpenseRepository::new((*state.db).clone());
    let expense = repo.find_by_id(id).await?;

    Ok(Json(expense.into()))
}

/// PUT `/expenses/{id}` - Edit an expense.
async fn update_expense(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<ExpenseRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let repo = ExpenseRepository::new((*state.db).clone());
    repo.update(id, &payload.description, payload.amount).await?;

    Ok(Json(MessageResponse::new("Expense updated successfully.")))
}

/// DELETE `/expenses/{id}` - Delete an expense and restore capital.
async fn delete_expense(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ApiResult<Json<MessageResponse>> {
    let repo = ExpenseRepository::new((*state.db).clone());
    repo.delete(id).await?;

    Ok(Json(MessageResponse::new(
        "Expense deleted successfully and capital restored.",
    )))
}
