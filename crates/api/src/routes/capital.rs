//! Capital ledger routes.

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
use stockbook_core::capital::CapitalEntryType;
use stockbook_db::{CapitalRepository, entities::capital_entries};
use stockbook_shared::local_today;
use validator::Validate;

use super::CreatedResponse;
use crate::{
    ApiResult, AppState,
    extractors::{DateRangeQuery, ValidatedJson},
};

/// Creates the capital routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/capital", get(list_entries).post(add_capital))
        .route("/capital/total", get(total_capital))
}

/// Request body for a manual capital entry.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCapitalRequest {
    /// Amount moved.
    pub amount: Decimal,
    /// `"add"` or `"subtract"`.
    #[serde(rename = "type")]
    pub entry_type: String,
}

/// One capital ledger entry.
#[derive(Debug, Serialize)]
pub struct CapitalEntryResponse {
    /// Entry ID.
    pub id: i32,
    /// Amount moved.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Entry date.
    pub date: NaiveDate,
    /// `"add"` or `"subtract"`.
    #[serde(rename = "type")]
    pub entry_type: CapitalEntryType,
}

impl From<capital_entries::Model> for CapitalEntryResponse {
    fn from(e: capital_entries::Model) -> Self {
        Self {
            id: e.id,
            amount: e.amount,
            date: e.date,
            entry_type: e.entry_type.into(),
        }
    }
}

/// Current capital balance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCapitalResponse {
    /// Adds minus subtracts.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_capital: Decimal,
}

/// GET `/capital` - Capital history, optionally within a date range.
async fn list_entries(
    State(state): State<AppState>,
    DateRangeQuery(range): DateRangeQuery,
) -> ApiResult<Json<Vec<CapitalEntryResponse>>> {
    let repo = CapitalRepository::new((*state.db).clone());
    let entries = repo.list(range).await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

/// POST `/capital` - Append a manual capital entry dated today.
async fn add_capital(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AddCapitalRequest>,
) -> ApiResult<impl IntoResponse> {
    let entry_type: CapitalEntryType = payload.entry_type.parse()?;
    let repo = CapitalRepository::new((*state.db).clone());
    let entry = repo.add(payload.amount, entry_type, local_today()).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: entry.id })))
}

/// GET `/capital/total` - Current capital balance.
async fn total_capital(State(state): State<AppState>) -> ApiResult<Json<TotalCapitalResponse>> {
    let repo = CapitalRepository::new((*state.db).clone());
    let total_capital = repo.total().await?;

    Ok(Json(TotalCapitalResponse { total_capital }))
}
