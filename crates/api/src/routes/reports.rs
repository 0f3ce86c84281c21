//! Report routes.

use axum::{Json, Router, extract::State, routing::get};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use stockbook_core::reports::{DailySales, SalesSummary};
use stockbook_db::ReportRepository;

use crate::{ApiResult, AppState, extractors::DateRangeQuery};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/summary", get(get_summary))
        .route("/reports/daily-sales", get(get_daily_sales))
}

/// Period totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    /// Sum of sale totals.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_sales: Decimal,
    /// Sum of line profits.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_profit: Decimal,
    /// Sum of expenses.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expenses: Decimal,
    /// Gross profit minus expenses.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_profit: Decimal,
    /// Units sold.
    pub items_sold: i64,
    /// Number of sales.
    pub transaction_count: u64,
}

impl From<SalesSummary> for SummaryResponse {
    fn from(s: SalesSummary) -> Self {
        Self {
            total_sales: s.total_sales,
            gross_profit: s.gross_profit,
            total_expenses: s.total_expenses,
            net_profit: s.net_profit,
            items_sold: s.items_sold,
            transaction_count: s.transaction_count,
        }
    }
}

/// One chart point.
#[derive(Debug, Serialize)]
pub struct DailySalesResponse {
    /// Day.
    pub date: NaiveDate,
    /// Sales total that day.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl From<DailySales> for DailySalesResponse {
    fn from(d: DailySales) -> Self {
        Self {
            date: d.date,
            total: d.total,
        }
    }
}

/// GET `/reports/summary` - Sales, profit and expense totals.
async fn get_summary(
    State(state): State<AppState>,
    DateRangeQuery(range): DateRangeQuery,
) -> ApiResult<Json<SummaryResponse>> {
    let repo = ReportRepository::new((*state.db).clone());
    let summary = repo.summary(range).await?;

    Ok(Json(summary.into()))
}

/// GET `/reports/daily-sales` - Sales totals per day, oldest first.
async fn get_daily_sales(
    State(state): State<AppState>,
    DateRangeQuery(range): DateRangeQuery,
) -> ApiResult<Json<Vec<DailySalesResponse>>> {
    let repo = ReportRepository::new((*state.db).clone());
    let daily = repo.daily_sales(range).await?;

    Ok(Json(daily.into_iter().map(Into::into).collect()))
}
