//! Dashboard routes.

use axum::{Json, Router, extract::State, routing::get};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use stockbook_core::reports::TodaySnapshot;
use stockbook_db::ReportRepository;
use stockbook_shared::local_today;

use crate::{ApiResult, AppState};

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard/today", get(get_today))
}

/// Figures for the dashboard cards.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    /// Day covered.
    pub date: NaiveDate,
    /// Today's sales total.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_sales: Decimal,
    /// Today's profit.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_profit: Decimal,
    /// Units sold today.
    pub products_sold: i64,
    /// Capital currently available.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_capital: Decimal,
}

impl From<TodaySnapshot> for TodayResponse {
    fn from(s: TodaySnapshot) -> Self {
        Self {
            date: s.date,
            total_sales: s.total_sales,
            total_profit: s.total_profit,
            products_sold: s.products_sold,
            total_capital: s.total_capital,
        }
    }
}

/// GET `/dashboard/today` - Today's sales, profit and capital.
async fn get_today(State(state): State<AppState>) -> ApiResult<Json<TodayResponse>> {
    let repo = ReportRepository::new((*state.db).clone());
    let snapshot = repo.today(local_today()).await?;

    Ok(Json(snapshot.into()))
}
