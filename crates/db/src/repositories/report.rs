//! Report repository for sales, profit and capital figures.
//!
//! Rows are loaded with their date filter applied in SQL and aggregated in
//! `stockbook_core::reports::ReportService`, so money sums stay in `Decimal`
//! on every backend.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect, Select,
};
use stockbook_core::reports::{DailySales, ReportService, SaleFigures, SalesSummary, TodaySnapshot};
use stockbook_shared::{AppError, DateRange};

use super::capital::{CapitalError, CapitalRepository};
use crate::entities::{expenses, transactions};

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Capital total could not be computed.
    #[error(transparent)]
    Capital(#[from] CapitalError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Capital(e) => e.into(),
            ReportError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Report repository.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sales, gross profit, expenses and net profit over a date range.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn summary(&self, range: DateRange) -> Result<SalesSummary, ReportError> {
        let sales = self.sale_figures(range).await?;

        let expenses = filter_dates(expenses::Entity::find(), expenses::Column::Date, range)
            .select_only()
            .column(expenses::Column::Amount)
            .into_tuple::<Decimal>()
            .all(&self.db)
            .await?;

        Ok(ReportService::summarize(&sales, &expenses))
    }

    /// Sales totals per day over a date range, oldest day first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn daily_sales(&self, range: DateRange) -> Result<Vec<DailySales>, ReportError> {
        let sales = self.sale_figures(range).await?;
        Ok(ReportService::daily_sales(&sales))
    }

    /// Dashboard figures for `today` plus the current capital total.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn today(&self, today: NaiveDate) -> Result<TodaySnapshot, ReportError> {
        let sales = self.sale_figures(DateRange::single_day(today)).await?;
        let total_capital = CapitalRepository::new(self.db.clone()).total().await?;

        Ok(ReportService::today_snapshot(today, &sales, total_capital))
    }

    async fn sale_figures(&self, range: DateRange) -> Result<Vec<SaleFigures>, DbErr> {
        let rows = filter_dates(
            transactions::Entity::find(),
            transactions::Column::Date,
            range,
        )
        .select_only()
        .column(transactions::Column::Date)
        .column(transactions::Column::Quantity)
        .column(transactions::Column::ProfitPerUnit)
        .column(transactions::Column::Total)
        .into_tuple::<(NaiveDate, i32, Decimal, Decimal)>()
        .all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(date, quantity, profit_per_unit, total)| SaleFigures {
                date,
                quantity,
                profit_per_unit,
                total,
            })
            .collect())
    }
}

fn filter_dates<E, C>(mut query: Select<E>, column: C, range: DateRange) -> Select<E>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    if let Some(start) = range.start() {
        query = query.filter(column.gte(start));
    }
    if let Some(end) = range.end() {
        query = query.filter(column.lte(end));
    }
    query
}
