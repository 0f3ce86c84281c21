//! Report generation service.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{DailySales, SaleFigures, SalesSummary, TodaySnapshot};

/// Service for building reports from stored sales and expenses.
pub struct ReportService;

impl ReportService {
    /// Summarizes sales and expenses already filtered to one period.
    #[must_use]
    pub fn summarize(sales: &[SaleFigures], expense_amounts: &[Decimal]) -> SalesSummary {
        let total_sales: Decimal = sales.iter().map(|s| s.total).sum();
        let gross_profit: Decimal = sales.iter().map(SaleFigures::profit).sum();
        let total_expenses: Decimal = expense_amounts.iter().copied().sum();
        let items_sold = sales.iter().map(|s| i64::from(s.quantity)).sum();

        SalesSummary {
            total_sales,
            gross_profit,
            total_expenses,
            net_profit: gross_profit - total_expenses,
            items_sold,
            transaction_count: sales.len() as u64,
        }
    }

    /// Groups sale totals per day, oldest day first.
    #[must_use]
    pub fn daily_sales(sales: &[SaleFigures]) -> Vec<DailySales> {
        let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for sale in sales {
            *by_day.entry(sale.date).or_default() += sale.total;
        }
        by_day
            .into_iter()
            .map(|(date, total)| DailySales { date, total })
            .collect()
    }

    /// Builds the dashboard snapshot for `today`.
    ///
    /// Sales from other days are ignored, so callers may pass an unfiltered list.
    #[must_use]
    pub fn today_snapshot(
        today: NaiveDate,
        sales: &[SaleFigures],
        total_capital: Decimal,
    ) -> TodaySnapshot {
        let todays: Vec<SaleFigures> = sales.iter().filter(|s| s.date == today).copied().collect();
        let summary = Self::summarize(&todays, &[]);

        TodaySnapshot {
            date: today,
            total_sales: summary.total_sales,
            total_profit: summary.gross_profit,
            products_sold: summary.items_sold,
            total_capital,
        }
    }
}
