//! Report data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Stored figures of one sale, as read back for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleFigures {
    /// Sale date.
    pub date: NaiveDate,
    /// Units sold.
    pub quantity: i32,
    /// Stored profit per unit.
    pub profit_per_unit: Decimal,
    /// Stored line total.
    pub total: Decimal,
}

impl SaleFigures {
    /// Profit earned by the whole line.
    #[must_use]
    pub fn profit(&self) -> Decimal {
        self.profit_per_unit * Decimal::from(self.quantity)
    }
}

/// Totals over a date range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Sum of sale totals.
    pub total_sales: Decimal,
    /// Sum of line profits.
    pub gross_profit: Decimal,
    /// Sum of expense amounts.
    pub total_expenses: Decimal,
    /// Gross profit minus expenses.
    pub net_profit: Decimal,
    /// Units sold.
    pub items_sold: i64,
    /// Number of sales.
    pub transaction_count: u64,
}

/// Sales total for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySales {
    /// Day.
    pub date: NaiveDate,
    /// Sum of sale totals that day.
    pub total: Decimal,
}

/// Figures shown on the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodaySnapshot {
    /// Day the snapshot covers.
    pub date: NaiveDate,
    /// Sales total for the day.
    pub total_sales: Decimal,
    /// Profit for the day.
    pub total_profit: Decimal,
    /// Units sold during the day.
    pub products_sold: i64,
    /// Capital currently available.
    pub total_capital: Decimal,
}
