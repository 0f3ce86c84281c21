//! Sale error types.

use rust_decimal::Decimal;
use stockbook_shared::AppError;
use thiserror::Error;

/// Errors raised by sale rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaleError {
    /// Quantity must be at least one unit.
    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(i32),

    /// A unit price is negative.
    #[error("{field} cannot be negative, got {value}")]
    NegativePrice {
        /// Name of the offending field.
        field: &'static str,
        /// Supplied value.
        value: Decimal,
    },

    /// Not enough units on hand.
    #[error("Insufficient stock: {available} available, {requested} requested")]
    InsufficientStock {
        /// Units currently on hand.
        available: i32,
        /// Units the operation needs.
        requested: i32,
    },

    /// Stock arithmetic left the representable range.
    #[error("Stock adjustment out of range")]
    StockOverflow,
}

impl From<SaleError> for AppError {
    fn from(err: SaleError) -> Self {
        match err {
            SaleError::InsufficientStock { .. } => Self::InsufficientStock(err.to_string()),
            SaleError::InvalidQuantity(_)
            | SaleError::NegativePrice { .. }
            | SaleError::StockOverflow => Self::Validation(err.to_string()),
        }
    }
}
