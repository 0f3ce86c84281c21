//! Input rules for products, expenses and capital entries.

use rust_decimal::Decimal;
use stockbook_shared::AppError;
use thiserror::Error;

/// Longest accepted product name or expense description.
pub const MAX_TEXT_LEN: usize = 255;

/// A rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} {message}")]
pub struct ValidationError {
    /// Field name as it appears on the wire.
    pub field: &'static str,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Trims `value` and checks it is non-empty and at most [`MAX_TEXT_LEN`] characters.
///
/// # Errors
///
/// Returns `ValidationError` for blank or oversized text.
pub fn validate_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, "cannot be empty"));
    }
    if trimmed.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::new(
            field,
            format!("cannot exceed {MAX_TEXT_LEN} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Stock counts cannot be negative.
///
/// # Errors
///
/// Returns `ValidationError` for a negative count.
pub fn validate_stock(stock: i32) -> Result<i32, ValidationError> {
    if stock < 0 {
        return Err(ValidationError::new("stock", "cannot be negative"));
    }
    Ok(stock)
}

/// Unit prices may be zero but not negative.
///
/// # Errors
///
/// Returns `ValidationError` for a negative price.
pub fn validate_price(field: &'static str, value: Decimal) -> Result<Decimal, ValidationError> {
    if value < Decimal::ZERO {
        return Err(ValidationError::new(field, "cannot be negative"));
    }
    Ok(value)
}

/// Expense and capital amounts must be strictly positive.
///
/// # Errors
///
/// Returns `ValidationError` for zero or negative amounts.
pub fn validate_amount(field: &'static str, value: Decimal) -> Result<Decimal, ValidationError> {
    if value <= Decimal::ZERO {
        return Err(ValidationError::new(field, "must be greater than zero"));
    }
    Ok(value)
}
