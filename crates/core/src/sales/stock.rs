//! Signed stock deltas for sale create, edit and reversal.
//!
//! A delta is added to `products.stock`. Negative deltas take units off the
//! shelf and must be covered by the stock on hand; positive deltas always
//! succeed.

use super::error::SaleError;

/// Delta applied when `quantity` units are sold.
#[must_use]
pub const fn sale_delta(quantity: i32) -> i32 {
    -quantity
}

/// Delta applied when a sale of `quantity` units is reversed.
#[must_use]
pub const fn reversal_delta(quantity: i32) -> i32 {
    quantity
}

/// Delta applied when a sale is edited from `old_quantity` to `new_quantity`.
///
/// Raising the quantity takes the difference off the shelf; lowering it
/// returns the difference.
#[must_use]
pub const fn edit_delta(old_quantity: i32, new_quantity: i32) -> i32 {
    old_quantity - new_quantity
}

/// Checks that `delta` can be applied to `stock` and returns the new stock.
///
/// # Errors
///
/// Returns `SaleError::InsufficientStock` when the result would drop below
/// zero, `SaleError::StockOverflow` when it would not fit in an `i32`.
pub fn ensure_available(stock: i32, delta: i32) -> Result<i32, SaleError> {
    let next = stock.checked_add(delta).ok_or(SaleError::StockOverflow)?;
    if next < 0 {
        return Err(SaleError::InsufficientStock {
            available: stock,
            requested: delta.checked_neg().ok_or(SaleError::StockOverflow)?,
        });
    }
    Ok(next)
}
