//! Per-line sale figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::SaleError;

/// Quantity and unit prices of one recorded sale.
///
/// Profit and total are always derived from these three values; they are
/// stored alongside the row but never accepted from a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    /// Units sold.
    pub quantity: i32,
    /// Unit cost price.
    pub cost_price: Decimal,
    /// Unit selling price.
    pub selling_price: Decimal,
}

impl SaleLine {
    /// Builds a validated sale line.
    ///
    /// # Errors
    ///
    /// Returns `SaleError` if quantity is below 1 or a price is negative.
    pub fn new(quantity: i32, cost_price: Decimal, selling_price: Decimal) -> Result<Self, SaleError> {
        if quantity < 1 {
            return Err(SaleError::InvalidQuantity(quantity));
        }
        if cost_price < Decimal::ZERO {
            return Err(SaleError::NegativePrice {
                field: "costPrice",
                value: cost_price,
            });
        }
        if selling_price < Decimal::ZERO {
            return Err(SaleError::NegativePrice {
                field: "sellingPrice",
                value: selling_price,
            });
        }
        Ok(Self {
            quantity,
            cost_price,
            selling_price,
        })
    }

    /// `selling_price - cost_price`. Negative when selling below cost.
    #[must_use]
    pub fn profit_per_unit(&self) -> Decimal {
        self.selling_price - self.cost_price
    }

    /// `quantity * selling_price`.
    #[must_use]
    pub fn total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.selling_price
    }

    /// `profit_per_unit * quantity`.
    #[must_use]
    pub fn gross_profit(&self) -> Decimal {
        self.profit_per_unit() * Decimal::from(self.quantity)
    }
}
