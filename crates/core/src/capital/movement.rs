//! Capital movements derived from expense changes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::CapitalEntryType;

/// One capital entry to append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalMovement {
    /// Unsigned amount.
    pub amount: Decimal,
    /// Direction.
    pub entry_type: CapitalEntryType,
}

impl CapitalMovement {
    /// Money in.
    #[must_use]
    pub const fn add(amount: Decimal) -> Self {
        Self {
            amount,
            entry_type: CapitalEntryType::Add,
        }
    }

    /// Money out.
    #[must_use]
    pub const fn subtract(amount: Decimal) -> Self {
        Self {
            amount,
            entry_type: CapitalEntryType::Subtract,
        }
    }

    /// Signed contribution to the capital total.
    #[must_use]
    pub fn signed(&self) -> Decimal {
        self.entry_type.signed(self.amount)
    }
}

/// Capital entries an expense change must append, in order.
pub struct ExpenseEffect;

impl ExpenseEffect {
    /// Recording an expense takes its amount out of capital.
    #[must_use]
    pub fn created(amount: Decimal) -> Vec<CapitalMovement> {
        vec![CapitalMovement::subtract(amount)]
    }

    /// Editing an expense puts the old amount back, then takes the new one.
    #[must_use]
    pub fn updated(old_amount: Decimal, new_amount: Decimal) -> Vec<CapitalMovement> {
        vec![
            CapitalMovement::add(old_amount),
            CapitalMovement::subtract(new_amount),
        ]
    }

    /// Deleting an expense puts its amount back.
    #[must_use]
    pub fn deleted(amount: Decimal) -> Vec<CapitalMovement> {
        vec![CapitalMovement::add(amount)]
    }
}

/// Sums signed entries; an empty ledger totals zero.
pub fn total_capital<I>(entries: I) -> Decimal
where
    I: IntoIterator<Item = (CapitalEntryType, Decimal)>,
{
    entries
        .into_iter()
        .map(|(entry_type, amount)| entry_type.signed(amount))
        .sum()
}
