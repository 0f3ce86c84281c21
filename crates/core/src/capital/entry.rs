//! Capital entry direction.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockbook_shared::AppError;
use thiserror::Error;

/// Direction of a capital ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapitalEntryType {
    /// Money put into the business.
    Add,
    /// Money taken out of the business.
    Subtract,
}

/// Rejected entry type string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Capital entry type must be 'add' or 'subtract', got '{0}'")]
pub struct InvalidEntryType(pub String);

impl From<InvalidEntryType> for AppError {
    fn from(err: InvalidEntryType) -> Self {
        Self::Validation(err.to_string())
    }
}

impl CapitalEntryType {
    /// Wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
        }
    }

    /// Applies the entry direction to an amount.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Add => amount,
            Self::Subtract => -amount,
        }
    }
}

impl fmt::Display for CapitalEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapitalEntryType {
    type Err = InvalidEntryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            other => Err(InvalidEntryType(other.to_string())),
        }
    }
}
