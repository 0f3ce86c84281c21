//! `SeaORM` active enums.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use stockbook_core::capital::CapitalEntryType as DomainEntryType;

/// Stored direction of a capital entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum CapitalEntryType {
    /// Money put into the business.
    #[sea_orm(string_value = "add")]
    Add,
    /// Money taken out of the business.
    #[sea_orm(string_value = "subtract")]
    Subtract,
}

impl From<DomainEntryType> for CapitalEntryType {
    fn from(value: DomainEntryType) -> Self {
        match value {
            DomainEntryType::Add => Self::Add,
            DomainEntryType::Subtract => Self::Subtract,
        }
    }
}

impl From<CapitalEntryType> for DomainEntryType {
    fn from(value: CapitalEntryType) -> Self {
        match value {
            CapitalEntryType::Add => Self::Add,
            CapitalEntryType::Subtract => Self::Subtract,
        }
    }
}
