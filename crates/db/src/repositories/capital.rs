//! Capital repository for the append-only capital ledger.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use stockbook_core::{
    capital::{CapitalEntryType, CapitalMovement, total_capital},
    validation::{ValidationError, validate_amount},
};
use stockbook_shared::{AppError, DateRange};
use tracing::info;

use crate::entities::{
    capital_entries, sea_orm_active_enums::CapitalEntryType as EntryType,
};

/// Error types for capital operations.
#[derive(Debug, thiserror::Error)]
pub enum CapitalError {
    /// Input failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<CapitalError> for AppError {
    fn from(err: CapitalError) -> Self {
        match err {
            CapitalError::Invalid(e) => e.into(),
            CapitalError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Appends capital entries dated `date`, in order.
///
/// Callers pass their open database transaction so the entries commit or
/// roll back together with the change that caused them.
pub(crate) async fn append_movements<C: ConnectionTrait>(
    conn: &C,
    movements: &[CapitalMovement],
    date: NaiveDate,
) -> Result<Vec<capital_entries::Model>, DbErr> {
    let mut inserted = Vec::with_capacity(movements.len());
    for movement in movements {
        let entry = capital_entries::ActiveModel {
            amount: Set(movement.amount),
            date: Set(date),
            entry_type: Set(movement.entry_type.into()),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        inserted.push(entry);
    }
    Ok(inserted)
}

/// Capital repository.
#[derive(Debug, Clone)]
pub struct CapitalRepository {
    db: DatabaseConnection,
}

impl CapitalRepository {
    /// Creates a new capital repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a manual capital entry.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for a non-positive amount, or a database error.
    pub async fn add(
        &self,
        amount: Decimal,
        entry_type: CapitalEntryType,
        date: NaiveDate,
    ) -> Result<capital_entries::Model, CapitalError> {
        let amount = validate_amount("amount", amount)?;
        let movement = CapitalMovement { amount, entry_type };

        let mut inserted = append_movements(&self.db, &[movement], date).await?;
        let entry = inserted.pop().ok_or(DbErr::RecordNotInserted)?;

        info!(capital_entry_id = entry.id, %entry_type, %amount, "Capital entry recorded");
        Ok(entry)
    }

    /// Lists capital entries in a date range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, range: DateRange) -> Result<Vec<capital_entries::Model>, CapitalError> {
        let mut query = capital_entries::Entity::find();

        if let Some(start) = range.start() {
            query = query.filter(capital_entries::Column::Date.gte(start));
        }

        if let Some(end) = range.end() {
            query = query.filter(capital_entries::Column::Date.lte(end));
        }

        let entries = query
            .order_by_desc(capital_entries::Column::Date)
            .order_by_desc(capital_entries::Column::Id)
            .all(&self.db)
            .await?;

        Ok(entries)
    }

    /// Total available capital: adds minus subtracts over the whole ledger.
    ///
    /// Each entry type is summed in SQL; only the two per-type sums are
    /// loaded and signed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn total(&self) -> Result<Decimal, CapitalError> {
        let sums = capital_entries::Entity::find()
            .select_only()
            .column(capital_entries::Column::EntryType)
            .column_as(capital_entries::Column::Amount.sum(), "amount")
            .group_by(capital_entries::Column::EntryType)
            .into_tuple::<(EntryType, Option<Decimal>)>()
            .all(&self.db)
            .await?;

        Ok(total_capital(sums.into_iter().map(|(entry_type, amount)| {
            (
                CapitalEntryType::from(entry_type),
                amount.unwrap_or_default().round_dp(2),
            )
        })))
    }
}
