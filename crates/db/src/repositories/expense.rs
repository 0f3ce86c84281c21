//! Expense repository.
//!
//! Expenses are mirrored in the capital ledger. Each write appends the
//! compensating capital entries from `ExpenseEffect` in the same database
//! transaction as the expense row change.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use stockbook_core::{
    capital::ExpenseEffect,
    validation::{ValidationError, validate_amount, validate_text},
};
use stockbook_shared::{AppError, DateRange};
use tracing::info;

use super::capital::append_movements;
use crate::entities::expenses;

/// Error types for expense operations.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    /// Expense not found.
    #[error("Expense not found: {0}")]
    NotFound(i32),

    /// Input failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ExpenseError> for AppError {
    fn from(err: ExpenseError) -> Self {
        match err {
            ExpenseError::NotFound(_) => Self::NotFound(err.to_string()),
            ExpenseError::Invalid(e) => e.into(),
            ExpenseError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Expense repository.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an expense and subtracts its amount from capital.
    ///
    /// # Errors
    ///
    /// Returns `Invalid` for a blank description or non-positive amount, or a
    /// database error.
    pub async fn create(
        &self,
        description: &str,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<expenses::Model, ExpenseError> {
        let description = validate_text("description", description)?;
        let amount = validate_amount("amount", amount)?;

        let txn = self.db.begin().await?;

        let expense = expenses::ActiveModel {
            description: Set(description),
            amount: Set(amount),
            date: Set(date),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        append_movements(&txn, &ExpenseEffect::created(amount), date).await?;

        txn.commit().await?;

        info!(expense_id = expense.id, %amount, "Expense recorded");
        Ok(expense)
    }

    /// Lists expenses in a date range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, range: DateRange) -> Result<Vec<expenses::Model>, ExpenseError> {
        let mut query = expenses::Entity::find();

        if let Some(start) = range.start() {
            query = query.filter(expenses::Column::Date.gte(start));
        }

        if let Some(end) = range.end() {
            query = query.filter(expenses::Column::Date.lte(end));
        }

        let expenses = query
            .order_by_desc(expenses::Column::Date)
            .order_by_desc(expenses::Column::Id)
            .all(&self.db)
            .await?;

        Ok(expenses)
    }

    /// Gets an expense by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no expense has this ID.
    pub async fn find_by_id(&self, id: i32) -> Result<expenses::Model, ExpenseError> {
        expenses::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ExpenseError::NotFound(id))
    }

    /// Edits an expense, reversing the old amount in capital and subtracting
    /// the new one. Both capital entries keep the expense's original date.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no expense has this ID, `Invalid` for bad input,
    /// or a database error.
    pub async fn update(
        &self,
        id: i32,
        description: &str,
        amount: Decimal,
    ) -> Result<expenses::Model, ExpenseError> {
        let description = validate_text("description", description)?;
        let amount = validate_amount("amount", amount)?;

        let txn = self.db.begin().await?;

        let original = expenses::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(ExpenseError::NotFound(id))?;

        let old_amount = original.amount;
        append_movements(
            &txn,
            &ExpenseEffect::updated(old_amount, amount),
            original.date,
        )
        .await?;

        let mut active: expenses::ActiveModel = original.into();
        active.description = Set(description);
        active.amount = Set(amount);
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        info!(expense_id = id, %old_amount, new_amount = %amount, "Expense updated");
        Ok(updated)
    }

    /// Deletes an expense and adds its amount back to capital.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no expense has this ID, or a database error.
    pub async fn delete(&self, id: i32) -> Result<(), ExpenseError> {
        let txn = self.db.begin().await?;

        let expense = expenses::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(ExpenseError::NotFound(id))?;

        append_movements(&txn, &ExpenseEffect::deleted(expense.amount), expense.date).await?;
        expenses::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        info!(expense_id = id, amount = %expense.amount, "Expense deleted");
        Ok(())
    }
}
