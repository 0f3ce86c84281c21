//! Transaction repository for sale database operations.
//!
//! A sale and the stock movement it causes are always written together:
//! creating, editing and deleting a sale each run in one database
//! transaction with the matching stock adjustment.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use stockbook_core::sales::{SaleError, SaleLine, edit_delta, reversal_delta, sale_delta};
use stockbook_shared::{AppError, DateRange};
use tracing::{info, warn};

use super::product::{
    NamedStockUpdate, StockUpdate, apply_stock_delta, apply_stock_delta_by_name,
};
use crate::entities::transactions;

/// Error types for sale operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// Transaction not found.
    #[error("Transaction not found: {0}")]
    NotFound(i32),

    /// No product with this name.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Sale rule violated (insufficient stock, bad quantity or price).
    #[error(transparent)]
    Sale(#[from] SaleError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<TransactionError> for AppError {
    fn from(err: TransactionError) -> Self {
        match err {
            TransactionError::NotFound(_) | TransactionError::ProductNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            TransactionError::Sale(e) => e.into(),
            TransactionError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for recording a sale.
#[derive(Debug, Clone)]
pub struct CreateSaleInput {
    /// Name of the product sold.
    pub product_name: String,
    /// Quantity and unit prices.
    pub line: SaleLine,
    /// Sale date.
    pub date: NaiveDate,
}

/// Transaction repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a sale and takes the sold units off the product's stock.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No product has the given name
    /// - The product does not have enough stock
    /// - Database operation fails
    pub async fn create(&self, input: CreateSaleInput) -> Result<transactions::Model, TransactionError> {
        let txn = self.db.begin().await?;

        let delta = sale_delta(input.line.quantity);
        let product = match apply_stock_delta_by_name(&txn, &input.product_name, delta).await? {
            NamedStockUpdate::Applied(product) => product,
            NamedStockUpdate::Missing => {
                return Err(TransactionError::ProductNotFound(input.product_name));
            }
            NamedStockUpdate::Rejected(e) => {
                warn!(product = %input.product_name, error = %e, "Sale rejected");
                return Err(e.into());
            }
        };

        let line = input.line;
        let transaction = transactions::ActiveModel {
            product_id: Set(Some(product.id)),
            product_name: Set(product.name.clone()),
            quantity: Set(line.quantity),
            cost_price: Set(line.cost_price),
            selling_price: Set(line.selling_price),
            profit_per_unit: Set(line.profit_per_unit()),
            total: Set(line.total()),
            date: Set(input.date),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            transaction_id = transaction.id,
            product_id = product.id,
            quantity = line.quantity,
            "Sale recorded"
        );
        Ok(transaction)
    }

    /// Lists sales in a date range, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, range: DateRange) -> Result<Vec<transactions::Model>, TransactionError> {
        let mut query = transactions::Entity::find();

        if let Some(start) = range.start() {
            query = query.filter(transactions::Column::Date.gte(start));
        }

        if let Some(end) = range.end() {
            query = query.filter(transactions::Column::Date.lte(end));
        }

        let transactions = query
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::Id)
            .all(&self.db)
            .await?;

        Ok(transactions)
    }

    /// Gets a sale by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no sale has this ID.
    pub async fn find_by_id(&self, id: i32) -> Result<transactions::Model, TransactionError> {
        transactions::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(TransactionError::NotFound(id))
    }

    /// Changes a sale's quantity and prices, moving the quantity difference
    /// to or from the product's stock.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sale or its product is not found
    /// - Raising the quantity needs more stock than is on hand
    /// - Database operation fails
    pub async fn update(&self, id: i32, line: SaleLine) -> Result<transactions::Model, TransactionError> {
        let txn = self.db.begin().await?;

        let original = transactions::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(TransactionError::NotFound(id))?;

        let delta = edit_delta(original.quantity, line.quantity);
        if delta != 0 {
            let product_id = original
                .product_id
                .ok_or_else(|| TransactionError::ProductNotFound(original.product_name.clone()))?;

            match apply_stock_delta(&txn, product_id, delta).await? {
                StockUpdate::Applied => {}
                StockUpdate::Missing => {
                    return Err(TransactionError::ProductNotFound(original.product_name));
                }
                StockUpdate::Rejected(e) => {
                    warn!(transaction_id = id, error = %e, "Sale edit rejected");
                    return Err(e.into());
                }
            }
        }

        let mut active: transactions::ActiveModel = original.into();
        active.quantity = Set(line.quantity);
        active.cost_price = Set(line.cost_price);
        active.selling_price = Set(line.selling_price);
        active.profit_per_unit = Set(line.profit_per_unit());
        active.total = Set(line.total());
        let updated = active.update(&txn).await?;

        txn.commit().await?;

        info!(transaction_id = id, stock_delta = delta, "Sale updated");
        Ok(updated)
    }

    /// Deletes a sale and puts its units back on the product's stock.
    ///
    /// If the product no longer exists the stock restore is skipped.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no sale has this ID, or a database error.
    pub async fn delete(&self, id: i32) -> Result<(), TransactionError> {
        let txn = self.db.begin().await?;

        let transaction = transactions::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(TransactionError::NotFound(id))?;

        let restored = match transaction.product_id {
            Some(product_id) => {
                apply_stock_delta(&txn, product_id, reversal_delta(transaction.quantity)).await?
            }
            None => StockUpdate::Missing,
        };

        match restored {
            StockUpdate::Applied => {}
            StockUpdate::Missing => warn!(
                transaction_id = id,
                product = %transaction.product_name,
                "Product gone, stock not restored"
            ),
            StockUpdate::Rejected(e) => return Err(e.into()),
        }

        transactions::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(transaction_id = id, quantity = transaction.quantity, "Sale deleted");
        Ok(())
    }
}
