//! Product repository for catalogue and stock database operations.

use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait, sea_query::Expr,
};
use stockbook_core::{
    sales::{SaleError, ensure_available},
    validation::{ValidationError, validate_price, validate_stock, validate_text},
};
use stockbook_shared::AppError;
use tracing::{info, warn};

use crate::entities::{products, transactions};

/// Error types for product operations.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// Product not found.
    #[error("Product not found: {0}")]
    NotFound(i32),

    /// Product name already taken.
    #[error("Product '{0}' already exists")]
    DuplicateName(String),

    /// Product still referenced by sales.
    #[error("Cannot delete product '{0}': existing transactions reference this product")]
    HasTransactions(String),

    /// Input failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => Self::NotFound(err.to_string()),
            ProductError::DuplicateName(_) | ProductError::HasTransactions(_) => {
                Self::Conflict(err.to_string())
            }
            ProductError::Invalid(e) => e.into(),
            ProductError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct CreateProductInput {
    /// Unique product name.
    pub name: String,
    /// Units on hand.
    pub stock: i32,
    /// Unit selling price.
    pub price: Decimal,
    /// Unit cost price.
    pub cost_price: Decimal,
}

/// Outcome of a conditional stock update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StockUpdate {
    /// Delta applied.
    Applied,
    /// Product row does not exist.
    Missing,
    /// Delta would drive stock below zero.
    Rejected(SaleError),
}

/// Adds `delta` to a product's stock only if the result stays non-negative.
///
/// Runs as a single `UPDATE ... WHERE id = ? AND stock >= -delta`, so two
/// concurrent sales of the last unit cannot both succeed.
pub(crate) async fn apply_stock_delta<C: ConnectionTrait>(
    conn: &C,
    product_id: i32,
    delta: i32,
) -> Result<StockUpdate, DbErr> {
    let Some(floor) = delta.checked_neg() else {
        return Ok(StockUpdate::Rejected(SaleError::StockOverflow));
    };

    let result = products::Entity::update_many()
        .col_expr(
            products::Column::Stock,
            Expr::col(products::Column::Stock).add(delta),
        )
        .filter(products::Column::Id.eq(product_id))
        .filter(products::Column::Stock.gte(floor))
        .exec(conn)
        .await?;

    if result.rows_affected > 0 {
        return Ok(StockUpdate::Applied);
    }

    match products::Entity::find_by_id(product_id).one(conn).await? {
        None => Ok(StockUpdate::Missing),
        Some(product) => Ok(StockUpdate::Rejected(shortfall(product.stock, delta, floor))),
    }
}

/// Outcome of a conditional stock update on a product looked up by name.
#[derive(Debug)]
pub(crate) enum NamedStockUpdate {
    /// Delta applied; carries the product as it is after the update.
    Applied(products::Model),
    /// No product has this name.
    Missing,
    /// Delta would drive stock below zero.
    Rejected(SaleError),
}

/// Adds `delta` to the stock of the product called `name` only if the result
/// stays non-negative.
///
/// The conditional `UPDATE` is the first statement, so inside a transaction
/// the write lock is taken before anything is read.
pub(crate) async fn apply_stock_delta_by_name<C: ConnectionTrait>(
    conn: &C,
    name: &str,
    delta: i32,
) -> Result<NamedStockUpdate, DbErr> {
    let Some(floor) = delta.checked_neg() else {
        return Ok(NamedStockUpdate::Rejected(SaleError::StockOverflow));
    };

    let result = products::Entity::update_many()
        .col_expr(
            products::Column::Stock,
            Expr::col(products::Column::Stock).add(delta),
        )
        .filter(products::Column::Name.eq(name))
        .filter(products::Column::Stock.gte(floor))
        .exec(conn)
        .await?;

    let product = products::Entity::find()
        .filter(products::Column::Name.eq(name))
        .one(conn)
        .await?;

    Ok(match product {
        None => NamedStockUpdate::Missing,
        Some(product) if result.rows_affected > 0 => NamedStockUpdate::Applied(product),
        Some(product) => NamedStockUpdate::Rejected(shortfall(product.stock, delta, floor)),
    })
}

fn shortfall(stock: i32, delta: i32, floor: i32) -> SaleError {
    ensure_available(stock, delta)
        .err()
        .unwrap_or(SaleError::InsufficientStock {
            available: stock,
            requested: floor,
        })
}

/// Product repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    /// Creates a new product repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if the name is taken, `Invalid` for bad input.
    pub async fn create(&self, input: CreateProductInput) -> Result<products::Model, ProductError> {
        let name = validate_text("name", &input.name)?;
        let stock = validate_stock(input.stock)?;
        let price = validate_price("price", input.price)?;
        let cost_price = validate_price("costPrice", input.cost_price)?;

        let product = products::ActiveModel {
            name: Set(name.clone()),
            stock: Set(stock),
            price: Set(price),
            cost_price: Set(cost_price),
            ..Default::default()
        };

        let product = product.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ProductError::DuplicateName(name),
            _ => ProductError::Database(e),
        })?;

        info!(product_id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Lists products ordered by name, optionally filtered by a name substring.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<products::Model>, ProductError> {
        let mut query = products::Entity::find();

        if let Some(term) = search.map(str::trim).filter(|t| !t.is_empty()) {
            query = query.filter(products::Column::Name.contains(term));
        }

        let products = query
            .order_by_asc(products::Column::Name)
            .all(&self.db)
            .await?;

        Ok(products)
    }

    /// Gets a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no product has this ID.
    pub async fn find_by_id(&self, id: i32) -> Result<products::Model, ProductError> {
        products::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Overwrites a product's stock count.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no product has this ID, `Invalid` for negative stock.
    pub async fn update_stock(&self, id: i32, stock: i32) -> Result<products::Model, ProductError> {
        let stock = validate_stock(stock)?;

        let product = self.find_by_id(id).await?;
        let mut active: products::ActiveModel = product.into();
        active.stock = Set(stock);
        let updated = active.update(&self.db).await?;

        info!(product_id = id, stock, "Product stock updated");
        Ok(updated)
    }

    /// Deletes a product that no sale references.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no product has this ID, `HasTransactions` if any
    /// sale still points at it.
    pub async fn delete(&self, id: i32) -> Result<(), ProductError> {
        let txn = self.db.begin().await?;

        let product = products::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let referenced = transactions::Entity::find()
            .filter(transactions::Column::ProductId.eq(id))
            .one(&txn)
            .await?
            .is_some();

        if referenced {
            warn!(product_id = id, name = %product.name, "Refusing to delete product with sales");
            return Err(ProductError::HasTransactions(product.name));
        }

        products::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(product_id = id, name = %product.name, "Product deleted");
        Ok(())
    }
}
