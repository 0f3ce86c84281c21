//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Every operation that touches more than one row runs inside a single
//! database transaction; returning early drops the transaction, which rolls
//! it back.

pub mod capital;
pub mod expense;
pub mod product;
pub mod report;
pub mod transaction;

pub use capital::{CapitalError, CapitalRepository};
pub use expense::{ExpenseError, ExpenseRepository};
pub use product::{CreateProductInput, ProductError, ProductRepository};
pub use report::{ReportError, ReportRepository};
pub use transaction::{CreateSaleInput, TransactionError, TransactionRepository};
