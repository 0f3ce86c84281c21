//! Sale pricing and stock bookkeeping.
//!
//! A sale moves stock, never capital. Every create, edit and reversal of a
//! sale is expressed as a signed stock delta against the product row.

pub mod error;
pub mod pricing;
pub mod stock;

#[cfg(test)]
mod stock_props;

pub use error::SaleError;
pub use pricing::SaleLine;
pub use stock::{edit_delta, ensure_available, reversal_delta, sale_delta};
