//! Core business logic for Stockbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain rules and calculations live here; the db crate applies them
//! inside database transactions.
//!
//! # Modules
//!
//! - `sales` - Sale pricing and stock adjustments
//! - `capital` - Capital ledger signs and expense reversal movements
//! - `validation` - Input rules shared by every write operation
//! - `reports` - Sales summaries and daily aggregates

pub mod capital;
pub mod reports;
pub mod sales;
pub mod validation;
