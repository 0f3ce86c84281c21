//! Capital ledger rules.
//!
//! Capital is an append-only list of signed entries. Expenses never edit or
//! remove entries; every change to an expense appends compensating entries
//! instead, so the ledger total always reflects the current expense rows.

pub mod entry;
pub mod movement;

#[cfg(test)]
mod movement_props;

pub use entry::{CapitalEntryType, InvalidEntryType};
pub use movement::{CapitalMovement, ExpenseEffect, total_capital};
