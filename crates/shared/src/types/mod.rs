//! Common types used across the application.

pub mod date;

pub use date::{DateRange, DateRangeError, local_today};
