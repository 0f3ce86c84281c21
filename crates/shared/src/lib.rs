//! Shared types, errors, and configuration for Stockbook.
//!
//! This crate provides common types used across all other crates:
//! - Calendar date ranges used by list and report filters
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
pub use types::{DateRange, local_today};
