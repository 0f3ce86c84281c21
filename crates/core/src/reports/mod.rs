//! Sales and expense reporting.
//!
//! This module provides pure business logic for the back-office reports:
//! - Period summary (sales, gross profit, expenses, net profit)
//! - Daily sales totals for charting
//! - Today's dashboard snapshot

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::*;
