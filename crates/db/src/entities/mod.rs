//! `SeaORM` entity definitions.

pub mod capital_entries;
pub mod expenses;
pub mod products;
pub mod sea_orm_active_enums;
pub mod transactions;
