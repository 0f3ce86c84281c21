//! Initial database migration.
//!
//! Creates the products, transactions, expenses and capital_entries tables.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ============================================================
        // PRODUCTS
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string_len_uniq(Products::Name, 255))
                    .col(integer(Products::Stock).check(Expr::col(Products::Stock).gte(0)))
                    .col(decimal_len(Products::Price, 14, 2))
                    .col(decimal_len(Products::CostPrice, 14, 2))
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // TRANSACTIONS (sales)
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Transactions::Table)
                    .if_not_exists()
                    .col(pk_auto(Transactions::Id))
                    .col(integer_null(Transactions::ProductId))
                    .col(string_len(Transactions::ProductName, 255))
                    .col(integer(Transactions::Quantity).check(Expr::col(Transactions::Quantity).gt(0)))
                    .col(decimal_len(Transactions::CostPrice, 14, 2))
                    .col(decimal_len(Transactions::SellingPrice, 14, 2))
                    .col(decimal_len(Transactions::ProfitPerUnit, 14, 2))
                    .col(decimal_len(Transactions::Total, 14, 2))
                    .col(date(Transactions::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_transactions_product")
                            .from(Transactions::Table, Transactions::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_date")
                    .table(Transactions::Table)
                    .col(Transactions::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_product")
                    .table(Transactions::Table)
                    .col(Transactions::ProductId)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // EXPENSES
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(pk_auto(Expenses::Id))
                    .col(string_len(Expenses::Description, 255))
                    .col(decimal_len(Expenses::Amount, 14, 2))
                    .col(date(Expenses::Date))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_expenses_date")
                    .table(Expenses::Table)
                    .col(Expenses::Date)
                    .to_owned(),
            )
            .await?;

        // ============================================================
        // CAPITAL LEDGER (append-only)
        // ============================================================
        manager
            .create_table(
                Table::create()
                    .table(CapitalEntries::Table)
                    .if_not_exists()
                    .col(pk_auto(CapitalEntries::Id))
                    .col(decimal_len(CapitalEntries::Amount, 14, 2))
                    .col(date(CapitalEntries::Date))
                    .col(
                        string_len(CapitalEntries::EntryType, 16).check(
                            Expr::col(CapitalEntries::EntryType).is_in(["add", "subtract"]),
                        ),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_capital_entries_date")
                    .table(CapitalEntries::Table)
                    .col(CapitalEntries::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CapitalEntries::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expenses::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Transactions::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Stock,
    Price,
    CostPrice,
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    Id,
    ProductId,
    ProductName,
    Quantity,
    CostPrice,
    SellingPrice,
    ProfitPerUnit,
    Total,
    Date,
}

#[derive(DeriveIden)]
enum Expenses {
    Table,
    Id,
    Description,
    Amount,
    Date,
}

#[derive(DeriveIden)]
enum CapitalEntries {
    Table,
    Id,
    Amount,
    Date,
    EntryType,
}
