//! Database seeder for Stockbook development and demos.
//!
//! Seeds a small catalogue, opening capital, a week of sales and a few
//! expenses so the dashboard and reports have something to show. Writes go
//! through the repositories, so stock and capital stay consistent.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::DatabaseConnection;
use stockbook_core::{capital::CapitalEntryType, sales::SaleLine};
use stockbook_db::{
    CapitalRepository, ExpenseRepository, ProductRepository, TransactionRepository,
    repositories::{CreateProductInput, CreateSaleInput},
};
use stockbook_shared::{AppConfig, local_today};

/// Demo catalogue: name, stock, selling price, cost price.
const PRODUCTS: [(&str, i32, Decimal, Decimal); 5] = [
    ("Arabica Beans 250g", 40, dec!(85000), dec!(60000)),
    ("Paper Filter (100)", 60, dec!(25000), dec!(15000)),
    ("Ceramic Mug", 24, dec!(45000), dec!(28000)),
    ("Milk Frother", 8, dec!(150000), dec!(110000)),
    ("Gooseneck Kettle", 5, dec!(320000), dec!(240000)),
];

/// Days back from today, product index, quantity.
const SALES: [(i64, usize, i32); 8] = [
    (6, 0, 3),
    (5, 1, 5),
    (4, 2, 2),
    (3, 0, 1),
    (2, 3, 1),
    (1, 1, 4),
    (0, 2, 1),
    (0, 4, 1),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to {}...", config.database.url);
    let db = stockbook_db::connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;
    stockbook_db::migrate(&db)
        .await
        .context("Failed to apply migrations")?;

    let today = local_today();

    println!("Seeding opening capital...");
    seed_capital(&db, today - Duration::days(7)).await?;

    println!("Seeding products...");
    seed_products(&db).await?;

    println!("Seeding sales...");
    seed_sales(&db, today).await?;

    println!("Seeding expenses...");
    seed_expenses(&db, today).await?;

    println!("Seeding complete!");
    Ok(())
}

async fn seed_capital(db: &DatabaseConnection, date: NaiveDate) -> anyhow::Result<()> {
    let repo = CapitalRepository::new(db.clone());
    repo.add(dec!(5000000), CapitalEntryType::Add, date).await?;
    println!("  Opening capital: {}", repo.total().await?);
    Ok(())
}

async fn seed_products(db: &DatabaseConnection) -> anyhow::Result<()> {
    let repo = ProductRepository::new(db.clone());
    for (name, stock, price, cost_price) in PRODUCTS {
        let product = repo
            .create(CreateProductInput {
                name: name.to_string(),
                stock,
                price,
                cost_price,
            })
            .await
            .with_context(|| format!("Failed to create product '{name}'"))?;
        println!("  {} (stock {})", product.name, product.stock);
    }
    Ok(())
}

async fn seed_sales(db: &DatabaseConnection, today: NaiveDate) -> anyhow::Result<()> {
    let repo = TransactionRepository::new(db.clone());
    for (days_ago, index, quantity) in SALES {
        let (name, _, price, cost_price) = PRODUCTS[index];
        let sale = repo
            .create(CreateSaleInput {
                product_name: name.to_string(),
                line: SaleLine::new(quantity, cost_price, price)?,
                date: today - Duration::days(days_ago),
            })
            .await?;
        println!("  {} x{} on {}", sale.product_name, sale.quantity, sale.date);
    }
    Ok(())
}

async fn seed_expenses(db: &DatabaseConnection, today: NaiveDate) -> anyhow::Result<()> {
    let repo = ExpenseRepository::new(db.clone());
    let expenses = [
        ("Shop rent", dec!(1500000), 6),
        ("Electricity", dec!(350000), 3),
        ("Cleaning supplies", dec!(75000), 1),
    ];
    for (description, amount, days_ago) in expenses {
        repo.create(description, amount, today - Duration::days(days_ago))
            .await?;
        println!("  {description}: {amount}");
    }
    Ok(())
}
