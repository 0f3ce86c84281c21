//! API tests for expenses, capital, reports and the dashboard.

mod common;

use axum::http::StatusCode;
use common::{create_product, delete, get, post, put, test_app};
use serde_json::json;

async fn total_capital(app: &axum::Router) -> serde_json::Value {
    let (status, body) = get(app, "/api/capital/total").await;
    assert_eq!(status, StatusCode::OK);
    body["totalCapital"].clone()
}

#[tokio::test]
async fn test_health() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_manual_capital_entries() {
    let app = test_app().await;
    assert_eq!(total_capital(&app).await, json!(0.0));

    let (status, _) = post(&app, "/api/capital", json!({ "amount": 1000, "type": "add" })).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = post(&app, "/api/capital", json!({ "amount": 200, "type": "subtract" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(total_capital(&app).await, json!(800.0));

    let (status, body) = post(&app, "/api/capital", json!({ "amount": 50, "type": "refund" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = post(&app, "/api/capital", json!({ "amount": 0, "type": "add" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, entries) = get(&app, "/api/capital").await;
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["type"], "subtract");
    assert_eq!(entries[1]["type"], "add");
}

#[tokio::test]
async fn test_expense_mirrors_capital() {
    let app = test_app().await;

    let (status, body) = post(&app, "/api/expenses", json!({ "description": "Rent", "amount": 500 })).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(total_capital(&app).await, json!(-500.0));

    let (_, entries) = get(&app, "/api/capital").await;
    assert_eq!(entries[0]["type"], "subtract");
    assert_eq!(entries[0]["amount"], json!(500.0));

    let (status, _) = put(
        &app,
        &format!("/api/expenses/{id}"),
        json!({ "description": "Rent", "amount": 450 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(total_capital(&app).await, json!(-450.0));

    let (_, expense) = get(&app, &format!("/api/expenses/{id}")).await;
    assert_eq!(expense["amount"], json!(450.0));

    let (status, _) = delete(&app, &format!("/api/expenses/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(total_capital(&app).await, json!(0.0));

    let (status, _) = get(&app, &format!("/api/expenses/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, expenses) = get(&app, "/api/expenses").await;
    assert!(expenses.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_expense_rejected() {
    let app = test_app().await;

    let (status, body) = post(&app, "/api/expenses", json!({ "description": "", "amount": 5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = post(&app, "/api/expenses", json!({ "description": "Tea", "amount": -5 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(total_capital(&app).await, json!(0.0));
}

#[tokio::test]
async fn test_reports_and_dashboard() {
    let app = test_app().await;
    create_product(&app, "Widget", 10, 100, 60).await;
    post(&app, "/api/capital", json!({ "amount": 1000, "type": "add" })).await;
    for quantity in [1, 2] {
        post(
            &app,
            "/api/transactions",
            json!({ "productName": "Widget", "quantity": quantity, "costPrice": 60, "sellingPrice": 100 }),
        )
        .await;
    }
    post(&app, "/api/expenses", json!({ "description": "Rent", "amount": 50 })).await;

    let (status, summary) = get(&app, "/api/reports/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["totalSales"], json!(300.0));
    assert_eq!(summary["grossProfit"], json!(120.0));
    assert_eq!(summary["totalExpenses"], json!(50.0));
    assert_eq!(summary["netProfit"], json!(70.0));
    assert_eq!(summary["itemsSold"], 3);
    assert_eq!(summary["transactionCount"], 2);

    let today = json!(stockbook_shared::local_today());
    let (status, daily) = get(&app, "/api/reports/daily-sales").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(daily, json!([{ "date": today, "total": 300.0 }]));

    let (status, snapshot) = get(&app, "/api/dashboard/today").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(snapshot["date"], today);
    assert_eq!(snapshot["totalSales"], json!(300.0));
    assert_eq!(snapshot["totalProfit"], json!(120.0));
    assert_eq!(snapshot["productsSold"], 3);
    assert_eq!(snapshot["totalCapital"], json!(950.0));

    let (status, _) = get(&app, "/api/reports/summary?startDate=2026-12-01&endDate=2026-01-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
