//! API tests for product endpoints.

mod common;

use axum::http::StatusCode;
use common::{create_product, delete, get, post, put, test_app};
use serde_json::json;

#[tokio::test]
async fn test_create_list_and_search() {
    let app = test_app().await;
    create_product(&app, "Sprocket", 1, 5, 3).await;
    create_product(&app, "Bolt", 2, 1, 1).await;

    let (status, all) = get(&app, "/api/products").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Bolt", "Sprocket"]);
    assert_eq!(all[0]["costPrice"], json!(1.0));

    let (_, found) = get(&app, "/api/products?search=rock").await;
    assert_eq!(found.as_array().unwrap().len(), 1);
    assert_eq!(found[0]["name"], "Sprocket");
}

#[tokio::test]
async fn test_duplicate_and_invalid_products_rejected() {
    let app = test_app().await;
    create_product(&app, "Widget", 1, 5, 3).await;

    let (status, body) = post(
        &app,
        "/api/products",
        json!({ "name": "Widget", "stock": 1, "price": 5, "costPrice": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CONFLICT");

    let (status, body) = post(
        &app,
        "/api/products",
        json!({ "name": "Gear", "stock": -1, "price": 5, "costPrice": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, _) = post(
        &app,
        "/api/products",
        json!({ "name": "   ", "stock": 1, "price": 5, "costPrice": 3 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_stock() {
    let app = test_app().await;
    let id = create_product(&app, "Widget", 1, 5, 3).await;

    let (status, body) = put(&app, &format!("/api/products/{id}"), json!({ "stock": 40 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product stock updated successfully.");

    let (_, product) = get(&app, &format!("/api/products/{id}")).await;
    assert_eq!(product["stock"], 40);

    let (status, _) = put(&app, "/api/products/999", json!({ "stock": 1 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_blocked_by_sales() {
    let app = test_app().await;
    let id = create_product(&app, "Widget", 5, 100, 60).await;
    post(
        &app,
        "/api/transactions",
        json!({ "productName": "Widget", "quantity": 1, "costPrice": 60, "sellingPrice": 100 }),
    )
    .await;

    let (status, body) = delete(&app, &format!("/api/products/{id}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "CONFLICT");

    let other = create_product(&app, "Gadget", 5, 10, 6).await;
    let (status, _) = delete(&app, &format!("/api/products/{other}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = delete(&app, &format!("/api/products/{other}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
