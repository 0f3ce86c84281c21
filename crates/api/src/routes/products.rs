//! Product catalogue routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockbook_db::{ProductRepository, entities::products, repositories::CreateProductInput};
use validator::Validate;

use super::{CreatedResponse, MessageResponse};
use crate::{
    ApiResult, AppState,
    extractors::{PathId, ValidatedJson},
};

/// Creates the product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_stock).delete(delete_product),
        )
}

/// Query parameters for listing products.
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// Substring to match against product names.
    pub search: Option<String>,
}

/// Request body for creating a product.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// Unique product name.
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub name: String,
    /// Units on hand.
    #[validate(range(min = 0, message = "cannot be negative"))]
    pub stock: i32,
    /// Unit selling price.
    pub price: Decimal,
    /// Unit cost price.
    pub cost_price: Decimal,
}

/// Request body for overwriting a product's stock.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStockRequest {
    /// New units on hand.
    #[validate(range(min = 0, message = "cannot be negative"))]
    pub stock: i32,
}

/// A catalogue product.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product ID.
    pub id: i32,
    /// Product name.
    pub name: String,
    /// Units on hand.
    pub stock: i32,
    /// Unit selling price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Unit cost price.
    #[serde(with = "rust_decimal::serde::float")]
    pub cost_price: Decimal,
}

impl From<products::Model> for ProductResponse {
    fn from(p: products::Model) -> Self {
        Self {
            id: p.id,
            name: p.name,
            stock: p.stock,
            price: p.price,
            cost_price: p.cost_price,
        }
    }
}

/// GET `/products` - List products by name, optionally filtered.
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let repo = ProductRepository::new((*state.db).clone());
    let products = repo.list(query.search.as_deref()).await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// POST `/products` - Create a product.
async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> ApiResult<impl IntoResponse> {
    let repo = ProductRepository::new((*state.db).clone());
    let product = repo
        .create(CreateProductInput {
            name: payload.name,
            stock: payload.stock,
            price: payload.price,
            cost_price: payload.cost_price,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: product.id })))
}

/// GET `/products/{id}` - Get one product.
async fn get_product(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ApiResult<Json<ProductResponse>> {
    let repo = ProductRepository::new((*state.db).clone());
    let product = repo.find_by_id(id).await?;

    Ok(Json(product.into()))
}

/// PUT `/products/{id}` - Overwrite a product's stock count.
async fn update_stock(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(payload): ValidatedJson<UpdateStockRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let repo = ProductRepository::new((*state.db).clone());
    repo.update_stock(id, payload.stock).await?;

    Ok(Json(MessageResponse::new("Product stock updated successfully.")))
}

/// DELETE `/products/{id}` - Delete a product no sale references.
async fn delete_product(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> ApiResult<Json<MessageResponse>> {
    let repo = ProductRepository::new((*state.db).clone());
    repo.delete(id).await?;

    Ok(Json(MessageResponse::new("Product deleted successfully.")))
}
