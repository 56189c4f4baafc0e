use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use storefront_catalog::Product;
use storefront_core::ProductId;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/product", post(create_product).get(list_products))
        .route("/api/v1/product/:id", get(get_product))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    let product = match Product::new(
        body.name.unwrap_or_default(),
        body.description,
        body.price,
        Utc::now(),
    ) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    tracing::info!(id = %product.id(), name = product.name(), "creating product");

    let stored = match services.product_store().save(product).await {
        Ok(p) => p,
        Err(e) => return errors::store_error_to_response(e),
    };

    (StatusCode::CREATED, Json(dto::product_to_json(&stored))).into_response()
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let products = match services.product_store().find_all().await {
        Ok(products) => products,
        Err(e) => return errors::store_error_to_response(e),
    };

    let body: Vec<serde_json::Value> = products.iter().map(dto::product_to_json).collect();
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"),
    };

    match services.product_store().find_by_id(id).await {
        Ok(Some(product)) => (StatusCode::OK, Json(dto::product_to_json(&product))).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}
