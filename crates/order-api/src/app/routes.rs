use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/order", post(place_order))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `POST /api/v1/order`
///
/// Accepts or rejects the order as a unit; on success responds `201` with a
/// plain-text confirmation.
pub async fn place_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::PlaceOrderRequest>,
) -> axum::response::Response {
    let request = match dto::to_order_request(body) {
        Ok(request) => request,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.place_order(request).await {
        Ok(_order) => (StatusCode::CREATED, "Order Placed Successfully").into_response(),
        Err(e) => errors::place_order_error_to_response(e),
    }
}
