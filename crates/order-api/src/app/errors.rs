use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use storefront_core::DomainError;

use crate::app::services::PlaceOrderError;

pub fn place_order_error_to_response(err: PlaceOrderError) -> axum::response::Response {
    match err {
        PlaceOrderError::Domain(e) => domain_error_to_response(e),
        PlaceOrderError::Inventory(e) => {
            tracing::warn!(error = %e, "stock lookup failed; rejecting order");
            json_error(StatusCode::BAD_GATEWAY, "inventory_unavailable", e.to_string())
        }
        PlaceOrderError::Store(e) => {
            tracing::error!(error = %e, "order store failure");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::StockUnavailable(msg) => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "stock_unavailable",
            format!("product is not in stock: {msg}"),
        ),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
