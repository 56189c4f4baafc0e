use std::sync::Arc;

use axum::{
    extract::{Extension, RawQuery},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_inventory::stock_statuses;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/inventory", get(is_in_stock))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// `GET /api/v1/inventory?skuCode=a&skuCode=b`
///
/// Returns one `{skuCode, isInStock}` entry per SKU the store resolves;
/// unknown SKUs are omitted. A query with no SKUs is a client error, never
/// an empty success.
pub async fn is_in_stock(
    Extension(services): Extension<Arc<AppServices>>,
    RawQuery(query): RawQuery,
) -> axum::response::Response {
    let sku_codes = parse_sku_codes(query.as_deref());
    if sku_codes.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "at least one skuCode query parameter is required",
        );
    }

    tracing::info!(sku_codes = ?sku_codes, "stock lookup");

    let records = match services.sku_store().find_by_sku_codes(&sku_codes).await {
        Ok(records) => records,
        Err(e) => return errors::store_error_to_response(e),
    };

    let body: Vec<serde_json::Value> = stock_statuses(&records)
        .into_iter()
        .map(dto::stock_status_to_json)
        .collect();

    (StatusCode::OK, Json(body)).into_response()
}

/// Collect the repeated `skuCode` parameters, dropping blanks and
/// duplicates. `axum::extract::Query` cannot collect a repeated key, so the
/// raw query string is parsed directly.
fn parse_sku_codes(query: Option<&str>) -> Vec<String> {
    let Some(query) = query else {
        return Vec::new();
    };

    let mut sku_codes: Vec<String> = Vec::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if key != "skuCode" || value.trim().is_empty() {
            continue;
        }
        if !sku_codes.iter().any(|s| s == value.as_ref()) {
            sku_codes.push(value.into_owned());
        }
    }
    sku_codes
}

#[cfg(test)]
mod tests {
    use super::parse_sku_codes;

    #[test]
    fn collects_repeated_sku_code_params() {
        let parsed = parse_sku_codes(Some("skuCode=AAA111&skuCode=BBB222"));
        assert_eq!(parsed, vec!["AAA111", "BBB222"]);
    }

    #[test]
    fn ignores_other_params_blanks_and_duplicates() {
        let parsed = parse_sku_codes(Some("skuCode=AAA111&other=x&skuCode=&skuCode=AAA111"));
        assert_eq!(parsed, vec!["AAA111"]);
    }

    #[test]
    fn missing_query_yields_no_skus() {
        assert!(parse_sku_codes(None).is_empty());
        assert!(parse_sku_codes(Some("")).is_empty());
    }

    #[test]
    fn decodes_percent_encoded_values() {
        let parsed = parse_sku_codes(Some("skuCode=A%20B"));
        assert_eq!(parsed, vec!["A B"]);
    }
}
