use serde::Deserialize;

use storefront_catalog::Product;

// -------------------------
// Request DTOs
// -------------------------

/// `POST /api/v1/product` body.
///
/// `name` is optional at the wire level so that a null/absent name surfaces
/// as a domain validation error (400) rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id().to_string(),
        "name": product.name(),
        "description": product.description(),
        "price": product.price(),
    })
}
