use serde::Deserialize;

use storefront_core::DomainResult;
use storefront_orders::{OrderLineItem, OrderRequest};

// -------------------------
// Request DTOs
// -------------------------

/// `POST /api/v1/order` body.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(rename = "orderLineItemDtoList", default)]
    pub order_line_item_dto_list: Vec<OrderLineItemDto>,
}

#[derive(Debug, Deserialize)]
pub struct OrderLineItemDto {
    #[serde(rename = "skuCode", default)]
    pub sku_code: String,
    /// Price in smallest currency unit (e.g., cents).
    #[serde(default)]
    pub price: u64,
    #[serde(default)]
    pub quantity: i64,
}

/// Explicit wire→domain conversion; domain validation (non-empty list,
/// non-blank SKUs) happens here.
pub fn to_order_request(body: PlaceOrderRequest) -> DomainResult<OrderRequest> {
    let line_items = body
        .order_line_item_dto_list
        .into_iter()
        .map(|dto| OrderLineItem::new(dto.sku_code, dto.price, dto.quantity))
        .collect::<DomainResult<Vec<_>>>()?;

    OrderRequest::new(line_items)
}
