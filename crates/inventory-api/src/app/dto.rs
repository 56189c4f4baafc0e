use storefront_inventory::StockStatus;

/// Wire contract: `{"skuCode": ..., "isInStock": ...}`.
pub fn stock_status_to_json(status: StockStatus) -> serde_json::Value {
    serde_json::json!({
        "skuCode": status.sku_code,
        "isInStock": status.is_in_stock,
    })
}
