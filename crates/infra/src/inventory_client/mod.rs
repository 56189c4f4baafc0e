//! Stock-lookup capability against the inventory service.

use async_trait::async_trait;

use storefront_inventory::StockStatus;

use crate::error::InventoryLookupError;

pub mod http;

pub use http::HttpInventoryClient;

/// Batched stock check. One call covers the whole distinct SKU set of an
/// order; implementations must never fan out per SKU.
#[async_trait]
pub trait InventoryClient: Send + Sync {
    async fn check_stock(&self, sku_codes: &[String])
        -> Result<Vec<StockStatus>, InventoryLookupError>;
}
