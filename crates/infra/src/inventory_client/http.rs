//! HTTP implementation of the stock-lookup capability.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use storefront_inventory::StockStatus;

use super::InventoryClient;
use crate::error::InventoryLookupError;

/// Wire shape of one inventory service response entry.
#[derive(Debug, Deserialize)]
struct StockStatusDto {
    #[serde(rename = "skuCode")]
    sku_code: String,
    #[serde(rename = "isInStock")]
    is_in_stock: bool,
}

impl From<StockStatusDto> for StockStatus {
    fn from(dto: StockStatusDto) -> Self {
        Self {
            sku_code: dto.sku_code,
            is_in_stock: dto.is_in_stock,
        }
    }
}

/// Client for `GET /api/v1/inventory` on the inventory service.
///
/// Single attempt per lookup with a request timeout; no retries, no
/// circuit breaking. A timeout surfaces as a request error and the caller
/// treats it as a rejection.
pub struct HttpInventoryClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpInventoryClient {
    /// `base_url` is the inventory service root, e.g. `http://localhost:8082`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, InventoryLookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl InventoryClient for HttpInventoryClient {
    async fn check_stock(
        &self,
        sku_codes: &[String],
    ) -> Result<Vec<StockStatus>, InventoryLookupError> {
        let url = format!("{}/api/v1/inventory", self.base_url);
        let query: Vec<(&str, &str)> = sku_codes
            .iter()
            .map(|sku| ("skuCode", sku.as_str()))
            .collect();

        tracing::debug!(count = sku_codes.len(), "batched stock lookup");
        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InventoryLookupError::Status(status));
        }

        let statuses: Vec<StockStatusDto> = response.json().await?;
        Ok(statuses.into_iter().map(StockStatus::from).collect())
    }
}
