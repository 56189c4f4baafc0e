use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;

use storefront_core::DomainError;
use storefront_infra::{
    store::postgres, HttpInventoryClient, InMemoryOrderStore, InventoryClient,
    InventoryLookupError, OrderStore, PostgresOrderStore, StoreError,
};
use storefront_orders::{evaluate_availability, Order, OrderRequest};

/// Failure of the placement workflow.
#[derive(Debug, Error)]
pub enum PlaceOrderError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The stock lookup could not be completed. Folded into rejection: the
    /// validator never assumes unavailable stock data means "in stock".
    #[error("stock lookup failed: {0}")]
    Inventory(#[from] InventoryLookupError),

    #[error("order persistence failed: {0}")]
    Store(#[from] StoreError),
}

/// Explicitly wired capabilities for the order service.
pub struct AppServices {
    inventory: Arc<dyn InventoryClient>,
    order_store: Arc<dyn OrderStore>,
}

impl AppServices {
    pub fn new(inventory: Arc<dyn InventoryClient>, order_store: Arc<dyn OrderStore>) -> Self {
        Self {
            inventory,
            order_store,
        }
    }

    pub fn order_store(&self) -> &dyn OrderStore {
        &*self.order_store
    }

    /// The order-placement workflow.
    ///
    /// One batched stock lookup over the distinct SKU set, then accept-or-
    /// reject as a unit. There is no lock between the stock check and the
    /// order write: a concurrent order can deplete stock in that window.
    pub async fn place_order(&self, request: OrderRequest) -> Result<Order, PlaceOrderError> {
        let sku_codes = request.distinct_sku_codes();

        tracing::info!(sku_codes = ?sku_codes, "checking stock for order");
        let statuses = self.inventory.check_stock(&sku_codes).await?;

        evaluate_availability(&sku_codes, &statuses)?;

        let order = Order::place(request, Utc::now());
        let stored = self.order_store.save(order).await?;

        tracing::info!(
            id = %stored.id(),
            order_number = stored.order_number(),
            line_items = stored.line_items().len(),
            "order placed"
        );
        Ok(stored)
    }
}

/// Wire the service from the environment: `INVENTORY_SERVICE_URL` (with a
/// dev default), `INVENTORY_TIMEOUT_MS`, and `DATABASE_URL` for the store.
pub async fn build_services() -> anyhow::Result<AppServices> {
    let inventory_url = std::env::var("INVENTORY_SERVICE_URL").unwrap_or_else(|_| {
        tracing::warn!("INVENTORY_SERVICE_URL not set; using http://localhost:8082");
        "http://localhost:8082".to_string()
    });

    let timeout_ms: u64 = std::env::var("INVENTORY_TIMEOUT_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3_000);

    let inventory: Arc<dyn InventoryClient> = Arc::new(HttpInventoryClient::new(
        inventory_url,
        Duration::from_millis(timeout_ms),
    )?);

    let order_store: Arc<dyn OrderStore> = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = postgres::connect(&url).await?;
            tracing::info!("using postgres order store");
            Arc::new(PostgresOrderStore::new(pool).await?)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using in-memory order store");
            Arc::new(InMemoryOrderStore::new())
        }
    };

    Ok(AppServices::new(inventory, order_store))
}
