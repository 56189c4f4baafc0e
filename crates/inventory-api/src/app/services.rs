use std::sync::Arc;

use storefront_infra::{
    store::postgres, InMemorySkuStore, PostgresSkuStore, SkuStore, StoreError,
};
use storefront_inventory::SkuRecord;

/// Explicitly wired capabilities for the inventory service.
pub struct AppServices {
    sku_store: Arc<dyn SkuStore>,
}

impl AppServices {
    pub fn new(sku_store: Arc<dyn SkuStore>) -> Self {
        Self { sku_store }
    }

    pub fn sku_store(&self) -> &dyn SkuStore {
        &*self.sku_store
    }
}

/// Select the store from the environment: `DATABASE_URL` set → Postgres,
/// absent → in-memory.
pub async fn build_services() -> Result<AppServices, StoreError> {
    let store: Arc<dyn SkuStore> = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = postgres::connect(&url).await?;
            tracing::info!("using postgres sku store");
            Arc::new(PostgresSkuStore::new(pool).await?)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using in-memory sku store");
            Arc::new(InMemorySkuStore::new())
        }
    };

    Ok(AppServices::new(store))
}

/// Startup seeding: load the demo SKUs once, only into an empty store.
pub async fn seed_if_empty(services: &AppServices) -> Result<(), StoreError> {
    if !services.sku_store().find_all().await?.is_empty() {
        return Ok(());
    }

    let records = vec![
        SkuRecord::new("AAA111", 1).expect("static seed record"),
        SkuRecord::new("BBB222", 0).expect("static seed record"),
        SkuRecord::new("CCC333", 6).expect("static seed record"),
    ];

    tracing::info!(count = records.len(), "seeding empty sku store");
    services.sku_store().save_all(records).await
}
