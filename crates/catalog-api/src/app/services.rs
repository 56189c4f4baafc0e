use std::sync::Arc;

use storefront_infra::{
    store::postgres, InMemoryProductStore, PostgresProductStore, ProductStore, StoreError,
};

/// Explicitly wired capabilities for the catalog service.
pub struct AppServices {
    product_store: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(product_store: Arc<dyn ProductStore>) -> Self {
        Self { product_store }
    }

    pub fn product_store(&self) -> &dyn ProductStore {
        &*self.product_store
    }
}

/// Select the store from the environment: `DATABASE_URL` set → Postgres,
/// absent → in-memory.
pub async fn build_services() -> Result<AppServices, StoreError> {
    let store: Arc<dyn ProductStore> = match std::env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = postgres::connect(&url).await?;
            tracing::info!("using postgres product store");
            Arc::new(PostgresProductStore::new(pool).await?)
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set; using in-memory product store");
            Arc::new(InMemoryProductStore::new())
        }
    };

    Ok(AppServices::new(store))
}
