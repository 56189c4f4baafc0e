//! Store capabilities for the three services.
//!
//! Each service injects exactly the store trait it needs via an explicit
//! constructor parameter; there is no container. Every trait has an
//! in-memory implementation (dev/tests) and a Postgres one (`DATABASE_URL`).

use async_trait::async_trait;

use storefront_catalog::Product;
use storefront_core::{OrderId, ProductId};
use storefront_inventory::SkuRecord;
use storefront_orders::Order;

use crate::error::StoreError;

pub mod in_memory;
pub mod postgres;

pub use in_memory::{InMemoryOrderStore, InMemoryProductStore, InMemorySkuStore};
pub use postgres::{PostgresOrderStore, PostgresProductStore, PostgresSkuStore};

/// Catalog persistence.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn save(&self, product: Product) -> Result<Product, StoreError>;
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;
}

/// Inventory persistence. Read-mostly; `save_all` exists for the seeding step.
#[async_trait]
pub trait SkuStore: Send + Sync {
    async fn save_all(&self, records: Vec<SkuRecord>) -> Result<(), StoreError>;
    async fn find_all(&self) -> Result<Vec<SkuRecord>, StoreError>;
    async fn find_by_sku_codes(&self, sku_codes: &[String]) -> Result<Vec<SkuRecord>, StoreError>;
}

/// Order persistence.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Durably store an accepted order, returning the stored record.
    async fn save(&self, order: Order) -> Result<Order, StoreError>;
    async fn find_all(&self) -> Result<Vec<Order>, StoreError>;
    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError>;
}
