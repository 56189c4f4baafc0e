//! `storefront-infra` — capability implementations shared by the service
//! binaries: persistence stores and the cross-service inventory client.

pub mod error;
pub mod inventory_client;
pub mod store;

pub use error::{InventoryLookupError, StoreError};
pub use inventory_client::{HttpInventoryClient, InventoryClient};
pub use store::{
    InMemoryOrderStore, InMemoryProductStore, InMemorySkuStore, OrderStore, PostgresOrderStore,
    PostgresProductStore, PostgresSkuStore, ProductStore, SkuStore,
};
