//! In-memory stores for tests/dev.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use storefront_catalog::Product;
use storefront_core::{OrderId, ProductId};
use storefront_inventory::SkuRecord;
use storefront_orders::Order;

use super::{OrderStore, ProductStore, SkuStore};
use crate::error::StoreError;

/// In-memory catalog store.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<HashMap<ProductId, Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        if let Ok(mut map) = self.inner.write() {
            map.insert(product.id(), product.clone());
        }
        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return Ok(vec![]),
        };
        let mut products: Vec<Product> = map.values().cloned().collect();
        products.sort_by_key(|p| p.created_at());
        Ok(products)
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return Ok(None),
        };
        Ok(map.get(&id).cloned())
    }
}

/// In-memory inventory store, keyed by SKU code.
#[derive(Debug, Default)]
pub struct InMemorySkuStore {
    inner: RwLock<HashMap<String, SkuRecord>>,
}

impl InMemorySkuStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SkuStore for InMemorySkuStore {
    async fn save_all(&self, records: Vec<SkuRecord>) -> Result<(), StoreError> {
        if let Ok(mut map) = self.inner.write() {
            for record in records {
                map.insert(record.sku_code().to_string(), record);
            }
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<SkuRecord>, StoreError> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return Ok(vec![]),
        };
        let mut records: Vec<SkuRecord> = map.values().cloned().collect();
        records.sort_by(|a, b| a.sku_code().cmp(b.sku_code()));
        Ok(records)
    }

    async fn find_by_sku_codes(&self, sku_codes: &[String]) -> Result<Vec<SkuRecord>, StoreError> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return Ok(vec![]),
        };
        // Unknown SKUs are omitted from the result, not errors.
        Ok(sku_codes
            .iter()
            .filter_map(|code| map.get(code).cloned())
            .collect())
    }
}

/// In-memory order store.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    inner: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, order: Order) -> Result<Order, StoreError> {
        if let Ok(mut map) = self.inner.write() {
            map.insert(order.id(), order.clone());
        }
        Ok(order)
    }

    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return Ok(vec![]),
        };
        let mut orders: Vec<Order> = map.values().cloned().collect();
        orders.sort_by_key(|o| o.placed_at());
        Ok(orders)
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let map = match self.inner.read() {
            Ok(m) => m,
            Err(_) => return Ok(None),
        };
        Ok(map.get(&id).cloned())
    }
}
