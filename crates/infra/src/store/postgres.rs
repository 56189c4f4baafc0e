//! Postgres-backed stores.
//!
//! Each store owns a connection pool handle and bootstraps its own table on
//! construction, so a service binary can point `DATABASE_URL` at an empty
//! database and start serving.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use async_trait::async_trait;

use storefront_catalog::Product;
use storefront_core::{OrderId, ProductId};
use storefront_inventory::SkuRecord;
use storefront_orders::{Order, OrderLineItem};

use super::{OrderStore, ProductStore, SkuStore};
use crate::error::StoreError;

/// Open a connection pool against `database_url`.
pub async fn connect(database_url: &str) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Postgres catalog store.
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub async fn new(pool: PgPool) -> Result<Self, StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price BIGINT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }
}

fn product_from_row(row: &sqlx::postgres::PgRow) -> Result<Product, StoreError> {
    let id: Uuid = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let description: String = row.try_get("description")?;
    let price: i64 = row.try_get("price")?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    let price = u64::try_from(price)
        .map_err(|_| StoreError::Corrupt(format!("negative price for product {id}")))?;

    Product::with_id(ProductId::from_uuid(id), name, description, price, created_at)
        .map_err(|e| StoreError::Corrupt(format!("product {id}: {e}")))
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id)
            DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price
            "#,
        )
        .bind(*product.id().as_uuid())
        .bind(product.name())
        .bind(product.description())
        .bind(product.price() as i64)
        .bind(product.created_at())
        .execute(&self.pool)
        .await?;
        Ok(product)
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, description, price, created_at
            FROM products
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(product_from_row).collect()
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, description, price, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(product_from_row).transpose()
    }
}

/// Postgres inventory store.
pub struct PostgresSkuStore {
    pool: PgPool,
}

impl PostgresSkuStore {
    pub async fn new(pool: PgPool) -> Result<Self, StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS sku_records (
                sku_code TEXT PRIMARY KEY,
                quantity BIGINT NOT NULL,
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }
}

fn sku_from_row(row: &sqlx::postgres::PgRow) -> Result<SkuRecord, StoreError> {
    let sku_code: String = row.try_get("sku_code")?;
    let quantity: i64 = row.try_get("quantity")?;
    SkuRecord::new(sku_code.clone(), quantity)
        .map_err(|e| StoreError::Corrupt(format!("sku {sku_code}: {e}")))
}

#[async_trait]
impl SkuStore for PostgresSkuStore {
    async fn save_all(&self, records: Vec<SkuRecord>) -> Result<(), StoreError> {
        for record in records {
            sqlx::query(
                r#"
                INSERT INTO sku_records (sku_code, quantity)
                VALUES ($1, $2)
                ON CONFLICT (sku_code)
                DO UPDATE SET
                    quantity = EXCLUDED.quantity,
                    updated_at = NOW()
                "#,
            )
            .bind(record.sku_code())
            .bind(record.quantity())
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<SkuRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT sku_code, quantity
            FROM sku_records
            ORDER BY sku_code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(sku_from_row).collect()
    }

    async fn find_by_sku_codes(&self, sku_codes: &[String]) -> Result<Vec<SkuRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT sku_code, quantity
            FROM sku_records
            WHERE sku_code = ANY($1)
            "#,
        )
        .bind(sku_codes.to_vec())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(sku_from_row).collect()
    }
}

/// Postgres order store. Line items are stored as a JSONB document; the
/// order is written and read whole, never joined.
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    pub async fn new(pool: PgPool) -> Result<Self, StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                id UUID PRIMARY KEY,
                order_number TEXT NOT NULL UNIQUE,
                line_items JSONB NOT NULL,
                placed_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }
}

fn order_from_row(row: &sqlx::postgres::PgRow) -> Result<Order, StoreError> {
    let id: Uuid = row.try_get("id")?;
    let order_number: String = row.try_get("order_number")?;
    let line_items: serde_json::Value = row.try_get("line_items")?;
    let placed_at: DateTime<Utc> = row.try_get("placed_at")?;

    let line_items: Vec<OrderLineItem> = serde_json::from_value(line_items)
        .map_err(|e| StoreError::Corrupt(format!("order {id} line items: {e}")))?;

    Ok(Order::from_parts(
        OrderId::from_uuid(id),
        order_number,
        line_items,
        placed_at,
    ))
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn save(&self, order: Order) -> Result<Order, StoreError> {
        let line_items = serde_json::to_value(order.line_items())
            .map_err(|e| StoreError::Corrupt(format!("order {}: {e}", order.id())))?;

        sqlx::query(
            r#"
            INSERT INTO orders (id, order_number, line_items, placed_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(*order.id().as_uuid())
        .bind(order.order_number())
        .bind(line_items)
        .bind(order.placed_at())
        .execute(&self.pool)
        .await?;
        Ok(order)
    }

    async fn find_all(&self) -> Result<Vec<Order>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, order_number, line_items, placed_at
            FROM orders
            ORDER BY placed_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(order_from_row).collect()
    }

    async fn find_by_id(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, order_number, line_items, placed_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(order_from_row).transpose()
    }
}
