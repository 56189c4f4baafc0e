use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ProductId};

/// Catalog entry: a product offered for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    /// Price in smallest currency unit (e.g., cents).
    price: u64,
    created_at: DateTime<Utc>,
}

impl Product {
    /// Build a product with a freshly generated identifier.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Self::with_id(ProductId::new(), name, description, price, created_at)
    }

    /// Build a product with an explicit identifier (rehydration from storage,
    /// deterministic tests).
    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            price,
            created_at,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
