//! Infrastructure error types.
//!
//! Deterministic domain failures live in `storefront_core::DomainError`;
//! these cover storage and cross-service transport.

use thiserror::Error;

/// Persistence failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored record could not be mapped back into its domain type.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Failure of the batched stock lookup against the inventory service.
///
/// The order validator folds every variant into a rejection; unavailable
/// stock data never counts as "in stock".
#[derive(Debug, Error)]
pub enum InventoryLookupError {
    /// Connection failure, timeout, or undecodable body.
    #[error("inventory service request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The inventory service answered with a non-success status.
    #[error("inventory service returned {0}")]
    Status(reqwest::StatusCode),
}
