//! Inventory domain module.
//!
//! This crate contains business rules for stock lookup, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod sku;

pub use sku::{stock_statuses, SkuRecord, StockStatus};
