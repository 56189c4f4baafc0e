//! Order domain module.
//!
//! The order-placement validation workflow lives here as deterministic domain
//! logic: distinct-SKU extraction, the aggregate availability check, and
//! order synthesis. The HTTP call to the inventory service and persistence
//! are capabilities injected by the service layer.

pub mod order;

pub use order::{evaluate_availability, Order, OrderLineItem, OrderRequest};
