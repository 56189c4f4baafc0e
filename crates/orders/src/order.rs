use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_core::{DomainError, DomainResult, OrderId};
use storefront_inventory::StockStatus;

/// One entry in an order: SKU, price, requested quantity.
///
/// Immutable once submitted; duplicates of the same SKU are allowed and all
/// of them persist when the order is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub sku_code: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub quantity: i64,
}

impl OrderLineItem {
    pub fn new(sku_code: impl Into<String>, price: u64, quantity: i64) -> DomainResult<Self> {
        let sku_code = sku_code.into();
        if sku_code.trim().is_empty() {
            return Err(DomainError::validation("sku code cannot be empty"));
        }
        Ok(Self {
            sku_code,
            price,
            quantity,
        })
    }
}

/// A proposed order: a non-empty ordered sequence of line items.
///
/// Input to validation; never persisted directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    line_items: Vec<OrderLineItem>,
}

impl OrderRequest {
    pub fn new(line_items: Vec<OrderLineItem>) -> DomainResult<Self> {
        if line_items.is_empty() {
            return Err(DomainError::validation("order must have at least one line item"));
        }
        Ok(Self { line_items })
    }

    pub fn line_items(&self) -> &[OrderLineItem] {
        &self.line_items
    }

    /// Distinct SKU codes referenced by the line items, first-seen order.
    ///
    /// The inventory lookup is batched over this set; querying per line item
    /// would both waste round-trips and double-count duplicated SKUs.
    pub fn distinct_sku_codes(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for item in &self.line_items {
            if !seen.iter().any(|s| s == &item.sku_code) {
                seen.push(item.sku_code.clone());
            }
        }
        seen
    }
}

/// Accept the order only if the lookup resolved every requested SKU and all
/// of them are in stock. A missing SKU or a single out-of-stock SKU rejects
/// the whole order; partial fulfillment is not supported.
pub fn evaluate_availability(
    requested_skus: &[String],
    statuses: &[StockStatus],
) -> DomainResult<()> {
    let mut failing: Vec<&str> = requested_skus
        .iter()
        .filter(|sku| !statuses.iter().any(|s| &s.sku_code == *sku))
        .map(String::as_str)
        .collect();

    for status in statuses {
        if !status.is_in_stock {
            failing.push(status.sku_code.as_str());
        }
    }

    if statuses.len() != requested_skus.len() || !failing.is_empty() {
        return Err(DomainError::stock_unavailable(failing.join(", ")));
    }

    Ok(())
}

/// An accepted order. Created exactly once per successful validation; never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    /// Business-facing token handed to the caller; random, not time-ordered.
    order_number: String,
    line_items: Vec<OrderLineItem>,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Synthesize a new order from an accepted request.
    ///
    /// All original line items carry over, duplicate SKUs included.
    pub fn place(request: OrderRequest, placed_at: DateTime<Utc>) -> Self {
        Self {
            id: OrderId::new(),
            order_number: Uuid::new_v4().to_string(),
            line_items: request.line_items,
            placed_at,
        }
    }

    /// Rehydrate a stored order.
    pub fn from_parts(
        id: OrderId,
        order_number: String,
        line_items: Vec<OrderLineItem>,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            order_number,
            line_items,
            placed_at,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn line_items(&self) -> &[OrderLineItem] {
        &self.line_items
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn line(sku: &str) -> OrderLineItem {
        OrderLineItem::new(sku, 100, 1).unwrap()
    }

    fn status(sku: &str, in_stock: bool) -> StockStatus {
        StockStatus {
            sku_code: sku.to_string(),
            is_in_stock: in_stock,
        }
    }

    #[test]
    fn request_rejects_empty_line_items() {
        let err = OrderRequest::new(vec![]).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty line items"),
        }
    }

    #[test]
    fn line_item_rejects_blank_sku() {
        let err = OrderLineItem::new("  ", 100, 1).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank sku"),
        }
    }

    #[test]
    fn duplicate_skus_are_deduplicated_for_lookup() {
        let request =
            OrderRequest::new(vec![line("AAA111"), line("AAA111"), line("CCC333")]).unwrap();
        assert_eq!(request.distinct_sku_codes(), vec!["AAA111", "CCC333"]);
    }

    #[test]
    fn all_in_stock_is_accepted() {
        let skus = vec!["AAA111".to_string(), "CCC333".to_string()];
        let statuses = vec![status("AAA111", true), status("CCC333", true)];
        assert!(evaluate_availability(&skus, &statuses).is_ok());
    }

    #[test]
    fn one_out_of_stock_sku_rejects_the_whole_order() {
        let skus = vec!["AAA111".to_string(), "BBB222".to_string()];
        let statuses = vec![status("AAA111", true), status("BBB222", false)];
        let err = evaluate_availability(&skus, &statuses).unwrap_err();
        match err {
            DomainError::StockUnavailable(msg) => assert!(msg.contains("BBB222")),
            _ => panic!("Expected StockUnavailable error"),
        }
    }

    #[test]
    fn unknown_sku_rejects_the_whole_order() {
        let skus = vec!["AAA111".to_string(), "ZZZ999".to_string()];
        let statuses = vec![status("AAA111", true)];
        let err = evaluate_availability(&skus, &statuses).unwrap_err();
        match err {
            DomainError::StockUnavailable(msg) => assert!(msg.contains("ZZZ999")),
            _ => panic!("Expected StockUnavailable error"),
        }
    }

    #[test]
    fn placed_order_keeps_all_line_items_including_duplicates() {
        let request =
            OrderRequest::new(vec![line("AAA111"), line("AAA111"), line("CCC333")]).unwrap();
        let order = Order::place(request, Utc::now());
        assert_eq!(order.line_items().len(), 3);
        assert!(!order.order_number().is_empty());
    }

    #[test]
    fn each_placed_order_gets_a_fresh_identifier() {
        let a = Order::place(OrderRequest::new(vec![line("AAA111")]).unwrap(), Utc::now());
        let b = Order::place(OrderRequest::new(vec![line("AAA111")]).unwrap(), Utc::now());
        assert_ne!(a.id(), b.id());
        assert_ne!(a.order_number(), b.order_number());
    }

    proptest! {
        // Availability is accepted iff every distinct SKU resolved and every
        // resolved SKU is in stock.
        #[test]
        fn availability_accepts_iff_all_resolved_and_in_stock(
            flags in proptest::collection::vec(any::<bool>(), 1..12),
            drop_last in any::<bool>(),
        ) {
            let skus: Vec<String> = (0..flags.len()).map(|i| format!("SKU-{i}")).collect();
            let mut statuses: Vec<StockStatus> = skus
                .iter()
                .zip(&flags)
                .map(|(sku, in_stock)| status(sku, *in_stock))
                .collect();

            if drop_last {
                statuses.pop();
            }

            let accepted = evaluate_availability(&skus, &statuses).is_ok();
            let expected = !drop_last && flags.iter().all(|f| *f);
            prop_assert_eq!(accepted, expected);
        }

        // Dedup keeps the distinct set a subset of the original, order-preserving.
        #[test]
        fn distinct_skus_are_a_subset_of_line_item_skus(
            picks in proptest::collection::vec(0usize..5, 1..20),
        ) {
            let items: Vec<OrderLineItem> =
                picks.iter().map(|i| line(&format!("SKU-{i}"))).collect();
            let request = OrderRequest::new(items.clone()).unwrap();
            let distinct = request.distinct_sku_codes();

            let mut unique: Vec<String> = Vec::new();
            for item in &items {
                if !unique.contains(&item.sku_code) {
                    unique.push(item.sku_code.clone());
                }
            }
            prop_assert_eq!(distinct, unique);
        }
    }
}
