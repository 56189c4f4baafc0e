use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult};

/// Inventory record for a single stock-keeping unit.
///
/// Records are created by the seeding step and mutated externally; the
/// order validator only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuRecord {
    sku_code: String,
    quantity: i64,
}

impl SkuRecord {
    /// Build a record, enforcing a non-empty SKU code and a non-negative
    /// quantity.
    pub fn new(sku_code: impl Into<String>, quantity: i64) -> DomainResult<Self> {
        let sku_code = sku_code.into();
        if sku_code.trim().is_empty() {
            return Err(DomainError::validation("sku code cannot be empty"));
        }
        if quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        Ok(Self { sku_code, quantity })
    }

    pub fn sku_code(&self) -> &str {
        &self.sku_code
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Derived property: a SKU is in stock iff its quantity is greater than zero.
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }
}

/// Per-SKU stock status as reported by the inventory lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockStatus {
    pub sku_code: String,
    pub is_in_stock: bool,
}

impl From<&SkuRecord> for StockStatus {
    fn from(record: &SkuRecord) -> Self {
        Self {
            sku_code: record.sku_code.clone(),
            is_in_stock: record.is_in_stock(),
        }
    }
}

/// Derive stock statuses for a batch of records.
///
/// SKUs the store did not resolve are simply absent from the input, so they
/// are absent from the output as well; callers must not treat absence as
/// in-stock.
pub fn stock_statuses(records: &[SkuRecord]) -> Vec<StockStatus> {
    records.iter().map(StockStatus::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn record_rejects_empty_sku_code() {
        let err = SkuRecord::new("   ", 3).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty sku code"),
        }
    }

    #[test]
    fn record_rejects_negative_quantity() {
        let err = SkuRecord::new("AAA111", -1).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for negative quantity"),
        }
    }

    #[test]
    fn zero_quantity_is_out_of_stock() {
        let record = SkuRecord::new("BBB222", 0).unwrap();
        assert!(!record.is_in_stock());
        let status = StockStatus::from(&record);
        assert_eq!(status.sku_code, "BBB222");
        assert!(!status.is_in_stock);
    }

    #[test]
    fn positive_quantity_is_in_stock() {
        let record = SkuRecord::new("CCC333", 6).unwrap();
        assert!(record.is_in_stock());
        assert!(StockStatus::from(&record).is_in_stock);
    }

    proptest! {
        // For every record set, derived statuses cover exactly the input SKUs
        // and flag each in-stock iff quantity > 0.
        #[test]
        fn statuses_mirror_records(quantities in proptest::collection::vec(0i64..10_000, 0..20)) {
            let records: Vec<SkuRecord> = quantities
                .iter()
                .enumerate()
                .map(|(i, q)| SkuRecord::new(format!("SKU-{i}"), *q).unwrap())
                .collect();

            let statuses = stock_statuses(&records);
            prop_assert_eq!(statuses.len(), records.len());
            for (record, status) in records.iter().zip(&statuses) {
                prop_assert_eq!(record.sku_code(), status.sku_code.as_str());
                prop_assert_eq!(record.quantity() > 0, status.is_in_stock);
            }
        }
    }
}
