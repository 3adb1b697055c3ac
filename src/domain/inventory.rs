// SPDX-License-Identifier: MPL-2.0
//! Inventory line items and their stock summary.

use super::day;
use super::search::{Categorized, Searchable};
use chrono::NaiveDate;

/// Stock level of a line item, used by the status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [
        StockStatus::InStock,
        StockStatus::LowStock,
        StockStatus::OutOfStock,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            StockStatus::InStock => "stock-in-stock",
            StockStatus::LowStock => "stock-low-stock",
            StockStatus::OutOfStock => "stock-out-of-stock",
        }
    }
}

/// Customs clearance of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomsStatus {
    Cleared,
    Pending,
}

impl CustomsStatus {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            CustomsStatus::Cleared => "customs-cleared",
            CustomsStatus::Pending => "customs-pending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub sku: String,
    pub product: String,
    pub category: String,
    pub quantity: u32,
    pub location: String,
    pub status: StockStatus,
    pub customs: CustomsStatus,
    pub barcode: String,
    pub last_updated: NaiveDate,
}

impl Searchable for InventoryItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.product, &self.sku]
    }
}

impl Categorized for InventoryItem {
    type Category = StockStatus;

    fn category(&self) -> StockStatus {
        self.status
    }
}

/// Counts shown in the quick-stats row under the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockSummary {
    pub total_products: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl StockSummary {
    /// Summarizes the full dataset, independent of any active filter.
    #[must_use]
    pub fn of(items: &[InventoryItem]) -> Self {
        Self {
            total_products: items.len(),
            low_stock: count_status(items, StockStatus::LowStock),
            out_of_stock: count_status(items, StockStatus::OutOfStock),
        }
    }
}

fn count_status(items: &[InventoryItem], status: StockStatus) -> usize {
    items.iter().filter(|item| item.status == status).count()
}

#[allow(clippy::too_many_arguments)]
fn item(
    sku: &str,
    product: &str,
    category: &str,
    quantity: u32,
    location: &str,
    status: StockStatus,
    customs: CustomsStatus,
    barcode: &str,
    last_updated: NaiveDate,
) -> InventoryItem {
    InventoryItem {
        sku: sku.to_string(),
        product: product.to_string(),
        category: category.to_string(),
        quantity,
        location: location.to_string(),
        status,
        customs,
        barcode: barcode.to_string(),
        last_updated,
    }
}

/// Sample stock list.
#[must_use]
pub fn sample_items() -> Vec<InventoryItem> {
    vec![
        item(
            "SKU-001",
            "Industrial Bearings Set",
            "Machinery Parts",
            450,
            "Warehouse A - Section 1",
            StockStatus::InStock,
            CustomsStatus::Cleared,
            "123456789012",
            day(2024, 1, 15),
        ),
        item(
            "SKU-002",
            "Steel Pipes 2m",
            "Construction",
            120,
            "Warehouse B - Section 3",
            StockStatus::LowStock,
            CustomsStatus::Pending,
            "123456789013",
            day(2024, 1, 14),
        ),
        item(
            "SKU-003",
            "Electronic Components Kit",
            "Electronics",
            0,
            "Warehouse A - Section 2",
            StockStatus::OutOfStock,
            CustomsStatus::Cleared,
            "123456789014",
            day(2024, 1, 13),
        ),
        item(
            "SKU-004",
            "Safety Equipment Bundle",
            "Safety",
            89,
            "Warehouse C - Section 1",
            StockStatus::InStock,
            CustomsStatus::Cleared,
            "123456789015",
            day(2024, 1, 15),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{RowFilter, Selection};

    fn skus(rows: &[&InventoryItem]) -> Vec<String> {
        rows.iter().map(|row| row.sku.clone()).collect()
    }

    #[test]
    fn summary_counts_statuses() {
        let summary = StockSummary::of(&sample_items());
        assert_eq!(
            summary,
            StockSummary {
                total_products: 4,
                low_stock: 1,
                out_of_stock: 1,
            }
        );
    }

    #[test]
    fn search_matches_product_name() {
        let items = sample_items();
        let filter = RowFilter {
            query: "steel".into(),
            selection: Selection::All,
        };
        assert_eq!(skus(&filter.apply(&items)), vec!["SKU-002"]);
    }

    #[test]
    fn search_matches_sku() {
        let items = sample_items();
        let filter = RowFilter {
            query: "sku-00".into(),
            selection: Selection::All,
        };
        assert_eq!(filter.apply(&items).len(), 4);
    }

    #[test]
    fn search_ignores_location() {
        let items = sample_items();
        let filter = RowFilter {
            query: "Warehouse".into(),
            selection: Selection::All,
        };
        assert!(filter.apply(&items).is_empty());
    }

    #[test]
    fn status_filter_combines_with_search() {
        let items = sample_items();
        let filter = RowFilter {
            query: "e".into(),
            selection: Selection::Only(StockStatus::InStock),
        };
        assert_eq!(skus(&filter.apply(&items)), vec!["SKU-001", "SKU-004"]);
    }
}
