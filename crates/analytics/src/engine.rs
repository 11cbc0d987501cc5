//! Low-stock detection, reorder recommendations and vendor ranking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_core::{Record, RecordId};
use stockdesk_inventory::{InventoryItem, Unit};
use stockdesk_vendors::{Vendor, VendorCategory};

/// How many vendors the "top performing" view shows.
pub const TOP_VENDOR_COUNT: usize = 5;

/// Floor for any recommended reorder quantity.
pub const MIN_REORDER_QUANTITY: u64 = 50;

/// Recommended order is this multiple of the reorder level (before the floor).
pub const REORDER_MULTIPLIER: u64 = 3;

/// How many items the stock chart plots.
pub const STOCK_CHART_LIMIT: usize = 10;

/// Chart labels longer than this many characters are cut and suffixed with `...`.
pub const CHART_LABEL_MAX_CHARS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Out of stock.
    Critical,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRecommendation {
    pub quantity: u64,
    pub priority: Priority,
}

/// A reorder recommendation together with the item fields a report row shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderLine {
    pub item_id: RecordId,
    pub item_name: String,
    pub current_stock: u32,
    pub recommended_order: u64,
    pub unit: Unit,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Low,
    InStock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: VendorCategory,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChartPoint {
    pub name: String,
    pub stock: u32,
    pub reorder_level: u32,
}

/// Inclusive threshold: an item sitting exactly at its reorder level is low.
pub fn is_low_stock(item: &InventoryItem) -> bool {
    item.stock_count() <= item.reorder_level()
}

pub fn stock_status(item: &InventoryItem) -> StockStatus {
    if is_low_stock(item) {
        StockStatus::Low
    } else {
        StockStatus::InStock
    }
}

/// Every low-stock item, in input order.
pub fn low_stock(items: &[InventoryItem]) -> Vec<&InventoryItem> {
    items.iter().filter(|item| is_low_stock(item)).collect()
}

/// Fixed rule: order `max(reorder_level * 3, 50)`; critical when nothing is left.
///
/// Only meaningful for items that are already low on stock.
pub fn reorder_recommendation(item: &InventoryItem) -> ReorderRecommendation {
    let quantity = (u64::from(item.reorder_level()) * REORDER_MULTIPLIER).max(MIN_REORDER_QUANTITY);
    let priority = if item.stock_count() == 0 {
        Priority::Critical
    } else {
        Priority::High
    };
    ReorderRecommendation { quantity, priority }
}

/// Recommendation rows for the low-stock subsequence of `items`.
pub fn reorder_recommendations(items: &[InventoryItem]) -> Vec<ReorderLine> {
    low_stock(items)
        .into_iter()
        .map(|item| {
            let rec = reorder_recommendation(item);
            ReorderLine {
                item_id: item.id(),
                item_name: item.name().to_string(),
                current_stock: item.stock_count(),
                recommended_order: rec.quantity,
                unit: item.unit(),
                priority: rec.priority,
            }
        })
        .collect()
}

/// Vendor count per category, ordered by first occurrence in `vendors`.
pub fn vendor_category_breakdown(vendors: &[Vendor]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();
    for vendor in vendors {
        match counts.iter_mut().find(|c| c.category == vendor.category()) {
            Some(existing) => existing.count += 1,
            None => counts.push(CategoryCount {
                category: vendor.category(),
                count: 1,
            }),
        }
    }
    counts
}

/// The `k` best-rated vendors. Equal ratings keep their input order.
pub fn top_rated_vendors(vendors: &[Vendor], k: usize) -> Vec<&Vendor> {
    let mut ranked: Vec<&Vendor> = vendors.iter().collect();
    // `sort_by` is stable.
    ranked.sort_by(|a, b| b.rating().cmp(&a.rating()));
    ranked.truncate(k);
    ranked
}

/// Highest-rated vendor; on a tie the first one encountered wins.
pub fn best_vendor(vendors: &[Vendor]) -> Option<&Vendor> {
    vendors.iter().fold(None, |best: Option<&Vendor>, current| match best {
        Some(b) if current.rating() > b.rating() => Some(current),
        Some(b) => Some(b),
        None => Some(current),
    })
}

/// Mean rating rounded to one decimal place, `0.0` for no vendors.
pub fn average_rating(vendors: &[Vendor]) -> f64 {
    if vendors.is_empty() {
        return 0.0;
    }
    let sum: u64 = vendors.iter().map(|v| u64::from(v.rating().get())).sum();
    let mean = sum as f64 / vendors.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Total stock value, `Σ stock_count * price_per_unit`. Saturates instead of
/// overflowing.
pub fn inventory_value(items: &[InventoryItem]) -> Decimal {
    items.iter().fold(Decimal::ZERO, |acc, item| {
        acc.saturating_add(Decimal::from(item.stock_count()).saturating_mul(item.price_per_unit()))
    })
}

/// Chart points for the first [`STOCK_CHART_LIMIT`] items.
pub fn stock_chart(items: &[InventoryItem]) -> Vec<StockChartPoint> {
    items
        .iter()
        .take(STOCK_CHART_LIMIT)
        .map(|item| StockChartPoint {
            name: chart_label(item.name()),
            stock: item.stock_count(),
            reorder_level: item.reorder_level(),
        })
        .collect()
}

fn chart_label(name: &str) -> String {
    if name.chars().count() > CHART_LABEL_MAX_CHARS {
        let cut: String = name.chars().take(CHART_LABEL_MAX_CHARS).collect();
        format!("{cut}...")
    } else {
        name.to_string()
    }
}
