use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockdesk_inventory::InventoryItem;
use stockdesk_vendors::Vendor;

use crate::engine::{
    self, CategoryCount, ReorderLine, StockChartPoint, TOP_VENDOR_COUNT,
};

/// Headline numbers for the reports view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_items: usize,
    pub total_vendors: usize,
    pub low_stock_count: usize,
    pub average_rating: f64,
    pub inventory_value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorScore {
    pub name: String,
    pub rating: u8,
}

/// Everything the reports view renders, derived from one snapshot.
///
/// This is a derived view, not a stored record: build it per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryReport {
    pub summary: ReportSummary,
    pub reorder_recommendations: Vec<ReorderLine>,
    pub stock_chart: Vec<StockChartPoint>,
    pub vendor_categories: Vec<CategoryCount>,
    pub top_vendors: Vec<VendorScore>,
}

impl InventoryReport {
    pub fn build(items: &[InventoryItem], vendors: &[Vendor]) -> Self {
        let reorder_recommendations = engine::reorder_recommendations(items);

        let summary = ReportSummary {
            total_items: items.len(),
            total_vendors: vendors.len(),
            low_stock_count: reorder_recommendations.len(),
            average_rating: engine::average_rating(vendors),
            inventory_value: engine::inventory_value(items),
        };

        let top_vendors = engine::top_rated_vendors(vendors, TOP_VENDOR_COUNT)
            .into_iter()
            .map(|v| VendorScore {
                name: v.name().to_string(),
                rating: v.rating().get(),
            })
            .collect();

        Self {
            summary,
            reorder_recommendations,
            stock_chart: engine::stock_chart(items),
            vendor_categories: engine::vendor_category_breakdown(vendors),
            top_vendors,
        }
    }
}
