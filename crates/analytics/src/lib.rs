//! `stockdesk-analytics`
//!
//! **Responsibility:** derived views over an owner's record snapshot.
//!
//! Everything here is a pure function of its inputs:
//! - It never talks to a store; callers pass the snapshot in.
//! - It never mutates records.
//! - Input order is meaningful and preserved wherever a subsequence is returned.

pub mod engine;
pub mod item_code;
pub mod report;
pub mod search;

#[cfg(test)]
pub(crate) mod fixtures;

pub use engine::{
    CategoryCount, Priority, ReorderLine, ReorderRecommendation, StockChartPoint, StockStatus,
    TOP_VENDOR_COUNT, average_rating, best_vendor, inventory_value, is_low_stock, low_stock,
    reorder_recommendation, reorder_recommendations, stock_chart, stock_status,
    top_rated_vendors, vendor_category_breakdown,
};
pub use item_code::{item_identifier, unique_item_identifier};
pub use report::{InventoryReport, ReportSummary, VendorScore};
pub use search::{search_items, search_vendors};
