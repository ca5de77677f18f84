//! Chart-ready view model definitions.
//!
//! These are the output shapes handed to the rendering layer. Field
//! names are part of the contract: they serialize to snake_case JSON
//! keys that chart and table components bind to directly, so changing
//! one is a breaking change for every consumer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of a category distribution pie chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category label
    pub category: String,

    /// Number of products in the category
    pub products: u64,
}

/// One bar of a top-revenue ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPeriod {
    /// Period label
    pub period: String,

    /// Revenue for the period
    pub revenue: Decimal,
}

/// A labeled magnitude with its share of the total
///
/// Used for demographic pies and re-derived expense breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentShare {
    pub label: String,

    /// The underlying magnitude (a user count or an expense amount)
    pub value: Decimal,

    /// Share of the total, 0-100, one decimal place
    pub share_pct: Decimal,
}

/// One point of a single-metric series, keyed by period label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub period: String,
    pub value: Decimal,
}

/// One point of a merged dual-metric comparison series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    /// Period label shared by both metrics
    pub period: String,

    /// Actual value for the period
    pub actual: Decimal,

    /// Target value for the period
    pub target: Decimal,
}

/// One row of the category performance table, ranked by revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPerformanceRow {
    pub category: String,

    /// Units sold in the category
    pub units: u64,

    /// Revenue in the category
    pub revenue: Decimal,

    /// Average unit price (revenue over units); absent when the
    /// category sold zero units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_price: Option<Decimal>,

    /// Share of total units, 0-100, one decimal place
    pub share_pct: Decimal,
}

/// Category performance table with its totals row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPerformance {
    /// Rows sorted by revenue, descending
    pub rows: Vec<CategoryPerformanceRow>,

    /// Units across all categories
    pub total_units: u64,

    /// Revenue across all categories
    pub total_revenue: Decimal,

    /// Overall average order value
    pub avg_order_value: Decimal,
}

/// Summary statistics for the sales dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Units across all periods
    pub total_units: u64,

    /// Revenue across all periods
    pub total_revenue: Decimal,

    /// Revenue per unit sold, two decimal places
    pub avg_order_value: Decimal,

    /// Period with the highest revenue (first on ties)
    pub best_period: String,
}

/// Summary statistics for the warehouse dashboard cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    /// Units on hand across all items
    pub total_quantity: u64,

    /// Number of inventory lines
    pub item_count: usize,

    /// Lines classified low-stock
    pub low_stock: usize,

    /// Lines classified out-of-stock
    pub out_of_stock: usize,
}

/// Summary statistics for the expenses dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    /// Amount across all categories
    pub total: Decimal,

    /// Number of expense categories
    pub categories: usize,

    /// Average amount per category, two decimal places
    pub average_per_category: Decimal,
}
