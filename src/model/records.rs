//! Input record definitions.
//!
//! Records are immutable facts handed in by an external data-loading
//! collaborator (an API or database in a real deployment). Nothing in
//! this crate mutates a record after load; aggregators take slices by
//! shared reference and build fresh view models on every call.
//!
//! Monetary values use `Decimal` rather than floats so that revenue
//! sums and averages stay exact. Quantities that cross the stock
//! classification boundary are signed: negative input must be
//! representable so it can be rejected rather than silently wrap.

use crate::model::stock::{classify_stock, StockStatus};
use crate::utils::error::ClassifyError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One reporting period of sales activity
///
/// Records arrive in chronological order; aggregators rely on that for
/// trailing-window comparisons and tie-breaking in rankings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Period label (e.g., "Jan")
    pub period: String,

    /// Units sold in the period
    pub units: u64,

    /// Revenue for the period
    pub revenue: Decimal,
}

/// A catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: u64,

    pub name: String,

    /// Category label; grouping is by exact match
    pub category: String,

    /// Unit price
    pub price: Decimal,

    /// Units on hand
    pub stock: i64,
}

impl ProductRecord {
    /// Stock status derived from the stock count
    ///
    /// Status is never stored on the record; it is recomputed from the
    /// quantity so the two cannot drift apart.
    pub fn status(&self) -> Result<StockStatus, ClassifyError> {
        classify_stock(self.stock)
    }
}

/// Sales rollup for one product category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySales {
    pub category: String,

    /// Units sold across the category
    pub units: u64,

    /// Revenue across the category
    pub revenue: Decimal,
}

/// One expense category for the current period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub category: String,

    /// Amount spent
    pub amount: Decimal,

    /// Stored share of total expenses, 0-100. Shares across all records
    /// should sum to roughly 100; this is not enforced. Callers that
    /// distrust the stored value can re-derive it from the amounts with
    /// [`crate::aggregator::expense_shares`].
    pub share_pct: Decimal,
}

/// One demographic bucket, used for both age-range and location breakdowns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicBucket {
    /// Bucket label (e.g., "25-34" or "Europe")
    pub label: String,

    /// Users in the bucket
    pub count: u64,
}

/// One warehouse inventory line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub product_name: String,

    pub sku: String,

    /// Units on hand
    pub quantity: i64,

    /// Storage location (e.g., "Warehouse A - Aisle 3")
    pub location: String,

    pub last_restocked: NaiveDate,
}

impl InventoryItem {
    /// Stock status derived from the quantity on hand
    pub fn status(&self) -> Result<StockStatus, ClassifyError> {
        classify_stock(self.quantity)
    }
}

/// User engagement counts for the current period
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserStats {
    /// Users active in the last 30 days
    pub active: u64,

    /// Users with multiple purchases
    pub repeat_buyers: u64,

    /// Users joined in the last 30 days
    pub new_users: u64,
}

impl UserStats {
    /// Total users across all engagement segments
    pub fn total(&self) -> u64 {
        self.active + self.repeat_buyers + self.new_users
    }
}
