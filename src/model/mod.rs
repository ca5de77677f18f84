//! Input records, stock classification and view model definitions.
//!
//! This module handles:
//! - Defining the flat record types supplied by the data-loading collaborator
//! - Classifying stock quantities into a three-valued status
//! - Defining the chart-ready output shapes consumed by the rendering layer

pub mod records;
pub mod stock;
pub mod view;

// Re-export main types
pub use records::{
    CategorySales, DemographicBucket, ExpenseRecord, InventoryItem, ProductRecord, SalesRecord,
    UserStats,
};
pub use stock::{classify_stock, StockStatus};
pub use view::{
    CategoryCount, CategoryPerformance, CategoryPerformanceRow, ComparisonPoint, ExpenseSummary,
    InventorySummary, PercentShare, RankedPeriod, SalesSummary, SeriesPoint,
};
