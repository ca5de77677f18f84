//! Constants shared across the aggregation layer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Quantities strictly below this are low stock; zero is out of stock.
/// Fixed threshold, not configurable.
pub const LOW_STOCK_THRESHOLD: i64 = 50;

/// Decimal places for percentage shares
pub const SHARE_DP: u32 = 1;

/// Decimal places for monetary averages and derived targets
pub const MONEY_DP: u32 = 2;

/// Default revenue target ratio: target = 90% of actual
pub const DEFAULT_TARGET_RATIO: Decimal = dec!(0.90);

/// Trailing window for revenue-vs-target comparisons
pub const DEFAULT_COMPARISON_WINDOW: usize = 6;

/// Default number of periods in top-revenue rankings
pub const DEFAULT_TOP_PERIODS: usize = 5;
