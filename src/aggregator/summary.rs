//! Summary statistics for dashboard cards.

use crate::model::records::{ExpenseRecord, InventoryItem, SalesRecord};
use crate::model::stock::StockStatus;
use crate::model::view::{ExpenseSummary, InventorySummary, SalesSummary};
use crate::utils::config::MONEY_DP;
use crate::utils::error::{AggregateError, ClassifyError};
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

/// Summarize sales periods into headline figures
///
/// **Public** - feeds the analytics summary cards
///
/// # Returns
/// Total units, total revenue, average order value (revenue over units,
/// two decimal places) and the best period (highest revenue, first on
/// ties).
///
/// # Errors
/// `AggregateError::ZeroTotal` when no units were sold, including the
/// empty input. The average order value is undefined there; the caller
/// shows an empty state instead.
pub fn sales_summary(records: &[SalesRecord]) -> Result<SalesSummary, AggregateError> {
    debug!("Summarizing {} sales periods", records.len());

    let total_units: u64 = records.iter().map(|r| r.units).sum();
    let total_revenue: Decimal = records.iter().map(|r| r.revenue).sum();

    if total_units == 0 {
        return Err(AggregateError::ZeroTotal("unit sales"));
    }

    let avg_order_value = (total_revenue / Decimal::from(total_units))
        .round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);

    // Strictly-greater keeps the first period on revenue ties
    let best = records.iter().fold(None::<&SalesRecord>, |best, record| {
        match best {
            Some(current) if current.revenue >= record.revenue => Some(current),
            _ => Some(record),
        }
    });
    let best_period = best.map(|r| r.period.clone()).unwrap_or_default();

    Ok(SalesSummary {
        total_units,
        total_revenue,
        avg_order_value,
        best_period,
    })
}

/// Summarize warehouse inventory into stock-level counts
///
/// **Public** - feeds the warehouse summary cards
///
/// # Errors
/// `ClassifyError::NegativeQuantity` if any line carries a negative
/// quantity; the summary is rejected rather than built from bad data.
pub fn inventory_summary(items: &[InventoryItem]) -> Result<InventorySummary, ClassifyError> {
    debug!("Summarizing {} inventory lines", items.len());

    let mut total_quantity: u64 = 0;
    let mut low_stock = 0usize;
    let mut out_of_stock = 0usize;

    for item in items {
        match item.status()? {
            StockStatus::LowStock => low_stock += 1,
            StockStatus::OutOfStock => out_of_stock += 1,
            StockStatus::InStock => {}
        }
        // status() already rejected negatives
        total_quantity += item.quantity as u64;
    }

    Ok(InventorySummary {
        total_quantity,
        item_count: items.len(),
        low_stock,
        out_of_stock,
    })
}

/// Summarize expenses into totals and a per-category average
///
/// **Public** - feeds the expenses summary cards
///
/// # Errors
/// `AggregateError::ZeroTotal` for empty input; the per-category
/// average is undefined over zero categories.
pub fn expense_summary(expenses: &[ExpenseRecord]) -> Result<ExpenseSummary, AggregateError> {
    debug!("Summarizing {} expense categories", expenses.len());

    if expenses.is_empty() {
        return Err(AggregateError::ZeroTotal("expense categories"));
    }

    let total: Decimal = expenses.iter().map(|e| e.amount).sum();
    let average_per_category = (total / Decimal::from(expenses.len() as u64))
        .round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);

    Ok(ExpenseSummary {
        total,
        categories: expenses.len(),
        average_per_category,
    })
}
