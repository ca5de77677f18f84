//! Percentage-of-total calculations.
//!
//! Shares are rounded to one decimal place, round-half-up. A zero total
//! is rejected with `ZeroTotal` so callers render an explicit empty
//! state; a not-a-number share must never reach a chart.

use crate::model::records::{DemographicBucket, ExpenseRecord};
use crate::model::view::PercentShare;
use crate::utils::config::SHARE_DP;
use crate::utils::error::AggregateError;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

/// One magnitude's share of a total, as a percentage
///
/// **Public** - building block for every share calculation
///
/// # Arguments
/// * `value` - The magnitude
/// * `total` - The denominator; zero is rejected
///
/// # Returns
/// Share of total, 0-100, one decimal place, round-half-up
pub fn percent_of_total(value: Decimal, total: Decimal) -> Result<Decimal, AggregateError> {
    if total.is_zero() {
        return Err(AggregateError::ZeroTotal("share denominator"));
    }

    Ok((value / total * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(SHARE_DP, RoundingStrategy::MidpointAwayFromZero))
}

/// Shares of total for a sequence of magnitudes
///
/// The total is the sum of the inputs. For any positive total the
/// outputs sum to 100 within rounding tolerance.
pub fn percent_shares(values: &[Decimal]) -> Result<Vec<Decimal>, AggregateError> {
    let total: Decimal = values.iter().copied().sum();
    if total.is_zero() {
        return Err(AggregateError::ZeroTotal("share denominator"));
    }
    values
        .iter()
        .map(|value| percent_of_total(*value, total))
        .collect()
}

/// Labeled shares for a demographic breakdown
///
/// **Public** - feeds the age-range and location pie charts
pub fn demographic_shares(
    buckets: &[DemographicBucket],
) -> Result<Vec<PercentShare>, AggregateError> {
    debug!("Deriving shares for {} demographic buckets", buckets.len());

    let total = Decimal::from(buckets.iter().map(|b| b.count).sum::<u64>());
    if total.is_zero() {
        return Err(AggregateError::ZeroTotal("demographic counts"));
    }
    buckets
        .iter()
        .map(|bucket| {
            let value = Decimal::from(bucket.count);
            Ok(PercentShare {
                label: bucket.label.clone(),
                value,
                share_pct: percent_of_total(value, total)?,
            })
        })
        .collect()
}

/// Labeled shares re-derived from expense amounts
///
/// Ignores the stored `share_pct` on each record and recomputes it from
/// the amounts, for callers that want the breakdown and the donut
/// labels guaranteed consistent.
pub fn expense_shares(expenses: &[ExpenseRecord]) -> Result<Vec<PercentShare>, AggregateError> {
    debug!("Deriving shares for {} expense categories", expenses.len());

    let total: Decimal = expenses.iter().map(|e| e.amount).sum();
    if total.is_zero() {
        return Err(AggregateError::ZeroTotal("expense amounts"));
    }
    expenses
        .iter()
        .map(|expense| {
            Ok(PercentShare {
                label: expense.category.clone(),
                value: expense.amount,
                share_pct: percent_of_total(expense.amount, total)?,
            })
        })
        .collect()
}
