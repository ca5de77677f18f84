//! Dual-metric comparison series for two-line charts.
//!
//! Both inputs must share identical period ordering. A length or label
//! mismatch is rejected outright; a best-effort partial merge would
//! silently plot one metric against the wrong period.

use crate::model::records::SalesRecord;
use crate::model::view::{ComparisonPoint, SeriesPoint};
use crate::utils::config::MONEY_DP;
use crate::utils::error::ComparisonError;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};

/// Merge two parallel series into comparison points
///
/// **Public** - feeds dual-line and dual-axis charts
///
/// # Arguments
/// * `actual` - The actual-metric series
/// * `target` - The target-metric series, same periods in the same order
///
/// # Errors
/// * `ComparisonError::LengthMismatch` - series lengths differ
/// * `ComparisonError::PeriodMismatch` - labels disagree at some index
pub fn build_comparison(
    actual: &[SeriesPoint],
    target: &[SeriesPoint],
) -> Result<Vec<ComparisonPoint>, ComparisonError> {
    if actual.len() != target.len() {
        return Err(ComparisonError::LengthMismatch {
            left: actual.len(),
            right: target.len(),
        });
    }

    actual
        .iter()
        .zip(target)
        .enumerate()
        .map(|(index, (a, t))| {
            if a.period != t.period {
                return Err(ComparisonError::PeriodMismatch {
                    index,
                    left: a.period.clone(),
                    right: t.period.clone(),
                });
            }
            Ok(ComparisonPoint {
                period: a.period.clone(),
                actual: a.value,
                target: t.value,
            })
        })
        .collect()
}

/// Revenue vs. a derived target over the trailing `window` periods
///
/// **Public** - feeds the revenue-vs-target chart
///
/// The target series is computed as `ratio` times actual revenue, so
/// the two series are aligned by construction and this cannot fail.
/// A window larger than the input covers the whole input.
pub fn revenue_vs_target(
    records: &[SalesRecord],
    window: usize,
    ratio: Decimal,
) -> Vec<ComparisonPoint> {
    debug!(
        "Building revenue-vs-target for the last {} of {} periods",
        window,
        records.len()
    );

    let start = records.len().saturating_sub(window);
    records[start..]
        .iter()
        .map(|record| ComparisonPoint {
            period: record.period.clone(),
            actual: record.revenue,
            target: (record.revenue * ratio)
                .round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero),
        })
        .collect()
}
