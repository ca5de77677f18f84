//! Top-N ranking of sales periods by revenue.

use crate::model::records::SalesRecord;
use crate::model::view::RankedPeriod;
use log::debug;

/// Rank sales periods by revenue and keep the top `n`
///
/// **Public** - feeds the top-revenue-periods bar chart
///
/// # Arguments
/// * `records` - Sales periods, in chronological order
/// * `n` - Number of periods to keep
///
/// # Returns
/// At most `n` periods, highest revenue first. Ties keep the input
/// order (the sort is stable). If `n` exceeds the input length the
/// whole input is returned; `n == 0` yields an empty vector.
pub fn top_revenue_periods(records: &[SalesRecord], n: usize) -> Vec<RankedPeriod> {
    debug!("Ranking top {} of {} sales periods", n, records.len());

    let mut ranked: Vec<&SalesRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue));

    ranked
        .into_iter()
        .take(n)
        .map(|record| RankedPeriod {
            period: record.period.clone(),
            revenue: record.revenue,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn record(period: &str, revenue: Decimal) -> SalesRecord {
        SalesRecord {
            period: period.to_string(),
            units: 100,
            revenue,
        }
    }

    #[test]
    fn test_top_n_sorted_descending() {
        let records = vec![
            record("Jan", dec!(45200)),
            record("Feb", dec!(52400)),
            record("Mar", dec!(61300)),
            record("Apr", dec!(48900)),
        ];

        let top = top_revenue_periods(&records, 3);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0].period, "Mar");
        assert_eq!(top[1].period, "Feb");
        assert_eq!(top[2].period, "Apr");
        assert!(top[0].revenue >= top[1].revenue);
        assert!(top[1].revenue >= top[2].revenue);
    }

    #[test]
    fn test_top_n_exceeding_length_returns_all() {
        let records = vec![record("Jan", dec!(100)), record("Feb", dec!(200))];
        assert_eq!(top_revenue_periods(&records, 10).len(), 2);
    }

    #[test]
    fn test_top_zero_is_empty() {
        let records = vec![record("Jan", dec!(100))];
        assert!(top_revenue_periods(&records, 0).is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            record("Jan", dec!(100)),
            record("Feb", dec!(300)),
            record("Mar", dec!(100)),
        ];

        let top = top_revenue_periods(&records, 3);

        assert_eq!(top[0].period, "Feb");
        assert_eq!(top[1].period, "Jan");
        assert_eq!(top[2].period, "Mar");
    }
}
