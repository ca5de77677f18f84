//! Category breakdowns over product and sales records.
//!
//! Grouping is by exact label match. The distribution preserves the
//! first-seen order of the input so pie slices keep a stable order
//! across renders; the performance rollup ranks by revenue instead.

use crate::aggregator::share::percent_of_total;
use crate::model::records::{CategorySales, ProductRecord};
use crate::model::view::{CategoryCount, CategoryPerformance, CategoryPerformanceRow};
use crate::utils::config::MONEY_DP;
use crate::utils::error::AggregateError;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashMap;

/// Count products per category
///
/// **Public** - feeds the category distribution pie chart
///
/// # Arguments
/// * `products` - Catalog products, in display order
///
/// # Returns
/// One count per distinct category label, in first-seen order. Empty
/// input yields an empty vector.
pub fn category_distribution(products: &[ProductRecord]) -> Vec<CategoryCount> {
    debug!("Building category distribution from {} products", products.len());

    // Map from label to position in the output, so counting stays O(n)
    // while the output keeps first-seen order
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for product in products {
        match index.get(product.category.as_str()) {
            Some(&at) => counts[at].products += 1,
            None => {
                index.insert(product.category.as_str(), counts.len());
                counts.push(CategoryCount {
                    category: product.category.clone(),
                    products: 1,
                });
            }
        }
    }

    counts
}

/// Build the category performance table
///
/// **Public** - feeds the sales-by-category table and its totals row
///
/// Rows are sorted by revenue descending (ties keep input order). Each
/// row carries the category's average unit price and its share of total
/// units; a category with zero units gets no average price rather than
/// a division fault.
///
/// # Errors
/// `AggregateError::ZeroTotal` when no units were sold at all
pub fn category_performance(
    categories: &[CategorySales],
) -> Result<CategoryPerformance, AggregateError> {
    debug!("Building performance rollup for {} categories", categories.len());

    let total_units: u64 = categories.iter().map(|c| c.units).sum();
    let total_revenue: Decimal = categories.iter().map(|c| c.revenue).sum();

    if total_units == 0 {
        return Err(AggregateError::ZeroTotal("unit sales"));
    }
    let unit_total = Decimal::from(total_units);

    let mut ranked: Vec<&CategorySales> = categories.iter().collect();
    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue));

    let rows = ranked
        .into_iter()
        .map(|category| {
            let avg_price = (category.units > 0).then(|| {
                (category.revenue / Decimal::from(category.units))
                    .round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
            });
            Ok(CategoryPerformanceRow {
                category: category.category.clone(),
                units: category.units,
                revenue: category.revenue,
                avg_price,
                share_pct: percent_of_total(Decimal::from(category.units), unit_total)?,
            })
        })
        .collect::<Result<Vec<_>, AggregateError>>()?;

    let avg_order_value = (total_revenue / unit_total)
        .round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero);

    Ok(CategoryPerformance {
        rows,
        total_units,
        total_revenue,
        avg_order_value,
    })
}
