//! Storefront Metrics
//!
//! Derived-metrics computation for e-commerce admin dashboards.
//!
//! This crate turns flat, immutable business records (sales periods,
//! products, expenses, demographic buckets, warehouse inventory) into
//! aggregated, chart-ready view models: category breakdowns, top-N
//! revenue rankings, percentage shares, dual-metric comparison series
//! and summary statistics for dashboard cards.
//!
//! Rendering, routing and data loading are external collaborators.
//! Every function here is a synchronous, side-effect-free transformation
//! over in-memory collections: inputs are taken by shared reference and
//! never mutated, and each derived view is computed fresh on every call.
//!
//! ## Getting Started
//!
//! ```
//! use storefront_metrics::aggregator::top_revenue_periods;
//! use storefront_metrics::model::SalesRecord;
//! use rust_decimal_macros::dec;
//!
//! let records = vec![
//!     SalesRecord { period: "Jan".into(), units: 156, revenue: dec!(45200) },
//!     SalesRecord { period: "Feb".into(), units: 189, revenue: dec!(52400) },
//! ];
//! let top = top_revenue_periods(&records, 1);
//! assert_eq!(top[0].period, "Feb");
//! ```

pub mod aggregator;
pub mod model;
pub mod utils;
