//! Stock level classification.
//!
//! Stock status is a pure function of quantity with a fixed threshold:
//! zero is out of stock, anything below 50 is low stock, 50 and above
//! is in stock. Negative quantities are rejected at this boundary and
//! never clamped.

use crate::utils::config::LOW_STOCK_THRESHOLD;
use crate::utils::error::ClassifyError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-valued stock classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Human-readable label for table cells and badges
    pub fn label(&self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a stock quantity
///
/// **Public** - used by product status, inventory lines and warehouse
/// summaries
///
/// # Arguments
/// * `quantity` - Units on hand
///
/// # Returns
/// The derived status, or `ClassifyError::NegativeQuantity` for
/// negative input
pub fn classify_stock(quantity: i64) -> Result<StockStatus, ClassifyError> {
    if quantity < 0 {
        return Err(ClassifyError::NegativeQuantity(quantity));
    }

    Ok(if quantity == 0 {
        StockStatus::OutOfStock
    } else if quantity < LOW_STOCK_THRESHOLD {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    })
}
