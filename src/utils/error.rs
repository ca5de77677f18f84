//! Error types for the aggregation layer.
//!
//! We use `thiserror` for library-style errors with one enum per stage.
//! Every error is local to a single aggregation call: nothing here is
//! retryable (no I/O is involved) and nothing is fatal to the process.
//! Callers are expected to degrade to an empty or placeholder view.

use thiserror::Error;

/// Errors that can occur during stock classification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("invalid quantity: {0} is negative")]
    NegativeQuantity(i64),
}

/// Errors that can occur during share and average calculations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("total {0} is zero; no shares or averages can be derived")]
    ZeroTotal(&'static str),
}

/// Errors that can occur while merging comparison series
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("misaligned series: left has {left} points, right has {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("misaligned series: point {index} is \"{left}\" on the left but \"{right}\" on the right")]
    PeriodMismatch {
        index: usize,
        left: String,
        right: String,
    },
}
