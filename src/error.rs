//! Measurement error types

use thiserror::Error;

/// Measurement errors
///
/// Every variant is a division that cannot be performed. The crate surfaces
/// these to the caller instead of producing NaN or infinity, since a silent
/// default would corrupt aggregate statistics invisibly.
#[derive(Debug, Error)]
pub enum MeasureError {
    #[error("reference transcript has no words: error rates are undefined")]
    EmptyReference,

    #[error("no samples aggregated: corpus summary is undefined")]
    EmptyCorpus,
}

/// Result type for measurement operations
pub type Result<T> = std::result::Result<T, MeasureError>;
