//! Error type for descriptive statistics.

use thiserror::Error;

/// Error returned by statistics that need at least one usable value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// The sample cannot produce the requested statistic (empty, or contains NaN).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
