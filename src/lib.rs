//! # u-descriptive
//!
//! Descriptive statistics over a finite sample of real numbers.
//!
//! Every function is pure: it borrows the sample, sorts a private copy when
//! it needs one, and shares no state between calls, so any of them may be
//! called concurrently from multiple threads.
//!
//! ## Modules
//!
//! - [`stats`] — median, hinge quartiles and IQR, six-number summary,
//!   descending order and rank
//! - [`error`] — [`StatsError`], returned when a statistic needs at least
//!   one usable value
//!
//! ## Design Philosophy
//!
//! - **Exact conventions**: quartiles are Tukey hinges, not interpolated
//!   percentiles; see [`stats`] for the split rule
//! - **Caller's data is never mutated**
//! - **Property-based testing**: ordering invariants verified via proptest

pub mod error;
pub mod stats;

pub use error::StatsError;
pub use stats::{iqr, median, mid, order, rank, sixnum, SixNumberSummary};
