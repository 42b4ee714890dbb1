//! Order statistics over a finite sample.
//!
//! Every function takes the sample as a borrowed slice and works on a sorted
//! copy; the caller's data is never reordered.
//!
//! # Quartile convention
//!
//! Q1 and Q3 are *hinges*: the medians of the lower and upper halves of the
//! sorted sample, split at `m = mid(n)`.
//!
//! | n    | lower half       | upper half         |
//! |------|------------------|--------------------|
//! | even | `sorted[0..=m]`  | `sorted[m+1..n]`   |
//! | odd  | `sorted[0..=m]`  | `sorted[m..n]`     |
//!
//! For odd `n` the middle element belongs to both halves. This is not the
//! R-7 interpolation used by most statistics packages: for
//! `[1, 2, 3, 4, 5, 6, 7, 8]` the hinges are `(2.5, 6.5)` where R-7 gives
//! `(2.75, 6.25)`.
//!
//! # Ordering
//!
//! Sorting uses the IEEE 754 total order, so NaN never makes a comparator
//! panic. [`median`], [`mean`] and [`sixnum`] reject NaN outright; [`iqr`]
//! lets it propagate into the result.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// Decimal places kept for the mean reported by [`sixnum`].
pub const SIXNUM_MEAN_DECIMALS: usize = 2;

/// Tukey's six-number summary: five-number summary plus the mean.
///
/// Quartiles follow the hinge convention described in the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SixNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    /// Arithmetic mean rounded to [`SIXNUM_MEAN_DECIMALS`] places.
    pub mean: f64,
    pub q3: f64,
    pub max: f64,
}

impl SixNumberSummary {
    /// Returns the summary as `[min, q1, median, mean, q3, max]`.
    pub fn to_array(&self) -> [f64; 6] {
        [self.min, self.q1, self.median, self.mean, self.q3, self.max]
    }

    /// Interquartile range `q3 - q1`; equal to [`iqr`] on the same sample.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

impl From<SixNumberSummary> for [f64; 6] {
    fn from(summary: SixNumberSummary) -> Self {
        summary.to_array()
    }
}

/// Middle index `⌊(length − 1) / 2⌋` of a sequence of `length` elements.
///
/// Returns `-1` for `length == 0`; callers must not index with it then.
///
/// # Examples
/// ```
/// use u_descriptive::stats::mid;
/// assert_eq!(mid(5), 2);
/// assert_eq!(mid(6), 2);
/// assert_eq!(mid(0), -1);
/// ```
pub fn mid(length: usize) -> isize {
    (length as isize - 1).div_euclid(2)
}

/// Computes the median of `data` without mutating the input.
///
/// Odd length: the middle element of the sorted copy. Even length: the
/// mean of the two middle elements.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// [`StatsError::InvalidArgument`] if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_descriptive::stats::median;
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
/// assert_eq!(median(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]), Ok(3.5));
/// assert!(median(&[]).is_err());
/// ```
pub fn median(data: &[f64]) -> Result<f64, StatsError> {
    require_usable(data, "median")?;
    Ok(median_sorted(&sorted_copy(data)))
}

/// Interquartile range `Q3 − Q1` under the hinge convention.
///
/// Samples of length 0 or 1 have no spread and return exactly `0.0`.
/// NaN in the input propagates into the result.
///
/// # Examples
/// ```
/// use u_descriptive::stats::iqr;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
/// // lower = [1, 2, 3, 4], upper = [5, 6, 7, 8]
/// assert_eq!(iqr(&data), 4.0);
/// assert_eq!(iqr(&[42.0]), 0.0);
/// ```
pub fn iqr(data: &[f64]) -> f64 {
    if data.len() <= 1 {
        return 0.0;
    }
    let sorted = sorted_copy(data);
    let (lower, upper) = hinges(&sorted);
    median_sorted(upper) - median_sorted(lower)
}

/// Returns the hinges `(Q1, Q3)` of `data`, or `None` if it is empty.
///
/// # Examples
/// ```
/// use u_descriptive::stats::quartiles;
/// assert_eq!(quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some((2.0, 4.0)));
/// assert_eq!(quartiles(&[]), None);
/// ```
pub fn quartiles(data: &[f64]) -> Option<(f64, f64)> {
    if data.is_empty() {
        return None;
    }
    let sorted = sorted_copy(data);
    let (lower, upper) = hinges(&sorted);
    Some((median_sorted(lower), median_sorted(upper)))
}

/// Arithmetic mean using Neumaier compensated summation.
///
/// # Errors
/// [`StatsError::InvalidArgument`] if `data` is empty or contains NaN.
pub fn mean(data: &[f64]) -> Result<f64, StatsError> {
    require_usable(data, "mean")?;
    Ok(compensated_sum(data) / data.len() as f64)
}

/// Computes the six-number summary `[min, Q1, median, mean, Q3, max]`.
///
/// The mean is rounded to two decimal places with ties going to the even
/// digit (see [`round_to`]); every other field is an exact order statistic
/// or an average of two.
///
/// # Errors
/// [`StatsError::InvalidArgument`] if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_descriptive::stats::sixnum;
/// let s = sixnum(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(s.to_array(), [1.0, 2.0, 3.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sixnum(data: &[f64]) -> Result<SixNumberSummary, StatsError> {
    require_usable(data, "sixnum")?;
    let sorted = sorted_copy(data);
    let n = sorted.len();
    let (lower, upper) = hinges(&sorted);
    Ok(SixNumberSummary {
        min: sorted[0],
        q1: median_sorted(lower),
        median: median_sorted(&sorted),
        mean: round_to(compensated_sum(&sorted) / n as f64, SIXNUM_MEAN_DECIMALS),
        q3: median_sorted(upper),
        max: sorted[n - 1],
    })
}

/// Indices of `data` ordered from greatest to smallest value.
///
/// Equal values keep their original relative order, so the result is a
/// stable descending sort of `0..n`. `0.0` and `-0.0` compare equal.
///
/// # Examples
/// ```
/// use u_descriptive::stats::order;
/// assert_eq!(order(&[3.0, 1.0, 2.0]), vec![0, 2, 1]);
/// assert_eq!(order(&[5.0, 5.0, 1.0]), vec![0, 1, 2]);
/// ```
pub fn order(data: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..data.len()).collect();
    // `sort_by` is stable: ties stay in ascending index order.
    indices.sort_by(|&a, &b| descending(data[a], data[b]));
    indices
}

/// 1-based descending rank of each element (1 = greatest).
///
/// Ties are broken by position: the earlier element gets the smaller rank.
/// This is the inverse permutation of [`order`], so
/// `order(x)[rank(x)[i] - 1] == i` for every `i`.
///
/// # Examples
/// ```
/// use u_descriptive::stats::rank;
/// assert_eq!(rank(&[3.0, 1.0, 2.0]), vec![1, 3, 2]);
/// assert!(rank(&[]).is_empty());
/// ```
pub fn rank(data: &[f64]) -> Vec<usize> {
    let mut ranks = vec![0; data.len()];
    for (position, index) in order(data).into_iter().enumerate() {
        ranks[index] = position + 1;
    }
    ranks
}

/// Rounds `value` to `decimals` decimal places, ties to even.
///
/// Rounding is decided on the exact decimal expansion of `value`, so a
/// number stored just below a tie (2.675 is 2.67499999…) rounds down.
/// Non-finite values are returned unchanged.
///
/// # Examples
/// ```
/// use u_descriptive::stats::round_to;
/// assert_eq!(round_to(1.23456, 2), 1.23);
/// assert_eq!(round_to(0.125, 2), 0.12);
/// assert_eq!(round_to(2.675, 2), 2.67);
/// assert_eq!(round_to(2.5, 0), 2.0);
/// ```
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // `{:.*}` rounds the exact binary value, ties to even.
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

// ---------------------------------------------------------------------------
// Sorted-sample helpers
// ---------------------------------------------------------------------------

fn require_usable(data: &[f64], op: &str) -> Result<(), StatsError> {
    if data.is_empty() {
        return Err(StatsError::InvalidArgument(format!(
            "{op}() requires at least one value"
        )));
    }
    if data.iter().any(|x| x.is_nan()) {
        return Err(StatsError::InvalidArgument(format!(
            "{op}() is undefined for NaN values"
        )));
    }
    Ok(())
}

fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

/// Median of non-empty, ascending `sorted`.
fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let m = n / 2;
    if n % 2 == 1 {
        sorted[m]
    } else {
        midpoint(sorted[m - 1], sorted[m])
    }
}

/// `(a + b) / 2` that stays within `[a, b]` when the sum overflows.
fn midpoint(a: f64, b: f64) -> f64 {
    let sum = a + b;
    if sum.is_finite() {
        sum / 2.0
    } else {
        a / 2.0 + b / 2.0
    }
}

/// Lower and upper halves of non-empty, ascending `sorted`.
fn hinges(sorted: &[f64]) -> (&[f64], &[f64]) {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    let m = mid(n).max(0) as usize;
    let lower = &sorted[..=m];
    let upper = if n % 2 == 0 {
        &sorted[m + 1..]
    } else {
        &sorted[m..]
    };
    (lower, upper)
}

/// Total order that puts larger values first; `0.0 == -0.0`.
fn descending(a: f64, b: f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        b.total_cmp(&a)
    }
}

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// This is an improved variant of Kahan summation that also handles the
/// case where the addend is larger in magnitude than the running sum.
///
/// Once the running sum leaves the finite range the compensation term is
/// meaningless (`inf - inf`), so the rest is added without it.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *Zeitschrift für Angewandte
/// Mathematik und Mechanik* 54(1), pp. 39–51.
fn compensated_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for (i, &x) in data.iter().enumerate() {
        let t = sum + x;
        if !t.is_finite() {
            return data[i + 1..].iter().fold(t, |acc, &y| acc + y);
        }
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
