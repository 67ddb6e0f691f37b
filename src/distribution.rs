//! Histogram binning.
//!
//! Partitions a sample into equal-width buckets spanning `[min, max]`. The
//! default bucket count follows Sturges' rule with a floor of four buckets.
//!
//! # Examples
//!
//! ```
//! use sigmax::distribution::{compute_histogram, sturges_bucket_count};
//!
//! let data = [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0];
//! let buckets = compute_histogram(&data, None);
//! assert_eq!(buckets.len(), sturges_bucket_count(data.len()));
//! let total: usize = buckets.iter().map(|b| b.count).sum();
//! assert_eq!(total, data.len());
//! ```
//!
//! # References
//!
//! - Sturges (1926), "The Choice of a Class Interval", *Journal of the
//!   American Statistical Association* 21(153), pp. 65--66.

use serde::{Deserialize, Serialize};

use crate::measure::round_to;

/// Minimum number of buckets produced by [`sturges_bucket_count`].
pub const MIN_BUCKETS: usize = 4;

/// One histogram bucket `[lower, upper)`; the last bucket is closed on the
/// right so that the sample maximum is counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub lower: f64,
    pub upper: f64,
    /// `(lower + upper) / 2`.
    pub midpoint: f64,
    /// Number of observations assigned to the bucket.
    pub count: usize,
}

impl HistogramBucket {
    /// Axis label `"lo–hi"` with both bounds rounded to two decimals.
    pub fn label(&self) -> String {
        format!("{}–{}", round_to(self.lower, 2), round_to(self.upper, 2))
    }
}

/// Sturges' rule: `k = max(4, ⌈1 + log₂(max(1, n))⌉)`.
///
/// # Examples
///
/// ```
/// use sigmax::distribution::sturges_bucket_count;
///
/// assert_eq!(sturges_bucket_count(0), 4);
/// assert_eq!(sturges_bucket_count(10), 5);
/// assert_eq!(sturges_bucket_count(100), 8);
/// ```
pub fn sturges_bucket_count(n: usize) -> usize {
    let k = (1.0 + (n.max(1) as f64).log2()).ceil() as usize;
    k.max(MIN_BUCKETS)
}

/// Bins `data` into `bucket_count` equal-width buckets (Sturges' rule when
/// `None`).
///
/// Buckets with zero observations are kept so the domain is contiguous. When
/// every value is identical the width would be zero; a width of `1` is used
/// instead. An explicit count of zero is treated as one bucket.
///
/// Returns an empty vector for an empty sample.
pub fn compute_histogram(data: &[f64], bucket_count: Option<usize>) -> Vec<HistogramBucket> {
    if data.is_empty() {
        return Vec::new();
    }

    let min_val = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let n_bins = bucket_count
        .unwrap_or_else(|| sturges_bucket_count(data.len()))
        .max(1);

    let mut bin_width = (max_val - min_val) / n_bins as f64;
    if bin_width == 0.0 || !bin_width.is_finite() {
        bin_width = 1.0;
    }

    let mut counts = vec![0_usize; n_bins];
    for &x in data {
        let raw = ((x - min_val) / bin_width).floor();
        // Clamp absorbs rounding at the maximum; the cast saturates negatives
        // to 0 and +inf (overflowed span) to the last bucket.
        let bin = if raw.is_nan() { 0 } else { raw as usize };
        counts[bin.min(n_bins - 1)] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = min_val + i as f64 * bin_width;
            let upper = min_val + (i + 1) as f64 * bin_width;
            HistogramBucket {
                lower,
                upper,
                midpoint: (lower + upper) / 2.0,
                count,
            }
        })
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn counts_sum_to_n(
            data in proptest::collection::vec(-1e3_f64..1e3, 1..=100),
            k in proptest::option::of(1usize..=30),
        ) {
            let buckets = compute_histogram(&data, k);
            let total: usize = buckets.iter().map(|b| b.count).sum();
            prop_assert_eq!(total, data.len());
            if let Some(k) = k {
                prop_assert_eq!(buckets.len(), k);
            }
        }

        #[test]
        fn buckets_are_contiguous(
            data in proptest::collection::vec(-1e3_f64..1e3, 2..=60)
        ) {
            let buckets = compute_histogram(&data, None);
            for w in buckets.windows(2) {
                prop_assert!((w[0].upper - w[1].lower).abs() < 1e-9);
            }
        }
    }
}
