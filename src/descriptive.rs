//! Descriptive statistics for a measurement sample.
//!
//! Every statistic is total: an empty sample (or, for sample variance, a
//! single observation) yields [`Measure::NotComputable`] rather than NaN.
//!
//! # Algorithms
//!
//! - **Mean**: Kahan compensated summation (`u_numflow::stats::mean`).
//! - **Variance**: Welford's algorithm, divided by `n − 1`
//!   ([`VarianceMode::Sample`]) or `n` ([`VarianceMode::Population`]).
//! - **Median**: midpoint of the two central order statistics for even `n`.
//! - **Mode**: single hash-tally pass, ties resolved by first occurrence.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use u_numflow::stats;

use crate::measure::Measure;

/// Divisor used for the sum of squared deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarianceMode {
    /// Bessel-corrected, `n − 1`. Short-term process sigma.
    #[default]
    Sample,
    /// `n`. Long-term (overall) sigma used by Pp/Ppk.
    Population,
}

impl VarianceMode {
    /// Smallest sample size for which the variance is defined.
    pub fn min_count(self) -> usize {
        match self {
            Self::Sample => 2,
            Self::Population => 1,
        }
    }
}

/// Aggregate descriptive statistics for one sample and one variance mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveStats {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Measure,
    /// Variance under `variance_mode`.
    pub variance: Measure,
    /// Square root of `variance`.
    pub std_dev: Measure,
    pub median: Measure,
    /// Most frequent value. `None` only for an empty sample.
    pub mode: Option<f64>,
    pub min: Measure,
    pub max: Measure,
    /// `max − min`.
    pub range: Measure,
    /// The sample in ascending order.
    pub sorted: Vec<f64>,
    /// Divisor convention used for `variance` and `std_dev`.
    pub variance_mode: VarianceMode,
}

/// Computes all descriptive statistics for `data`.
///
/// `data` is expected to hold finite values, as produced by
/// [`parse_sample`](crate::parse::parse_sample).
///
/// # Examples
///
/// ```
/// use sigmax::descriptive::{compute_descriptive, VarianceMode};
/// use sigmax::measure::Measure;
///
/// let stats = compute_descriptive(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0], VarianceMode::Population);
/// assert_eq!(stats.mean, Measure::Computed(5.0));
/// assert_eq!(stats.std_dev, Measure::Computed(2.0));
/// assert_eq!(stats.mode, Some(4.0));
///
/// let empty = compute_descriptive(&[], VarianceMode::Sample);
/// assert_eq!(empty.mean, Measure::NotComputable);
/// assert_eq!(empty.mode, None);
/// ```
pub fn compute_descriptive(data: &[f64], variance_mode: VarianceMode) -> DescriptiveStats {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let min = Measure::from_option(sorted.first().copied());
    let max = Measure::from_option(sorted.last().copied());
    let variance = variance(data, variance_mode);

    DescriptiveStats {
        count: data.len(),
        mean: mean(data),
        variance,
        std_dev: variance.map(f64::sqrt),
        median: median(data),
        mode: mode(data),
        min,
        max,
        range: max.zip_with(min, |hi, lo| hi - lo),
        sorted,
        variance_mode,
    }
}

/// Arithmetic mean (Kahan compensated summation).
pub fn mean(data: &[f64]) -> Measure {
    Measure::from_option(stats::mean(data))
}

/// Variance with the divisor selected by `mode`.
///
/// Not computable for an empty sample, and for a single observation in
/// [`VarianceMode::Sample`].
///
/// # Examples
///
/// ```
/// use sigmax::descriptive::{variance, VarianceMode};
/// use sigmax::measure::Measure;
///
/// assert_eq!(variance(&[1.0, 3.0], VarianceMode::Sample), Measure::Computed(2.0));
/// assert_eq!(variance(&[1.0, 3.0], VarianceMode::Population), Measure::Computed(1.0));
/// assert_eq!(variance(&[1.0], VarianceMode::Sample), Measure::NotComputable);
/// assert_eq!(variance(&[1.0], VarianceMode::Population), Measure::Computed(0.0));
/// ```
pub fn variance(data: &[f64], mode: VarianceMode) -> Measure {
    Measure::from_option(match mode {
        VarianceMode::Sample => stats::variance(data),
        VarianceMode::Population => stats::population_variance(data),
    })
}

/// Standard deviation, `sqrt(variance)`.
pub fn std_dev(data: &[f64], mode: VarianceMode) -> Measure {
    variance(data, mode).map(f64::sqrt)
}

/// Median; the mean of the two central order statistics for even `n`.
pub fn median(data: &[f64]) -> Measure {
    Measure::from_option(stats::median(data))
}

/// Most frequent value; on ties, the value whose first occurrence comes
/// earliest in `data`.
///
/// `0.0` and `-0.0` count as the same value. Returns `None` for an empty
/// sample.
///
/// # Examples
///
/// ```
/// use sigmax::descriptive::mode;
///
/// assert_eq!(mode(&[3.0, 1.0, 1.0, 3.0]), Some(3.0));
/// assert_eq!(mode(&[5.0, 2.0, 2.0]), Some(2.0));
/// assert_eq!(mode(&[]), None);
/// ```
pub fn mode(data: &[f64]) -> Option<f64> {
    // bits -> (first index, count); `+ 0.0` folds -0.0 into 0.0.
    let mut tally: HashMap<u64, (usize, usize)> = HashMap::with_capacity(data.len());
    for (i, &x) in data.iter().enumerate() {
        tally.entry((x + 0.0).to_bits()).or_insert((i, 0)).1 += 1;
    }

    tally
        .into_values()
        .min_by(|(ia, ca), (ib, cb)| cb.cmp(ca).then(ia.cmp(ib)))
        .map(|(first, _)| data[first])
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 10] = [48.0, 50.0, 51.0, 49.0, 52.0, 50.0, 53.0, 47.0, 50.0, 51.0];

    fn value(m: Measure) -> f64 {
        m.value().expect("computed")
    }

    #[test]
    fn reference_sample_sample_mode() {
        let stats = compute_descriptive(&SAMPLE, VarianceMode::Sample);
        assert_eq!(stats.count, 10);
        assert!((value(stats.mean) - 50.1).abs() < 1e-12);
        assert!((value(stats.variance) - 28.9 / 9.0).abs() < 1e-12);
        assert!((value(stats.std_dev) - 1.791_957_340_762_081_5).abs() < 1e-12);
        assert_eq!(stats.median, Measure::Computed(50.0));
        assert_eq!(stats.mode, Some(50.0));
        assert_eq!(stats.min, Measure::Computed(47.0));
        assert_eq!(stats.max, Measure::Computed(53.0));
        assert_eq!(stats.range, Measure::Computed(6.0));
        assert_eq!(stats.variance_mode, VarianceMode::Sample);
    }

    #[test]
    fn reference_sample_population_mode() {
        let stats = compute_descriptive(&SAMPLE, VarianceMode::Population);
        assert!((value(stats.variance) - 2.89).abs() < 1e-12);
        assert!((value(stats.std_dev) - 1.7).abs() < 1e-12);
    }

    #[test]
    fn sorted_copy_leaves_input_order() {
        let data = [3.0, 1.0, 2.0];
        let stats = compute_descriptive(&data, VarianceMode::Sample);
        assert_eq!(stats.sorted, vec![1.0, 2.0, 3.0]);
        assert_eq!(data, [3.0, 1.0, 2.0]);
    }

    #[test]
    fn empty_sample_is_not_computable() {
        let stats = compute_descriptive(&[], VarianceMode::Population);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean, Measure::NotComputable);
        assert_eq!(stats.variance, Measure::NotComputable);
        assert_eq!(stats.std_dev, Measure::NotComputable);
        assert_eq!(stats.median, Measure::NotComputable);
        assert_eq!(stats.min, Measure::NotComputable);
        assert_eq!(stats.max, Measure::NotComputable);
        assert_eq!(stats.range, Measure::NotComputable);
        assert_eq!(stats.mode, None);
        assert!(stats.sorted.is_empty());
    }

    #[test]
    fn single_value_sample_mode() {
        let stats = compute_descriptive(&[4.2], VarianceMode::Sample);
        assert_eq!(stats.mean, Measure::Computed(4.2));
        assert_eq!(stats.std_dev, Measure::NotComputable);
        assert_eq!(stats.median, Measure::Computed(4.2));
        assert_eq!(stats.mode, Some(4.2));
    }

    #[test]
    fn single_value_population_mode() {
        let stats = compute_descriptive(&[4.2], VarianceMode::Population);
        assert_eq!(stats.std_dev, Measure::Computed(0.0));
    }

    #[test]
    fn identical_values_have_zero_spread() {
        let stats = compute_descriptive(&[10.0; 10], VarianceMode::Sample);
        assert_eq!(stats.std_dev, Measure::Computed(0.0));
        assert_eq!(stats.range, Measure::Computed(0.0));
    }

    #[test]
    fn median_even_and_odd() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Measure::Computed(2.5));
        assert_eq!(median(&[5.0, 1.0, 3.0]), Measure::Computed(3.0));
        assert_eq!(median(&[]), Measure::NotComputable);
    }

    #[test]
    fn mode_tie_takes_first_occurrence() {
        assert_eq!(mode(&[1.0, 2.0, 3.0]), Some(1.0));
        assert_eq!(mode(&[2.0, 1.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(mode(&[7.0, 8.0, 8.0, 7.0, 8.0]), Some(8.0));
    }

    #[test]
    fn mean_is_compensated() {
        let mut data = vec![1.0];
        data.extend(std::iter::repeat(1e-16).take(10_000));
        let expected = (1.0 + 1e-12) / data.len() as f64;
        assert!((value(mean(&data)) - expected).abs() < 1e-18);
    }

    #[test]
    fn mode_of_all_distinct_large_sample_is_first() {
        let data: Vec<f64> = (0..100_000).map(|i| f64::from(i) * 0.5).collect();
        assert_eq!(mode(&data), Some(0.0));
        let stats = compute_descriptive(&data, VarianceMode::Sample);
        assert_eq!(stats.mode, Some(0.0));
    }

    #[test]
    fn mode_treats_signed_zeros_as_equal() {
        assert_eq!(mode(&[1.0, -0.0, 0.0, 1.0, 0.0]), Some(-0.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn median_and_mean_within_range(
            data in proptest::collection::vec(-1e6_f64..1e6, 1..=100)
        ) {
            let stats = compute_descriptive(&data, VarianceMode::Sample);
            let lo = stats.min.value().expect("non-empty");
            let hi = stats.max.value().expect("non-empty");
            let med = stats.median.value().expect("non-empty");
            let mean = stats.mean.value().expect("non-empty");
            let tol = 1e-9 * (1.0 + lo.abs().max(hi.abs()));
            prop_assert!(lo <= med && med <= hi);
            prop_assert!(lo - tol <= mean && mean <= hi + tol, "{lo} <= {mean} <= {hi}");
        }

        #[test]
        fn population_variance_not_above_sample_variance(
            data in proptest::collection::vec(-1e3_f64..1e3, 2..=100)
        ) {
            let pop = variance(&data, VarianceMode::Population).value().expect("n >= 1");
            let smp = variance(&data, VarianceMode::Sample).value().expect("n >= 2");
            prop_assert!(pop >= 0.0);
            prop_assert!(pop <= smp, "{pop} > {smp}");
        }

        #[test]
        fn mode_is_a_sample_value(
            data in proptest::collection::vec(-5i32..5, 1..=50)
        ) {
            let data: Vec<f64> = data.into_iter().map(f64::from).collect();
            let m = mode(&data).expect("non-empty");
            prop_assert!(data.contains(&m));
        }
    }
}
