//! Chart projection: histogram bars and fitted normal curve on one axis.
//!
//! The normal density at each bucket midpoint is rescaled so that the curve's
//! peak matches the tallest bar, independent of the absolute density
//! magnitude. Reference markers (limits, nominal, mean) are snapped to the
//! bucket whose midpoint is nearest.

use serde::{Deserialize, Serialize};

use crate::capability::SpecificationLimits;
use crate::distribution::HistogramBucket;
use crate::measure::Measure;
use crate::normal::pdf;

/// One display point: a histogram bar with the fitted curve height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Bucket midpoint.
    pub x: f64,
    /// Bucket label, `"lo–hi"`.
    pub label: String,
    /// Bar height.
    pub count: usize,
    /// Normal curve height on the bar scale.
    pub curve_height: f64,
}

/// What a reference marker denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    LowerLimit,
    UpperLimit,
    Nominal,
    Mean,
}

/// A vertical reference line placed on the nearest bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMarker {
    pub kind: MarkerKind,
    /// The exact value being marked.
    pub value: f64,
    /// Label of the bucket the marker is drawn on.
    pub bucket_label: String,
}

/// Scales the normal curve `N(mu, sigma²)` onto the histogram's count axis.
///
/// Returns an empty series when the histogram is empty, or when `mu`/`sigma`
/// are not computable or `sigma <= 0`.
///
/// # Examples
///
/// ```
/// use sigmax::chart::project_chart_series;
/// use sigmax::distribution::compute_histogram;
/// use sigmax::measure::Measure;
///
/// let data = [1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0];
/// let hist = compute_histogram(&data, Some(5));
/// let series = project_chart_series(&hist, Measure::Computed(3.0), Measure::Computed(1.2));
///
/// let tallest = series.iter().map(|p| p.count).max().unwrap() as f64;
/// let peak = series.iter().map(|p| p.curve_height).fold(0.0, f64::max);
/// assert!((peak - tallest).abs() < 1e-12);
///
/// assert!(project_chart_series(&hist, Measure::Computed(3.0), Measure::NotComputable).is_empty());
/// ```
pub fn project_chart_series(
    histogram: &[HistogramBucket],
    mu: Measure,
    sigma: Measure,
) -> Vec<ChartPoint> {
    let (Some(mu), Some(sigma)) = (mu.value(), sigma.value()) else {
        return Vec::new();
    };
    if histogram.is_empty() || sigma <= 0.0 {
        return Vec::new();
    }

    let densities: Vec<f64> = histogram.iter().map(|b| pdf(b.midpoint, mu, sigma)).collect();

    let peak_count = histogram.iter().map(|b| b.count).max().unwrap_or(0);
    let peak_count = if peak_count == 0 { 1.0 } else { peak_count as f64 };
    let peak_density = densities.iter().copied().fold(0.0, f64::max);
    // Underflow far from the mean leaves every density at zero.
    let peak_density = if peak_density > 0.0 { peak_density } else { 1.0 };

    histogram
        .iter()
        .zip(densities)
        .map(|(bucket, density)| ChartPoint {
            x: bucket.midpoint,
            label: bucket.label(),
            count: bucket.count,
            curve_height: density / peak_density * peak_count,
        })
        .collect()
}

/// The point whose `x` is closest to `value`; the first one on ties.
pub fn nearest_bucket(series: &[ChartPoint], value: f64) -> Option<&ChartPoint> {
    if !value.is_finite() {
        return None;
    }
    series.iter().reduce(|best, p| {
        if (p.x - value).abs() < (best.x - value).abs() {
            p
        } else {
            best
        }
    })
}

/// Places the LSL, USL, nominal and mean markers on `series`.
///
/// Markers whose value is absent or not computable are omitted, as are all
/// markers for an empty series. `nominal` is the user-supplied nominal, not
/// the midpoint fallback.
pub fn reference_markers(
    series: &[ChartPoint],
    limits: &SpecificationLimits,
    mean: Measure,
) -> Vec<ReferenceMarker> {
    [
        (MarkerKind::LowerLimit, limits.lower),
        (MarkerKind::UpperLimit, limits.upper),
        (MarkerKind::Nominal, limits.nominal),
        (MarkerKind::Mean, mean.value()),
    ]
    .into_iter()
    .filter_map(|(kind, value)| {
        let value = value?;
        nearest_bucket(series, value).map(|p| ReferenceMarker {
            kind,
            value,
            bucket_label: p.label.clone(),
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::compute_histogram;

    const SAMPLE: [f64; 10] = [48.0, 50.0, 51.0, 49.0, 52.0, 50.0, 53.0, 47.0, 50.0, 51.0];

    fn sample_series() -> Vec<ChartPoint> {
        let hist = compute_histogram(&SAMPLE, None);
        project_chart_series(&hist, Measure::Computed(50.1), Measure::Computed(1.791_957_34))
    }

    #[test]
    fn curve_peak_matches_tallest_bar() {
        let series = sample_series();
        assert_eq!(series.len(), 5);
        let counts: Vec<usize> = series.iter().map(|p| p.count).collect();
        assert_eq!(counts, vec![2, 1, 3, 2, 2]);
        let peak = series.iter().map(|p| p.curve_height).fold(0.0, f64::max);
        assert!((peak - 3.0).abs() < 1e-12);
        // Mean 50.1 is nearest to the middle bucket midpoint (50.0).
        assert!((series[2].curve_height - 3.0).abs() < 1e-12);
        assert!(series.iter().all(|p| p.curve_height > 0.0 && p.curve_height <= 3.0 + 1e-12));
    }

    #[test]
    fn degenerate_inputs_give_empty_series() {
        let hist = compute_histogram(&SAMPLE, None);
        assert!(project_chart_series(&[], Measure::Computed(0.0), Measure::Computed(1.0)).is_empty());
        assert!(project_chart_series(&hist, Measure::NotComputable, Measure::Computed(1.0)).is_empty());
        assert!(project_chart_series(&hist, Measure::Computed(50.0), Measure::Computed(0.0)).is_empty());
        assert!(project_chart_series(&hist, Measure::Computed(50.0), Measure::Computed(-1.0)).is_empty());
    }

    #[test]
    fn density_underflow_does_not_divide_by_zero() {
        let hist = compute_histogram(&[0.0, 1.0, 2.0, 3.0], None);
        let series = project_chart_series(&hist, Measure::Computed(1e6), Measure::Computed(1e-3));
        assert_eq!(series.len(), 4);
        assert!(series.iter().all(|p| p.curve_height == 0.0));
    }

    #[test]
    fn nearest_bucket_prefers_first_on_tie() {
        let series = sample_series();
        let first = nearest_bucket(&series, 0.0).expect("non-empty");
        assert_eq!(first.label, series[0].label);
        let last = nearest_bucket(&series, 1e9).expect("non-empty");
        assert_eq!(last.label, series[4].label);
        assert!(nearest_bucket(&series, f64::NAN).is_none());
        assert!(nearest_bucket(&[], 1.0).is_none());
    }

    #[test]
    fn markers_snap_to_nearest_bucket() {
        let series = sample_series();
        let limits = SpecificationLimits::from_tolerance(50.0, 10.0);
        let markers = reference_markers(&series, &limits, Measure::Computed(50.1));
        let kinds: Vec<MarkerKind> = markers.iter().map(|m| m.kind).collect();
        assert_eq!(
            kinds,
            vec![
                MarkerKind::LowerLimit,
                MarkerKind::UpperLimit,
                MarkerKind::Nominal,
                MarkerKind::Mean
            ]
        );
        assert_eq!(markers[0].bucket_label, series[0].label);
        assert_eq!(markers[1].bucket_label, series[4].label);
        assert_eq!(markers[2].bucket_label, series[2].label);
        assert_eq!(markers[3].value, 50.1);
    }

    #[test]
    fn missing_values_have_no_marker() {
        let series = sample_series();
        let limits = SpecificationLimits::new(None, Some(55.0));
        let markers = reference_markers(&series, &limits, Measure::NotComputable);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].kind, MarkerKind::UpperLimit);
        assert!(reference_markers(&[], &limits, Measure::Computed(1.0)).is_empty());
    }
}
