//! End-to-end analysis of one measurement sample.
//!
//! [`analyze`] runs the whole pipeline as a pure function of the raw text and
//! the [`AnalysisOptions`]: parse, describe (in the chosen variance mode and in
//! population mode), bin, compute capability, classify, and project the chart
//! series. Nothing is cached between calls.
//!
//! # Examples
//!
//! ```
//! use sigmax::analysis::analyze;
//! use sigmax::config::AnalysisOptions;
//!
//! let options = AnalysisOptions::with_tolerance(50.0, 10.0);
//! let analysis = analyze("48 50 51 49 52 50 53 47 50 51", &options);
//!
//! assert_eq!(analysis.sample.len(), 10);
//! assert_eq!(analysis.classification.class_label, "3");
//! assert_eq!(analysis.chart.len(), analysis.histogram.len());
//! ```

use serde::Serialize;
use tracing::debug;

use crate::capability::{
    classify, compute_capability, CapabilityRecord, Classification, SpecificationLimits,
};
use crate::chart::{project_chart_series, reference_markers, ChartPoint, ReferenceMarker};
use crate::config::AnalysisOptions;
use crate::descriptive::{compute_descriptive, DescriptiveStats, VarianceMode};
use crate::distribution::{compute_histogram, HistogramBucket};
use crate::measure::round_to;
use crate::parse::parse_sample;

/// Everything derived from one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Parsed values in entry order.
    pub sample: Vec<f64>,
    /// Limits derived from the options.
    pub limits: SpecificationLimits,
    /// Statistics in the chosen variance mode (short-term sigma).
    pub descriptive: DescriptiveStats,
    /// Statistics in population mode (long-term sigma).
    pub descriptive_global: DescriptiveStats,
    pub histogram: Vec<HistogramBucket>,
    pub capability: CapabilityRecord,
    /// Classification by Cp.
    pub classification: Classification,
    /// Histogram bars with the scaled normal curve.
    pub chart: Vec<ChartPoint>,
    /// LSL, USL, nominal and mean markers on the chart.
    pub markers: Vec<ReferenceMarker>,
    /// Display decimals.
    pub precision: u32,
}

/// Parses `text` and analyzes the resulting sample.
pub fn analyze(text: &str, options: &AnalysisOptions) -> Analysis {
    analyze_sample(parse_sample(text), options)
}

/// Analyzes an already parsed sample. Non-finite values are dropped.
pub fn analyze_sample(mut sample: Vec<f64>, options: &AnalysisOptions) -> Analysis {
    sample.retain(|v| v.is_finite());

    let limits = options.limits();
    let descriptive = compute_descriptive(&sample, options.variance_mode);
    let descriptive_global = compute_descriptive(&sample, VarianceMode::Population);
    let histogram = compute_histogram(&sample, options.bucket_count);

    let capability = compute_capability(&descriptive, &descriptive_global, &limits, None);
    let classification = classify(capability.cp);

    let chart = project_chart_series(&histogram, descriptive.mean, descriptive.std_dev);
    let markers = reference_markers(&chart, &limits, descriptive.mean);

    debug!(
        n = sample.len(),
        mean = descriptive.mean.value(),
        sigma = descriptive.std_dev.value(),
        cp = capability.cp.value(),
        class = classification.class_label,
        "analyzed sample"
    );

    Analysis {
        sample,
        limits,
        descriptive,
        descriptive_global,
        histogram,
        capability,
        classification,
        chart,
        markers,
        precision: options.precision,
    }
}

impl Analysis {
    /// The sample in ascending order, rounded for display.
    pub fn sorted_for_display(&self) -> Vec<f64> {
        self.descriptive
            .sorted
            .iter()
            .map(|&v| round_to(v, self.precision))
            .collect()
    }

    /// One-line summary with values rounded to `precision`.
    pub fn summary(&self) -> String {
        let p = self.precision as usize;
        let cap = &self.capability;
        format!(
            "n={}, mean={:.p$}, sigma={:.p$}, Cp={:.p$}, Cpk={:.p$}, Pp={:.p$}, Ppk={:.p$}, class={} ({})",
            self.descriptive.count,
            cap.mean,
            cap.sigma,
            cap.cp,
            cap.cpk,
            cap.pp,
            cap.ppk,
            self.classification.class_label,
            self.classification.decision_text,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CapabilityClass;
    use crate::measure::Measure;

    #[test]
    fn empty_text_degrades_gracefully() {
        let analysis = analyze("no numbers here", &AnalysisOptions::with_tolerance(50.0, 10.0));
        assert!(analysis.sample.is_empty());
        assert!(analysis.histogram.is_empty());
        assert!(analysis.chart.is_empty());
        assert!(analysis.markers.is_empty());
        assert_eq!(analysis.descriptive.mode, None);
        assert_eq!(analysis.capability.cp, Measure::NotComputable);
        assert_eq!(analysis.classification.class, CapabilityClass::Undetermined);
        assert_eq!(analysis.capability.lower, Measure::Computed(45.0));
    }

    #[test]
    fn population_option_drives_short_term_sigma() {
        let text = "48 50 51 49 52 50 53 47 50 51";
        let mut options = AnalysisOptions::with_tolerance(50.0, 10.0);
        options.variance_mode = VarianceMode::Population;
        let analysis = analyze(text, &options);
        assert_eq!(analysis.capability.cp, analysis.capability.pp);
        assert_eq!(analysis.descriptive.variance_mode, VarianceMode::Population);
        assert_eq!(analysis.descriptive_global.variance_mode, VarianceMode::Population);
    }

    #[test]
    fn bucket_count_option_is_honored() {
        let mut options = AnalysisOptions::default();
        options.bucket_count = Some(3);
        let analysis = analyze("1 2 3 4 5 6", &options);
        assert_eq!(analysis.histogram.len(), 3);
        assert_eq!(analysis.chart.len(), 3);
    }

    #[test]
    fn identical_values_have_histogram_but_no_chart() {
        let analysis = analyze(&"10 ".repeat(10), &AnalysisOptions::with_tolerance(10.0, 2.0));
        assert_eq!(analysis.histogram.len(), 5);
        assert!(analysis.chart.is_empty());
        assert_eq!(analysis.capability.cp, Measure::NotComputable);
        assert_eq!(analysis.classification.decision_text, "insufficient information");
    }

    #[test]
    fn analyze_sample_drops_non_finite() {
        let analysis = analyze_sample(vec![1.0, f64::NAN, 2.0, f64::INFINITY], &AnalysisOptions::default());
        assert_eq!(analysis.sample, vec![1.0, 2.0]);
    }

    #[test]
    fn sorted_display_is_rounded() {
        let mut options = AnalysisOptions::default();
        options.precision = 2;
        let analysis = analyze("3.14159 1.005 2.71828", &options);
        assert_eq!(analysis.sorted_for_display(), vec![1.0, 2.72, 3.14]);
        // Stored precision is untouched.
        assert_eq!(analysis.descriptive.sorted[2], 3.14159);
    }

    #[test]
    fn summary_uses_precision_and_dash() {
        let analysis = analyze("1 2 3", &AnalysisOptions::default());
        let summary = analysis.summary();
        assert!(summary.starts_with("n=3, mean=2.0000, sigma=1.0000, Cp=—"), "{summary}");
        assert!(summary.ends_with("class=— (insufficient information)"), "{summary}");
    }
}
