//! Analysis options and their TOML representation.
//!
//! ```toml
//! variance_mode = "sample"   # or "population"
//! nominal = 50.0
//! tolerance = 10.0           # total width; LSL = nominal - tolerance / 2
//! # lower_limit = 45.0       # used when nominal/tolerance do not give both
//! # upper_limit = 55.0
//! # bucket_count = 8         # Sturges' rule when absent
//! precision = 4              # display decimals
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::capability::SpecificationLimits;
use crate::descriptive::VarianceMode;
use crate::error::{Result, SigmaxError};

/// Default number of decimals for displayed values.
pub const DEFAULT_PRECISION: u32 = 4;

/// Largest accepted display precision; `f64` carries about 15–17 digits.
pub const MAX_PRECISION: u32 = 15;

/// Inputs to [`analyze`](crate::analysis::analyze) other than the sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisOptions {
    /// Divisor for the short-term sigma.
    pub variance_mode: VarianceMode,
    /// Histogram bucket count; Sturges' rule when `None`.
    pub bucket_count: Option<usize>,
    /// Nominal value `T`.
    pub nominal: Option<f64>,
    /// Total bilateral tolerance around `nominal`.
    pub tolerance: Option<f64>,
    /// Explicit LSL.
    pub lower_limit: Option<f64>,
    /// Explicit USL.
    pub upper_limit: Option<f64>,
    /// Decimals used when rounding for display.
    pub precision: u32,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            variance_mode: VarianceMode::Sample,
            bucket_count: None,
            nominal: None,
            tolerance: None,
            lower_limit: None,
            upper_limit: None,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl AnalysisOptions {
    /// Options for a nominal value and total tolerance.
    pub fn with_tolerance(nominal: f64, tolerance: f64) -> Self {
        Self {
            nominal: Some(nominal),
            tolerance: Some(tolerance),
            ..Self::default()
        }
    }

    /// Options for directly supplied limits.
    pub fn with_limits(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            lower_limit: lower,
            upper_limit: upper,
            ..Self::default()
        }
    }

    /// Specification limits implied by these options.
    ///
    /// Nominal and tolerance take precedence; explicit limits are used when
    /// the pair does not yield both limits.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigmax::config::AnalysisOptions;
    ///
    /// let limits = AnalysisOptions::with_tolerance(50.0, 10.0).limits();
    /// assert_eq!(limits.both(), Some((45.0, 55.0)));
    ///
    /// let limits = AnalysisOptions::with_limits(Some(1.0), Some(2.0)).limits();
    /// assert_eq!(limits.both(), Some((1.0, 2.0)));
    /// ```
    pub fn limits(&self) -> SpecificationLimits {
        if let (Some(nominal), Some(tolerance)) = (self.nominal, self.tolerance) {
            let derived = SpecificationLimits::from_tolerance(nominal, tolerance);
            if derived.both().is_some() {
                return derived;
            }
        }
        let explicit = SpecificationLimits::new(self.lower_limit, self.upper_limit);
        match self.nominal {
            Some(nominal) => explicit.with_nominal(nominal),
            None => explicit,
        }
    }

    /// Checks that every configured value is usable.
    ///
    /// Inverted limits are accepted (and logged); they are a caller concern,
    /// not a configuration error.
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(SigmaxError::InvalidInput(format!(
                "precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            )));
        }
        if self.bucket_count == Some(0) {
            return Err(SigmaxError::InvalidInput(
                "bucket_count must be at least 1".into(),
            ));
        }
        for (name, value) in [
            ("nominal", self.nominal),
            ("tolerance", self.tolerance),
            ("lower_limit", self.lower_limit),
            ("upper_limit", self.upper_limit),
        ] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(SigmaxError::InvalidInput(format!(
                        "{name} must be finite, got {v}"
                    )));
                }
            }
        }

        let limits = self.limits();
        if limits.is_inverted() {
            warn!(
                lower = limits.lower,
                upper = limits.upper,
                "specification limits are inverted; indices will be negative"
            );
        }
        Ok(())
    }

    /// Parses and validates options from a TOML string. Missing keys take
    /// their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let options: Self = toml::from_str(toml_str)?;
        options.validate()?;
        Ok(options)
    }

    /// Serializes the options to TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads and validates options from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}
