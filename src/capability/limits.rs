//! Specification limits (LSL, USL) and nominal target.

use serde::{Deserialize, Serialize};

use crate::measure::Measure;

/// Lower/upper specification limits and an optional nominal value.
///
/// Limits are not validated: an inverted pair (`lower > upper`) is accepted
/// and flows into every index as a negative tolerance width. Non-finite
/// inputs are stored as absent.
///
/// # Examples
///
/// ```
/// use sigmax::capability::SpecificationLimits;
///
/// // Nominal 50 with a total tolerance of 10 => [45, 55].
/// let limits = SpecificationLimits::from_tolerance(50.0, 10.0);
/// assert_eq!(limits.lower, Some(45.0));
/// assert_eq!(limits.upper, Some(55.0));
/// assert_eq!(limits.nominal, Some(50.0));
///
/// // Directly supplied limits, target defaults to the midpoint.
/// let limits = SpecificationLimits::new(Some(9.0), Some(11.0));
/// assert_eq!(limits.target(None).value(), Some(10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecificationLimits {
    /// Lower specification limit (LSL).
    pub lower: Option<f64>,
    /// Upper specification limit (USL).
    pub upper: Option<f64>,
    /// Nominal (target) value `T`.
    pub nominal: Option<f64>,
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

impl SpecificationLimits {
    /// Limits supplied directly, without a nominal value.
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            lower: finite(lower),
            upper: finite(upper),
            nominal: None,
        }
    }

    /// Limits derived from a nominal value and a total (bilateral) tolerance:
    /// `LSL = T − tol/2`, `USL = T + tol/2`.
    ///
    /// A negative tolerance produces inverted limits. A non-finite tolerance
    /// leaves both limits absent while keeping the nominal.
    pub fn from_tolerance(nominal: f64, tolerance: f64) -> Self {
        let nominal = finite(Some(nominal));
        let half = finite(Some(tolerance)).map(|tol| tol / 2.0);
        match (nominal, half) {
            (Some(t), Some(h)) => Self {
                lower: finite(Some(t - h)),
                upper: finite(Some(t + h)),
                nominal,
            },
            _ => Self {
                lower: None,
                upper: None,
                nominal,
            },
        }
    }

    /// Sets the nominal value.
    pub fn with_nominal(mut self, nominal: f64) -> Self {
        self.nominal = finite(Some(nominal));
        self
    }

    /// Both limits as `(lower, upper)`, if present.
    pub fn both(&self) -> Option<(f64, f64)> {
        Some((self.lower?, self.upper?))
    }

    /// `USL − LSL`. Negative for inverted limits.
    pub fn width(&self) -> Measure {
        Measure::from_option(self.both().map(|(l, u)| u - l))
    }

    pub fn midpoint(&self) -> Measure {
        Measure::from_option(self.both().map(|(l, u)| (l + u) / 2.0))
    }

    /// `true` when both limits are present and `lower > upper`.
    pub fn is_inverted(&self) -> bool {
        self.both().is_some_and(|(l, u)| l > u)
    }

    /// `true` when no limit is present.
    pub fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    /// Target used by Cpm and K: `nominal` override, else the stored nominal,
    /// else the midpoint of the limits.
    pub fn target(&self, nominal: Option<f64>) -> Measure {
        match finite(nominal).or(self.nominal) {
            Some(t) => Measure::Computed(t),
            None => self.midpoint(),
        }
    }

    /// `true` when `x` falls below LSL or above USL. A missing limit bounds
    /// nothing on its side.
    pub fn is_out_of_spec(&self, x: f64) -> bool {
        self.lower.is_some_and(|l| x < l) || self.upper.is_some_and(|u| x > u)
    }
}
