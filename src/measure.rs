//! Explicit "computed or not" scalar used by every derived statistic.
//!
//! A formula whose preconditions fail (empty sample, zero dispersion, missing
//! specification limit) yields [`Measure::NotComputable`] instead of a NaN or
//! an infinity. `Computed` values are always finite.

use serde::{Deserialize, Serialize};

/// A derived scalar that is either a finite number or explicitly absent.
///
/// # Examples
///
/// ```
/// use sigmax::measure::Measure;
///
/// assert_eq!(Measure::from_f64(1.5), Measure::Computed(1.5));
/// assert_eq!(Measure::from_f64(f64::NAN), Measure::NotComputable);
/// assert_eq!(Measure::from_f64(1.0 / 0.0), Measure::NotComputable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Measure {
    /// A finite computed value.
    Computed(f64),
    /// A precondition of the formula did not hold.
    #[default]
    NotComputable,
}

impl Measure {
    /// Wraps `value`, mapping NaN and infinities to `NotComputable`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() {
            Self::Computed(value)
        } else {
            Self::NotComputable
        }
    }

    /// Wraps an optional raw value.
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Self::NotComputable, Self::from_f64)
    }

    /// Returns the value if computed.
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Computed(v) => Some(v),
            Self::NotComputable => None,
        }
    }

    pub fn is_computed(self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// Applies `f` to a computed value; the result is re-checked for finiteness.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Self::Computed(v) => Self::from_f64(f(v)),
            Self::NotComputable => Self::NotComputable,
        }
    }

    /// Chains a computation that may itself be not computable.
    pub fn and_then(self, f: impl FnOnce(f64) -> Measure) -> Self {
        match self {
            Self::Computed(v) => f(v),
            Self::NotComputable => Self::NotComputable,
        }
    }

    /// Keeps a computed value only when `predicate` holds.
    pub fn filter(self, predicate: impl FnOnce(f64) -> bool) -> Self {
        match self {
            Self::Computed(v) if predicate(v) => self,
            _ => Self::NotComputable,
        }
    }

    /// Combines two measures; not computable if either side is.
    pub fn zip_with(self, other: Measure, f: impl FnOnce(f64, f64) -> f64) -> Self {
        match (self, other) {
            (Self::Computed(a), Self::Computed(b)) => Self::from_f64(f(a, b)),
            _ => Self::NotComputable,
        }
    }

    /// Smaller of two measures, requiring both.
    pub fn min(self, other: Measure) -> Self {
        self.zip_with(other, f64::min)
    }

    /// Rounds a computed value for display. Stored precision is untouched.
    pub fn rounded(self, places: u32) -> Self {
        self.map(|v| round_to(v, places))
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<Option<f64>> for Measure {
    fn from(value: Option<f64>) -> Self {
        Self::from_option(value)
    }
}

impl std::fmt::Display for Measure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Computed(v) => match f.precision() {
                Some(p) => write!(f, "{v:.p$}"),
                None => write!(f, "{v}"),
            },
            Self::NotComputable => f.write_str("—"),
        }
    }
}

/// Rounds half away from zero to `places` decimal places.
///
/// Non-finite inputs are returned unchanged.
///
/// # Examples
///
/// ```
/// use sigmax::measure::round_to;
///
/// assert_eq!(round_to(0.930_081_664_7, 4), 0.9301);
/// assert_eq!(round_to(99.466_229, 2), 99.47);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places as i32);
    let scaled = (value * factor).round() / factor;
    if scaled.is_finite() {
        scaled
    } else {
        value
    }
}
