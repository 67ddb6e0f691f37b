//! Defect-rate and sigma-level conversions.
//!
//! Expected PPM comes from the normal model tails beyond each specification
//! limit; observed PPM counts actual out-of-spec measurements. The two can
//! diverge when the data are not normal, so both are reported.
//!
//! # Convention
//!
//! The short-term sigma level is `Z_min`. The long-term level adds the
//! conventional 1.5σ shift of the Motorola Six Sigma methodology.
//!
//! # References
//!
//! - Harry & Schroeder (2000), *Six Sigma: The Breakthrough Management
//!   Strategy Revolutionizing the World's Top Corporations*.

use crate::normal::upper_tail;

/// Conventional long-term drift of the process mean, in σ units.
pub const LONG_TERM_SHIFT: f64 = 1.5;

/// Parts per million.
pub const PPM: f64 = 1_000_000.0;

/// Expected two-sided defect rate for the given Z-scores:
/// `((1 − Φ(Z_USL)) + (1 − Φ(Z_LSL))) × 10⁶`.
///
/// # Examples
///
/// ```
/// use sigmax::capability::two_sided_ppm;
///
/// // ±3σ => ~2,700 PPM
/// let ppm = two_sided_ppm(3.0, 3.0);
/// assert!((ppm - 2_699.8).abs() < 1.0);
/// ```
pub fn two_sided_ppm(z_usl: f64, z_lsl: f64) -> f64 {
    (upper_tail(z_usl) + upper_tail(z_lsl)) * PPM
}

/// Percentage of conforming parts for a defect rate in PPM.
pub fn yield_percent(ppm: f64) -> f64 {
    100.0 * (1.0 - ppm / PPM)
}

/// Empirical defect rate. `None` for an empty sample.
pub fn observed_ppm(out_of_spec: usize, n: usize) -> Option<f64> {
    (n > 0).then(|| out_of_spec as f64 / n as f64 * PPM)
}

/// Long-term sigma level from the short-term `Z_min`.
pub fn shifted_sigma_level(z_min: f64) -> f64 {
    z_min + LONG_TERM_SHIFT
}
