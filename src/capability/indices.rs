//! Process capability and performance indices.
//!
//! Short-term indices (Cp, Cpk, Cpm) use the process sigma in the caller's
//! chosen [`VarianceMode`](crate::descriptive::VarianceMode); long-term
//! indices (Pp, Ppk) always use the population (overall) sigma.
//!
//! Every field of [`CapabilityRecord`] is checked independently: a missing
//! limit or a zero sigma makes the affected fields
//! [`NotComputable`](Measure::NotComputable) and leaves the others intact.
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.,
//!   Chapter 8.
//! - Kane (1986), "Process Capability Indices", *Journal of Quality Technology*
//!   18(1), pp. 41--52.
//! - Chan, Cheng & Spiring (1988), "A New Measure of Process Capability: Cpm",
//!   *Journal of Quality Technology* 20(3), pp. 162--175.

use serde::{Deserialize, Serialize};

use super::limits::SpecificationLimits;
use super::sigma_level::{observed_ppm, shifted_sigma_level, two_sided_ppm, yield_percent};
use crate::descriptive::DescriptiveStats;
use crate::measure::Measure;

/// All capability, performance and defect-rate figures for one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityRecord {
    /// LSL used.
    pub lower: Measure,
    /// USL used.
    pub upper: Measure,
    /// Target used by Cpm and K (explicit nominal, else the limit midpoint).
    pub nominal_used: Measure,
    /// Process mean μ.
    pub mean: Measure,
    /// Short-term sigma (chosen variance mode).
    pub sigma: Measure,
    /// Long-term sigma (population).
    pub sigma_global: Measure,

    /// Cp = (USL − LSL) / 6σ.
    pub cp: Measure,
    /// Cpi = (μ − LSL) / 3σ.
    pub cpi: Measure,
    /// Cps = (USL − μ) / 3σ.
    pub cps: Measure,
    /// Cpk = min(Cpi, Cps).
    pub cpk: Measure,
    /// Cpm = (USL − LSL) / 6·sqrt(σ² + (μ − T)²).
    pub cpm: Measure,
    /// Capability ratio Cr = 1 / Cp.
    pub cr: Measure,
    /// Decentralization K = |μ − T| / ((USL − LSL) / 2).
    pub k: Measure,

    /// Z_USL = (USL − μ) / σ.
    pub z_usl: Measure,
    /// Z_LSL = (μ − LSL) / σ.
    pub z_lsl: Measure,
    /// min(Z_USL, Z_LSL).
    pub z_min: Measure,
    /// Expected defects outside both limits, normal model.
    pub ppm_two_sided: Measure,
    /// 100 · (1 − PPM / 10⁶).
    pub yield_percent: Measure,
    /// Short-term sigma level, Z_min.
    pub sigma_level: Measure,
    /// Long-term sigma level, Z_min + 1.5.
    pub sigma_level_shifted: Measure,

    /// Pp = (USL − LSL) / 6σ_global.
    pub pp: Measure,
    /// Ppi = (μ − LSL) / 3σ_global.
    pub ppi: Measure,
    /// Pps = (USL − μ) / 3σ_global.
    pub pps: Measure,
    /// Ppk = min(Ppi, Pps).
    pub ppk: Measure,

    /// Sample values below LSL or above USL.
    pub out_of_spec: usize,
    /// Share of out-of-spec values, in percent.
    pub out_of_spec_percent: Measure,
    /// Observed defects per million, independent of the normal model.
    pub ppm_observed: Measure,
}

/// Spread indices for one sigma estimate: (P, lower, upper, min).
struct SpreadIndices {
    whole: Measure,
    lower: Measure,
    upper: Measure,
    worst: Measure,
}

impl SpreadIndices {
    fn compute(mu: Measure, sigma: Measure, lsl: Measure, usl: Measure) -> Self {
        let whole = usl
            .zip_with(lsl, |u, l| u - l)
            .zip_with(sigma, |w, s| w / (6.0 * s));
        let lower = mu
            .zip_with(lsl, |m, l| m - l)
            .zip_with(sigma, |d, s| d / (3.0 * s));
        let upper = usl
            .zip_with(mu, |u, m| u - m)
            .zip_with(sigma, |d, s| d / (3.0 * s));
        Self {
            whole,
            lower,
            upper,
            worst: lower.min(upper),
        }
    }
}

/// Derives all capability figures from the descriptive statistics of one
/// sample.
///
/// `stats` supplies μ and the short-term σ (its own variance mode);
/// `stats_global` must describe the same sample in population mode and
/// supplies σ_global. `nominal`, when given, overrides `limits.nominal` as the
/// target for Cpm and K.
///
/// Inverted limits are not rejected; they yield negative widths and indices.
///
/// # Examples
///
/// ```
/// use sigmax::capability::{compute_capability, SpecificationLimits};
/// use sigmax::descriptive::{compute_descriptive, VarianceMode};
///
/// let data = [9.5, 10.0, 10.2, 9.8, 10.1, 10.3, 9.9, 10.0];
/// let stats = compute_descriptive(&data, VarianceMode::Sample);
/// let global = compute_descriptive(&data, VarianceMode::Population);
/// let limits = SpecificationLimits::new(Some(9.0), Some(11.0));
///
/// let record = compute_capability(&stats, &global, &limits, None);
/// let cp = record.cp.value().unwrap();
/// let cpk = record.cpk.value().unwrap();
/// assert!(cp > 1.0);
/// assert!(cpk <= cp);
/// assert_eq!(record.out_of_spec, 0);
/// ```
pub fn compute_capability(
    stats: &DescriptiveStats,
    stats_global: &DescriptiveStats,
    limits: &SpecificationLimits,
    nominal: Option<f64>,
) -> CapabilityRecord {
    let lsl = Measure::from_option(limits.lower);
    let usl = Measure::from_option(limits.upper);
    let target = limits.target(nominal);

    let mu = stats.mean;
    let sigma = stats.std_dev.filter(|s| s > 0.0);
    let sigma_global = stats_global.std_dev.filter(|s| s > 0.0);

    // Short-term indices
    let short = SpreadIndices::compute(mu, sigma, lsl, usl);

    let cpm = usl
        .zip_with(lsl, |u, l| u - l)
        .zip_with(
            sigma.zip_with(mu.zip_with(target, |m, t| m - t), |s, d| (s * s + d * d).sqrt()),
            |w, spread| w / (6.0 * spread),
        );
    let cr = short.whole.filter(|cp| cp > 0.0).map(|cp| 1.0 / cp);

    let half_width = limits.width().map(|w| w / 2.0).filter(|h| h > 0.0);
    let k = mu
        .zip_with(target, |m, t| (m - t).abs())
        .zip_with(half_width, |d, h| d / h);

    // Z-scores and expected defect rate
    let z_usl = usl.zip_with(mu, |u, m| u - m).zip_with(sigma, |d, s| d / s);
    let z_lsl = mu.zip_with(lsl, |m, l| m - l).zip_with(sigma, |d, s| d / s);
    let z_min = z_usl.min(z_lsl);
    let ppm_two_sided = z_usl.zip_with(z_lsl, two_sided_ppm);

    // Long-term indices
    let long = SpreadIndices::compute(mu, sigma_global, lsl, usl);

    // Observed defects
    let n = stats.count;
    let out_of_spec = stats
        .sorted
        .iter()
        .filter(|&&x| limits.is_out_of_spec(x))
        .count();
    let observed = if limits.is_unbounded() {
        None
    } else {
        observed_ppm(out_of_spec, n)
    };

    CapabilityRecord {
        lower: lsl,
        upper: usl,
        nominal_used: target,
        mean: mu,
        sigma: stats.std_dev,
        sigma_global: stats_global.std_dev,
        cp: short.whole,
        cpi: short.lower,
        cps: short.upper,
        cpk: short.worst,
        cpm,
        cr,
        k,
        z_usl,
        z_lsl,
        z_min,
        ppm_two_sided,
        yield_percent: ppm_two_sided.map(yield_percent),
        sigma_level: z_min,
        sigma_level_shifted: z_min.map(shifted_sigma_level),
        pp: long.whole,
        ppi: long.lower,
        pps: long.upper,
        ppk: long.worst,
        out_of_spec,
        out_of_spec_percent: Measure::from_option(observed.map(|ppm| ppm / 10_000.0)),
        ppm_observed: Measure::from_option(observed),
    }
}
