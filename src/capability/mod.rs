//! Process capability analysis.
//!
//! Computes capability indices for assessing how well a process meets its
//! specification limits, together with Z-scores, defect rates and a
//! classification decision.
//!
//! # Indices
//!
//! - **Cp**, **Cpi**, **Cps**, **Cpk** — Short-term capability (spread, and
//!   spread with centering)
//! - **Cpm** — Taguchi capability (target deviation)
//! - **Cr**, **K** — Capability ratio and decentralization
//! - **Pp**, **Ppi**, **Pps**, **Ppk** — Long-term performance indices
//!
//! # Defect rates
//!
//! - [`two_sided_ppm`] — Expected PPM from the normal model
//! - [`observed_ppm`] — Empirical PPM from the sample
//!
//! # References
//!
//! - Montgomery (2019), *Introduction to Statistical Quality Control*, 8th ed.

mod classification;
mod indices;
mod limits;
mod sigma_level;

pub use classification::{
    classify, CapabilityClass, Classification, CLASS_1_CP, CLASS_2_CP, CLASS_3_CP,
    WORLD_CLASS_CP,
};
pub use indices::{compute_capability, CapabilityRecord};
pub use limits::SpecificationLimits;
pub use sigma_level::{
    observed_ppm, shifted_sigma_level, two_sided_ppm, yield_percent, LONG_TERM_SHIFT, PPM,
};
