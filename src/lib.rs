//! # sigmax
//!
//! Process capability (Six Sigma) statistics for a sample of measurements:
//! descriptive statistics, histogram binning, a fitted normal curve, and the
//! capability indices Cp, Cpk, Cpm, Pp and Ppk with Z-scores, PPM, yield and a
//! classification decision.
//!
//! The crate is a pure computation engine. It has no display, storage or I/O
//! beyond optional TOML configuration; a presentation layer calls
//! [`analysis::analyze`] on every input change and renders the returned
//! records.
//!
//! ## Modules
//!
//! - [`parse`] — Finite numbers from free-form delimited text
//! - [`descriptive`] — Mean, variance, standard deviation, median, mode, range
//! - [`distribution`] — Equal-width histogram buckets (Sturges' rule)
//! - [`normal`] — Normal PDF, error-function approximation, standard normal CDF
//! - [`capability`] — Specification limits, capability indices, PPM, classification
//! - [`chart`] — Histogram and normal curve projected onto one axis
//! - [`analysis`] — The full pipeline as one pure function
//! - [`config`] — Analysis options (TOML)
//! - [`measure`] — The `Computed | NotComputable` result type
//!
//! ## Design Philosophy
//!
//! - **Total functions**: every statistic reports
//!   [`Measure::NotComputable`](measure::Measure::NotComputable) instead of
//!   NaN, infinity or a panic when its preconditions fail
//! - **Permissive input**: malformed tokens are skipped, inverted limits are
//!   accepted and produce negative indices
//! - **Stateless**: no caching; identical inputs give identical records

pub mod analysis;
pub mod capability;
pub mod chart;
pub mod config;
pub mod descriptive;
pub mod distribution;
pub mod error;
pub mod measure;
pub mod normal;
pub mod parse;

pub use error::{Result, SigmaxError};
pub use measure::Measure;
