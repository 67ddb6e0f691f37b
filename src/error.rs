//! Error types.
//!
//! The numeric core is total and never returns an error; only loading and
//! validating [`AnalysisOptions`](crate::config::AnalysisOptions) can fail.

use thiserror::Error;

/// Error type for configuration handling.
#[derive(Debug, Error)]
pub enum SigmaxError {
    /// Reading or writing a configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML or does not match the schema.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A configured value is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used by the configuration API.
pub type Result<T> = std::result::Result<T, SigmaxError>;
