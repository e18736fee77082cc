//! Workspace error type.
//!
//! Sub-crates define their own error enums and either wrap `AggError` as one
//! variant or convert into it via `From`.

use thiserror::Error;

/// The top-level error type for `agg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum AggError {
    /// A configuration value is out of range.  Raised before any tick runs.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No seed was configured and the OS entropy source could not be read.
    #[error("randomness source unavailable: {0}")]
    RngUnavailable(String),
}

/// Shorthand result type for all `agg-*` crates.
pub type AggResult<T> = Result<T, AggError>;
