//! Error types for histogram rendering
//!
//! Provides a unified error type for all termhist crates.

use thiserror::Error;

/// Core error type for termhist operations
#[derive(Error, Debug)]
pub enum Error {
    /// The histogram has no bins at all
    #[error("Empty histogram: at least one bin is required")]
    EmptyHistogram,

    /// Every bin count is zero, so no bar can be scaled
    #[error("Degenerate histogram: all {bins} bins have a zero count")]
    DegenerateHistogram { bins: usize },

    /// Display configuration outside its valid domain
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// IO error (the output sink failed)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a configuration field outside its domain
    pub fn invalid_config(field: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidConfig(format!("{field} {reason}"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidParameter(format!("{context} contains NaN or infinite values"))
    }
}
