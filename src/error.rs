//! Error types for daisyworld.
//!
//! Stepping the model never fails; the only fallible surface is building a
//! configuration, so everything here describes a rejected parameter.

use thiserror::Error;

/// Reasons a [`crate::config::DaisyworldConfig`] is rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} band is inverted: min {min} > max {max}")]
    InvalidBand {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("ocean ratio {ocean} and land ratio {land} must sum to 1")]
    RatioMismatch {
        ocean: f64,
        land: f64,
    },

    #[error("{field} must be positive, got {value}")]
    NonPositive {
        field: &'static str,
        value: f64,
    },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
