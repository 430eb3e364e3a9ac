//! Error type shared by every fallible constructor in the crate.

use thiserror::Error;

/// Errors raised when a component is constructed with invalid parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvoError {
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    #[error("{name} must be in {range}, got {value}")]
    RateOutOfRange {
        name: &'static str,
        range: &'static str,
        value: f64,
    },

    #[error("bit length must be at least 1, got {0}")]
    InvalidLength(usize),

    #[error("invalid operator parameter: {0}")]
    InvalidOperator(String),
}

pub type Result<T> = std::result::Result<T, EvoError>;
