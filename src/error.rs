//! Error types for the pricing core.
//!
//! The pricer validates its inputs eagerly and rejects with a descriptive
//! message instead of letting the arithmetic produce NaN/Infinity silently.

use thiserror::Error;

/// Convenience type alias for results in the pricing and grid modules.
pub type Result<T> = std::result::Result<T, PricingError>;

/// Errors that can occur while pricing options or evaluating price grids.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PricingError {
    /// Input bundle fails validation (non-positive spot or strike, zero
    /// volatility, zero days to expiry, unsupported option-type string).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Heatmap axis range is malformed (min >= max, non-finite bounds,
    /// fewer than two steps).
    #[error("invalid range: {message}")]
    InvalidRange { message: String },
}

impl PricingError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_range(message: impl Into<String>) -> Self {
        PricingError::InvalidRange {
            message: message.into(),
        }
    }
}
