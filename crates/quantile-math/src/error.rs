//! Error types for statistical operations.

use thiserror::Error;

/// A specialized Result type for statistical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during statistical operations.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// Insufficient data points for the estimator.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// A probability or percentile was outside its valid range.
    #[error("Invalid probability: {value} is outside [{min}, {max}]")]
    InvalidProbability {
        /// The offending value.
        value: f64,
        /// Lower bound of the valid range.
        min: f64,
        /// Upper bound of the valid range.
        max: f64,
    },

    /// Matrix dimensions are incompatible.
    #[error("Incompatible dimensions: {rows}x{cols}")]
    DimensionMismatch {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an invalid probability error.
    #[must_use]
    pub fn invalid_probability(value: f64, min: f64, max: f64) -> Self {
        Self::InvalidProbability { value, min, max }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::insufficient_data(2, 1);
        assert!(err.to_string().contains("at least 2"));

        let err = MathError::invalid_probability(1.5, 0.0, 1.0);
        assert!(err.to_string().contains("1.5"));
    }
}
