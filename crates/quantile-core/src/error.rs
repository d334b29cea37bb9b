//! Error types for core domain objects.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while constructing core domain types.
///
/// These are construction-time validation errors only: once a value exists
/// it is well-formed, and the analytics layer never fails on it for
/// data-quality reasons.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// A ticker symbol was empty.
    #[error("Ticker symbol must not be empty")]
    EmptyTicker,

    /// The same ticker appeared more than once.
    #[error("Duplicate ticker '{ticker}'")]
    DuplicateTicker {
        /// The offending ticker symbol.
        ticker: String,
    },

    /// Price observations were not strictly ascending by date.
    #[error("Observations out of order at index {index}: {date} does not follow {previous}")]
    UnsortedObservations {
        /// Index of the offending observation.
        index: usize,
        /// Date at that index.
        date: String,
        /// Date of the preceding observation.
        previous: String,
    },

    /// A portfolio weight was negative or not finite.
    #[error("Invalid weight for '{ticker}': {value}")]
    InvalidWeight {
        /// The ticker the weight belongs to.
        ticker: String,
        /// The invalid weight value.
        value: f64,
    },

    /// A share count was negative or not finite.
    #[error("Invalid share count for '{ticker}': {value}")]
    InvalidShares {
        /// The ticker the share count belongs to.
        ticker: String,
        /// The invalid share count.
        value: f64,
    },

    /// A shock magnitude was not finite.
    #[error("Invalid shock in scenario '{scenario}': {value}")]
    InvalidShock {
        /// The scenario name.
        scenario: String,
        /// The invalid shock value.
        value: f64,
    },

    /// A price column's length did not match the date axis.
    #[error("Column '{ticker}' has {actual} values, expected {expected}")]
    LengthMismatch {
        /// The ticker whose column is mis-sized.
        ticker: String,
        /// Expected number of values (one per date).
        expected: usize,
        /// Actual number of values.
        actual: usize,
    },
}

impl CoreError {
    /// Creates a duplicate ticker error.
    #[must_use]
    pub fn duplicate_ticker(ticker: impl Into<String>) -> Self {
        Self::DuplicateTicker {
            ticker: ticker.into(),
        }
    }

    /// Creates an invalid weight error.
    #[must_use]
    pub fn invalid_weight(ticker: impl Into<String>, value: f64) -> Self {
        Self::InvalidWeight {
            ticker: ticker.into(),
            value,
        }
    }

    /// Creates an invalid shares error.
    #[must_use]
    pub fn invalid_shares(ticker: impl Into<String>, value: f64) -> Self {
        Self::InvalidShares {
            ticker: ticker.into(),
            value,
        }
    }
}
