//! Error types for market data retrieval.

use quantile_core::CoreError;
use thiserror::Error;

/// A specialized Result type for data operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while retrieving or parsing market data.
#[derive(Error, Debug)]
pub enum DataError {
    /// I/O failure while reading a data file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A date cell failed to parse.
    #[error("Invalid date '{value}' at row {row}")]
    InvalidDate {
        /// Data row (0-based, excluding the header).
        row: usize,
        /// The unparseable cell content.
        value: String,
    },

    /// A price cell failed to parse.
    #[error("Invalid price '{value}' for {ticker} at row {row}")]
    InvalidPrice {
        /// Data row (0-based, excluding the header).
        row: usize,
        /// The ticker column the cell belongs to.
        ticker: String,
        /// The unparseable cell content.
        value: String,
    },

    /// The provider has no data for any requested ticker.
    #[error("Provider '{provider}' has no data for the requested tickers")]
    NoData {
        /// The provider that came up empty.
        provider: String,
    },

    /// The retrieved data failed domain validation.
    #[error(transparent)]
    InvalidHistory(#[from] CoreError),
}

impl DataError {
    /// Creates a no-data error.
    #[must_use]
    pub fn no_data(provider: impl Into<String>) -> Self {
        Self::NoData {
            provider: provider.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(row: usize, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            row,
            value: value.into(),
        }
    }

    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(row: usize, ticker: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidPrice {
            row,
            ticker: ticker.into(),
            value: value.into(),
        }
    }
}
