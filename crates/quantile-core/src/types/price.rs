//! Historical price series and live quote snapshots.

use crate::error::{CoreError, CoreResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single dated price observation: adjusted close per ticker.
///
/// Tickers may be absent from an observation (the data collaborator does
/// not guarantee full coverage); absent and non-finite cells are treated as
/// missing by the analytics layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation date.
    pub date: NaiveDate,
    /// Adjusted close price per ticker.
    pub prices: HashMap<String, f64>,
}

impl PricePoint {
    /// Creates a new price observation.
    #[must_use]
    pub fn new(date: NaiveDate, prices: HashMap<String, f64>) -> Self {
        Self { date, prices }
    }
}

/// An ordered history of price observations with an explicit column order.
///
/// Observations are strictly ascending by date. The ticker order is the
/// column order of the collaborator-supplied matrix and is what ranking
/// tie-breaks and effective-weight derivations iterate in.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use quantile_core::PriceHistory;
///
/// let history = PriceHistory::from_columns(
///     vec![
///         NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
///         NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
///     ],
///     vec![("AAPL".to_string(), vec![100.0, 102.0])],
/// )
/// .unwrap();
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.price(1, "AAPL"), Some(102.0));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceHistory {
    tickers: Vec<String>,
    observations: Vec<PricePoint>,
}

impl PriceHistory {
    /// Creates a price history from ordered observations.
    ///
    /// # Errors
    ///
    /// Returns an error if a ticker is empty or duplicated, or if the
    /// observations are not strictly ascending by date.
    pub fn new(tickers: Vec<String>, observations: Vec<PricePoint>) -> CoreResult<Self> {
        validate_tickers(&tickers)?;

        for (index, window) in observations.windows(2).enumerate() {
            if window[1].date <= window[0].date {
                return Err(CoreError::UnsortedObservations {
                    index: index + 1,
                    date: window[1].date.to_string(),
                    previous: window[0].date.to_string(),
                });
            }
        }

        Ok(Self {
            tickers,
            observations,
        })
    }

    /// Creates a history with the given column order and no observations.
    pub fn empty(tickers: Vec<String>) -> CoreResult<Self> {
        Self::new(tickers, Vec::new())
    }

    /// Creates a price history from parallel per-ticker columns.
    ///
    /// Every column must have one value per date; use [`PriceHistory::new`]
    /// with explicit observations when coverage is ragged.
    pub fn from_columns(
        dates: Vec<NaiveDate>,
        columns: Vec<(String, Vec<f64>)>,
    ) -> CoreResult<Self> {
        for (ticker, values) in &columns {
            if values.len() != dates.len() {
                return Err(CoreError::LengthMismatch {
                    ticker: ticker.clone(),
                    expected: dates.len(),
                    actual: values.len(),
                });
            }
        }

        let tickers: Vec<String> = columns.iter().map(|(t, _)| t.clone()).collect();
        let observations = dates
            .into_iter()
            .enumerate()
            .map(|(row, date)| {
                let prices = columns
                    .iter()
                    .map(|(ticker, values)| (ticker.clone(), values[row]))
                    .collect();
                PricePoint::new(date, prices)
            })
            .collect();

        Self::new(tickers, observations)
    }

    /// Returns the ticker symbols in column order.
    #[must_use]
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Returns the ordered observations.
    #[must_use]
    pub fn observations(&self) -> &[PricePoint] {
        &self.observations
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Returns true if there are no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Returns the price of `ticker` at observation `index`.
    ///
    /// Absent and non-finite cells both read as `None`.
    #[must_use]
    pub fn price(&self, index: usize, ticker: &str) -> Option<f64> {
        self.observations
            .get(index)?
            .prices
            .get(ticker)
            .copied()
            .filter(|p| p.is_finite())
    }

    /// Returns true if `ticker` is one of the history's columns.
    #[must_use]
    pub fn has_ticker(&self, ticker: &str) -> bool {
        self.tickers.iter().any(|t| t == ticker)
    }
}

/// A snapshot of live quotes: last price and day-over-day percent change
/// per ticker, stamped with the retrieval time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveQuotes {
    /// Last traded price per ticker.
    pub prices: HashMap<String, f64>,
    /// Percent change on the day per ticker (e.g. -2.5 for a 2.5% drop).
    pub changes: HashMap<String, f64>,
    /// Retrieval timestamp, RFC 3339.
    pub timestamp: String,
}

impl LiveQuotes {
    /// Creates a new live quote snapshot.
    #[must_use]
    pub fn new(
        prices: HashMap<String, f64>,
        changes: HashMap<String, f64>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            prices,
            changes,
            timestamp: timestamp.into(),
        }
    }
}

fn validate_tickers(tickers: &[String]) -> CoreResult<()> {
    for (i, ticker) in tickers.iter().enumerate() {
        if ticker.is_empty() {
            return Err(CoreError::EmptyTicker);
        }
        if tickers[..i].contains(ticker) {
            return Err(CoreError::duplicate_ticker(ticker.clone()));
        }
    }
    Ok(())
}
