//! Portfolio definition: nominal weights and share counts per ticker.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single portfolio position.
///
/// `weight` is the nominal input weight: the set of weights is not
/// guaranteed to sum to 1, nor to cover every ticker the price data has;
/// the analytics layer renormalizes over the tickers actually present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Nominal portfolio weight, ≥ 0.
    pub weight: f64,
    /// Number of shares held, ≥ 0 (fractional for crypto).
    pub shares: f64,
}

/// A portfolio: ticker → position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    positions: HashMap<String, Position>,
}

impl Portfolio {
    /// Starts building a portfolio.
    #[must_use]
    pub fn builder() -> PortfolioBuilder {
        PortfolioBuilder::default()
    }

    /// Creates a portfolio from (ticker, weight) pairs with zero shares.
    ///
    /// Convenience for weight-only analytics.
    pub fn from_weights<I, S>(weights: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut builder = Self::builder();
        for (ticker, weight) in weights {
            builder = builder.position(ticker, weight, 0.0);
        }
        builder.build()
    }

    /// Returns the position for `ticker`, if held.
    #[must_use]
    pub fn position(&self, ticker: &str) -> Option<&Position> {
        self.positions.get(ticker)
    }

    /// Returns the nominal weight for `ticker`, if held.
    #[must_use]
    pub fn weight(&self, ticker: &str) -> Option<f64> {
        self.positions.get(ticker).map(|p| p.weight)
    }

    /// Returns true if the portfolio holds `ticker`.
    #[must_use]
    pub fn contains(&self, ticker: &str) -> bool {
        self.positions.contains_key(ticker)
    }

    /// Iterates over (ticker, position) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Position)> {
        self.positions.iter().map(|(t, p)| (t.as_str(), p))
    }

    /// Returns the held tickers in unspecified order.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }

    /// Returns the number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the portfolio has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Builder for [`Portfolio`] with weight/share validation.
///
/// # Example
///
/// ```rust
/// use quantile_core::Portfolio;
///
/// let portfolio = Portfolio::builder()
///     .position("AAPL", 0.20, 100.0)
///     .position("MSFT", 0.15, 50.0)
///     .position("BTC-USD", 0.05, 0.5)
///     .build()
///     .unwrap();
///
/// assert_eq!(portfolio.len(), 3);
/// assert_eq!(portfolio.weight("AAPL"), Some(0.20));
/// ```
#[derive(Debug, Default)]
pub struct PortfolioBuilder {
    positions: Vec<(String, Position)>,
}

impl PortfolioBuilder {
    /// Adds a position. Later entries for the same ticker replace earlier
    /// ones.
    #[must_use]
    pub fn position(mut self, ticker: impl Into<String>, weight: f64, shares: f64) -> Self {
        self.positions
            .push((ticker.into(), Position { weight, shares }));
        self
    }

    /// Validates and builds the portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty ticker, a negative or non-finite
    /// weight, or a negative or non-finite share count.
    pub fn build(self) -> CoreResult<Portfolio> {
        let mut positions = HashMap::with_capacity(self.positions.len());
        for (ticker, position) in self.positions {
            if ticker.is_empty() {
                return Err(CoreError::EmptyTicker);
            }
            if !position.weight.is_finite() || position.weight < 0.0 {
                return Err(CoreError::invalid_weight(ticker, position.weight));
            }
            if !position.shares.is_finite() || position.shares < 0.0 {
                return Err(CoreError::invalid_shares(ticker, position.shares));
            }
            positions.insert(ticker, position);
        }
        Ok(Portfolio { positions })
    }
}
