//! Return matrices, effective weights, and portfolio return series.
//!
//! This module owns the single derivation of the effective ticker set and
//! its renormalized weights; every downstream component (VaR, decomposition,
//! stress) goes through it rather than re-implementing the guard logic.

use chrono::NaiveDate;
use nalgebra::DMatrix;
use quantile_core::{Portfolio, PriceHistory};

/// A dense matrix of simple period returns.
///
/// Derived from a [`PriceHistory`] by `(p[t] − p[t−1]) / p[t−1]` per
/// ticker. The first observation has no predecessor and is dropped; a row
/// where any ticker's return is undefined (missing, non-finite, or zero
/// prior price) is dropped entirely, so every stored cell is defined.
#[derive(Debug, Clone)]
pub struct ReturnsMatrix {
    tickers: Vec<String>,
    dates: Vec<NaiveDate>,
    values: DMatrix<f64>,
}

impl ReturnsMatrix {
    pub(crate) fn from_parts(
        tickers: Vec<String>,
        dates: Vec<NaiveDate>,
        values: DMatrix<f64>,
    ) -> Self {
        Self {
            tickers,
            dates,
            values,
        }
    }

    /// Returns the ticker symbols in column order.
    #[must_use]
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Returns the observation dates, one per row.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the dense return values (rows = dates, columns = tickers).
    #[must_use]
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Returns the number of return rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no return rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the column index of `ticker`.
    #[must_use]
    pub fn ticker_index(&self, ticker: &str) -> Option<usize> {
        self.tickers.iter().position(|t| t == ticker)
    }
}

/// Derives the return matrix from a price history.
///
/// A single-row (or empty) history produces an empty matrix, not an error.
#[must_use]
pub fn calculate_returns(prices: &PriceHistory) -> ReturnsMatrix {
    let tickers = prices.tickers().to_vec();
    let k = tickers.len();

    let mut dates = Vec::new();
    let mut rows: Vec<f64> = Vec::new();

    if k > 0 {
        for t in 1..prices.len() {
            let mut row = Vec::with_capacity(k);
            for ticker in &tickers {
                match (prices.price(t - 1, ticker), prices.price(t, ticker)) {
                    (Some(prev), Some(current)) if prev != 0.0 => {
                        row.push((current - prev) / prev);
                    }
                    _ => break,
                }
            }
            if row.len() == k {
                dates.push(prices.observations()[t].date);
                rows.extend_from_slice(&row);
            }
        }
    }

    let values = DMatrix::from_row_slice(dates.len(), k, &rows);
    ReturnsMatrix::from_parts(tickers, dates, values)
}

/// The effective ticker set and its renormalized weights.
///
/// Tickers are the intersection of the portfolio and the return matrix's
/// columns, in column order. Weights are rescaled to sum to 1; when the
/// selected nominal weights sum to 0 they are left at 0, the documented
/// degenerate case.
#[derive(Debug, Clone)]
pub struct EffectiveWeights {
    /// Effective tickers, in return-matrix column order.
    pub tickers: Vec<String>,
    /// Column index of each effective ticker in the return matrix.
    pub indices: Vec<usize>,
    /// Renormalized weight per effective ticker.
    pub weights: Vec<f64>,
}

impl EffectiveWeights {
    /// Returns true if no portfolio ticker is present in the data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

/// Derives the effective ticker set and weights for a portfolio against a
/// return matrix. This is the single home of the renormalization guard.
#[must_use]
pub fn effective_weights(returns: &ReturnsMatrix, portfolio: &Portfolio) -> EffectiveWeights {
    let mut tickers = Vec::new();
    let mut indices = Vec::new();
    let mut weights = Vec::new();

    for (index, ticker) in returns.tickers().iter().enumerate() {
        if let Some(weight) = portfolio.weight(ticker) {
            tickers.push(ticker.clone());
            indices.push(index);
            weights.push(weight);
        }
    }

    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        for w in &mut weights {
            *w /= total;
        }
    }

    EffectiveWeights {
        tickers,
        indices,
        weights,
    }
}

/// The portfolio's weighted return series, one value per return row.
#[derive(Debug, Clone, Default)]
pub struct PortfolioReturns {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl PortfolioReturns {
    /// Returns the observation dates.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Returns the weighted return values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no observations. Callers must treat this
    /// as "no data", not as a zero return.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Collapses a return matrix into the portfolio's single return series.
///
/// Returns an empty series when no portfolio ticker is present in the
/// matrix.
#[must_use]
pub fn portfolio_returns(returns: &ReturnsMatrix, portfolio: &Portfolio) -> PortfolioReturns {
    let effective = effective_weights(returns, portfolio);
    if effective.is_empty() {
        return PortfolioReturns::default();
    }

    let values = (0..returns.len())
        .map(|row| {
            effective
                .indices
                .iter()
                .zip(&effective.weights)
                .map(|(&col, &w)| w * returns.values()[(row, col)])
                .sum()
        })
        .collect();

    PortfolioReturns {
        dates: returns.dates().to_vec(),
        values,
    }
}

/// Builds the single weighted price series the facade's drawdown runs on.
///
/// Weights renormalize over the portfolio tickers present among the price
/// columns; within each row, missing cells are simply skipped (a row with
/// no priced ticker contributes 0). Returns an empty series when no
/// portfolio ticker is priced at all.
#[must_use]
pub fn weighted_price_series(prices: &PriceHistory, portfolio: &Portfolio) -> Vec<f64> {
    let available: Vec<&String> = prices
        .tickers()
        .iter()
        .filter(|t| portfolio.contains(t))
        .collect();
    if available.is_empty() {
        return Vec::new();
    }

    let mut weights: Vec<f64> = available
        .iter()
        .map(|t| portfolio.weight(t).unwrap_or(0.0))
        .collect();
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        for w in &mut weights {
            *w /= total;
        }
    }

    (0..prices.len())
        .map(|row| {
            available
                .iter()
                .zip(&weights)
                .filter_map(|(ticker, &w)| prices.price(row, ticker).map(|p| w * p))
                .sum()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn history(columns: Vec<(&str, Vec<f64>)>) -> PriceHistory {
        let len = columns.first().map_or(0, |(_, v)| v.len());
        let dates = (0..len as u32).map(|i| date(i + 1)).collect();
        PriceHistory::from_columns(
            dates,
            columns
                .into_iter()
                .map(|(t, v)| (t.to_string(), v))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_simple_returns() {
        let prices = history(vec![("A", vec![100.0, 102.0, 101.0, 105.0, 98.0])]);
        let returns = calculate_returns(&prices);

        assert_eq!(returns.len(), 4);
        let expected = [0.02, -0.009_803_921_568_627_416, 0.039_603_960_396_039_61, -2.0 / 30.0];
        for (i, e) in expected.iter().enumerate() {
            assert!((returns.values()[(i, 0)] - e).abs() < 1e-12);
        }
        assert_eq!(returns.dates()[0], date(2));
    }

    #[test]
    fn test_single_row_yields_empty_matrix() {
        let prices = history(vec![("A", vec![100.0])]);
        let returns = calculate_returns(&prices);
        assert!(returns.is_empty());
        assert_eq!(returns.tickers(), &["A"]);
    }

    #[test]
    fn test_zero_prior_price_drops_row() {
        let prices = history(vec![("A", vec![100.0, 0.0, 105.0, 110.0])]);
        let returns = calculate_returns(&prices);

        // 100 -> 0 is defined (-1.0); 0 -> 105 is undefined; 105 -> 110 kept.
        assert_eq!(returns.len(), 2);
        assert_eq!(returns.values()[(0, 0)], -1.0);
        assert!((returns.values()[(1, 0)] - 5.0 / 105.0).abs() < 1e-12);
    }

    #[test]
    fn test_row_with_any_missing_cell_is_dropped() {
        let prices = history(vec![
            ("A", vec![100.0, 102.0, 104.0]),
            ("B", vec![50.0, f64::NAN, 52.0]),
        ]);
        let returns = calculate_returns(&prices);

        // Both return rows touch B's missing observation.
        assert!(returns.is_empty());
    }

    #[test]
    fn test_effective_weights_renormalize() {
        let prices = history(vec![
            ("A", vec![100.0, 101.0, 102.0]),
            ("B", vec![50.0, 51.0, 52.0]),
        ]);
        let returns = calculate_returns(&prices);
        let portfolio = Portfolio::from_weights([("A", 0.6), ("B", 0.6)]).unwrap();

        let effective = effective_weights(&returns, &portfolio);
        assert_eq!(effective.tickers, vec!["A", "B"]);
        assert!((effective.weights[0] - 0.5).abs() < 1e-9);
        assert!((effective.weights[1] - 0.5).abs() < 1e-9);
        assert!((effective.weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_effective_weights_ignore_unknown_tickers() {
        let prices = history(vec![("A", vec![100.0, 101.0])]);
        let returns = calculate_returns(&prices);
        let portfolio = Portfolio::from_weights([("A", 0.3), ("ZZZ", 0.7)]).unwrap();

        let effective = effective_weights(&returns, &portfolio);
        assert_eq!(effective.tickers, vec!["A"]);
        assert!((effective.weights[0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_effective_weights_zero_sum_stays_zero() {
        let prices = history(vec![("A", vec![100.0, 101.0])]);
        let returns = calculate_returns(&prices);
        let portfolio = Portfolio::from_weights([("A", 0.0)]).unwrap();

        let effective = effective_weights(&returns, &portfolio);
        assert_eq!(effective.weights, vec![0.0]);
    }

    #[test]
    fn test_portfolio_returns_blend() {
        let prices = history(vec![
            ("A", vec![100.0, 110.0]),
            ("B", vec![100.0, 90.0]),
        ]);
        let returns = calculate_returns(&prices);
        let portfolio = Portfolio::from_weights([("A", 0.5), ("B", 0.5)]).unwrap();

        let pr = portfolio_returns(&returns, &portfolio);
        assert_eq!(pr.len(), 1);
        // 0.5 × 0.10 + 0.5 × (−0.10) = 0
        assert!(pr.values()[0].abs() < 1e-12);
    }

    #[test]
    fn test_portfolio_returns_empty_when_no_overlap() {
        let prices = history(vec![("A", vec![100.0, 101.0])]);
        let returns = calculate_returns(&prices);
        let portfolio = Portfolio::from_weights([("ZZZ", 1.0)]).unwrap();

        assert!(portfolio_returns(&returns, &portfolio).is_empty());
    }

    #[test]
    fn test_weighted_price_series() {
        let prices = history(vec![
            ("A", vec![100.0, 110.0]),
            ("B", vec![200.0, 190.0]),
        ]);
        let portfolio = Portfolio::from_weights([("A", 0.5), ("B", 0.5)]).unwrap();

        let series = weighted_price_series(&prices, &portfolio);
        assert_eq!(series, vec![150.0, 150.0]);
    }

    #[test]
    fn test_weighted_price_series_skips_missing_cells() {
        let prices = history(vec![
            ("A", vec![100.0, 110.0]),
            ("B", vec![200.0, f64::NAN]),
        ]);
        let portfolio = Portfolio::from_weights([("A", 0.5), ("B", 0.5)]).unwrap();

        let series = weighted_price_series(&prices, &portfolio);
        assert_eq!(series, vec![150.0, 55.0]);
    }

    #[test]
    fn test_weighted_price_series_empty_without_overlap() {
        let prices = history(vec![("A", vec![100.0, 110.0])]);
        let portfolio = Portfolio::from_weights([("ZZZ", 1.0)]).unwrap();
        assert!(weighted_price_series(&prices, &portfolio).is_empty());
    }
}
