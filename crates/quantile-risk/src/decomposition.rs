//! Covariance-based decomposition of portfolio volatility.

use crate::defaults::{self, DEFAULT_ANNUAL_VOLATILITY, TRADING_DAYS_PER_YEAR};
use crate::returns::{calculate_returns, effective_weights};
use nalgebra::DVector;
use quantile_core::types::{RiskContribution, RiskDecomposition};
use quantile_core::{Analysis, Portfolio, PriceHistory};
use quantile_math::statistics::covariance_matrix;
use std::collections::HashMap;
use tracing::warn;

/// Decomposes portfolio volatility into per-asset marginal, component, and
/// percentage contributions.
///
/// ## Formula
///
/// With annualized covariance Σ and effective weights w:
/// ```text
/// σₚ² = wᵀ·Σ·w          (0.15 fallback when σₚ² ≤ 0)
/// marginalᵢ = (Σ·w)ᵢ / σₚ
/// componentᵢ = wᵢ × marginalᵢ
/// percentageᵢ = componentᵢ / σₚ × 100
/// ```
///
/// Portfolio tickers absent from the data keep their nominal weight with
/// zero contributions. When no portfolio ticker has return data at all,
/// the documented placeholder table is served instead.
#[must_use]
pub fn risk_decomposition(
    prices: &PriceHistory,
    portfolio: &Portfolio,
) -> Analysis<RiskDecomposition> {
    let returns = calculate_returns(prices);
    let effective = effective_weights(&returns, portfolio);
    if effective.is_empty() {
        warn!("risk decomposition: no portfolio tickers in data, serving fallback");
        return Analysis::Insufficient(defaults::fallback_risk_decomposition(portfolio));
    }

    let subset = returns.values().select_columns(&effective.indices);
    let Ok(cov) = covariance_matrix(&subset) else {
        // A single return row: the covariance is undefined, so volatility
        // takes its fallback and every contribution is zero.
        warn!("risk decomposition: insufficient rows for covariance, zeroing contributions");
        let decomposition = assemble(
            portfolio,
            &effective.tickers,
            &effective.weights,
            DEFAULT_ANNUAL_VOLATILITY,
            &vec![0.0; effective.tickers.len()],
        );
        return Analysis::Insufficient(decomposition);
    };
    let cov = cov * TRADING_DAYS_PER_YEAR;

    let w = DVector::from_column_slice(&effective.weights);
    let cov_w = &cov * &w;
    let variance = w.dot(&cov_w);
    let portfolio_vol = if variance > 0.0 {
        variance.sqrt()
    } else {
        DEFAULT_ANNUAL_VOLATILITY
    };
    let marginal: Vec<f64> = cov_w.iter().map(|c| c / portfolio_vol).collect();

    Analysis::Computed(assemble(
        portfolio,
        &effective.tickers,
        &effective.weights,
        portfolio_vol,
        &marginal,
    ))
}

/// Builds the contribution map: effective tickers with their computed
/// entries, remaining portfolio tickers with zeroed placeholders.
fn assemble(
    portfolio: &Portfolio,
    tickers: &[String],
    weights: &[f64],
    portfolio_vol: f64,
    marginal: &[f64],
) -> RiskDecomposition {
    let mut risk_contributions = HashMap::with_capacity(portfolio.len());

    for (i, ticker) in tickers.iter().enumerate() {
        let component = weights[i] * marginal[i];
        risk_contributions.insert(
            ticker.clone(),
            RiskContribution {
                weight: weights[i],
                marginal_contribution: marginal[i],
                total_contribution: component,
                percentage_contribution: component / portfolio_vol * 100.0,
            },
        );
    }

    for (ticker, position) in portfolio.iter() {
        risk_contributions
            .entry(ticker.to_string())
            .or_insert(RiskContribution {
                weight: position.weight,
                marginal_contribution: 0.0,
                total_contribution: 0.0,
                percentage_contribution: 0.0,
            });
    }

    RiskDecomposition {
        portfolio_volatility: portfolio_vol,
        risk_contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn history(columns: Vec<(&str, Vec<f64>)>) -> PriceHistory {
        let len = columns.first().map_or(0, |(_, v)| v.len());
        let dates = (0..len as u64)
            .map(|i| NaiveDate::from_ymd_opt(2024, 2, 1).unwrap() + chrono::Days::new(i))
            .collect();
        PriceHistory::from_columns(
            dates,
            columns
                .into_iter()
                .map(|(t, v)| (t.to_string(), v))
                .collect(),
        )
        .unwrap()
    }

    fn varied_history() -> PriceHistory {
        history(vec![
            ("A", vec![100.0, 102.0, 99.0, 104.0, 101.0, 106.0]),
            ("B", vec![50.0, 49.5, 51.0, 50.2, 52.0, 51.5]),
        ])
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let portfolio = Portfolio::from_weights([("A", 0.7), ("B", 0.3)]).unwrap();
        let analysis = risk_decomposition(&varied_history(), &portfolio);
        assert!(analysis.is_computed());
        let result = analysis.into_inner();

        assert!(result.portfolio_volatility > 0.0);
        let pct_sum: f64 = result
            .risk_contributions
            .values()
            .map(|c| c.percentage_contribution)
            .sum();
        assert!((pct_sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_component_is_weight_times_marginal() {
        let portfolio = Portfolio::from_weights([("A", 0.5), ("B", 0.5)]).unwrap();
        let result = risk_decomposition(&varied_history(), &portfolio).into_inner();

        for contribution in result.risk_contributions.values() {
            let expected = contribution.weight * contribution.marginal_contribution;
            assert!((contribution.total_contribution - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_missing_ticker_gets_zero_contribution() {
        let portfolio =
            Portfolio::from_weights([("A", 0.5), ("B", 0.3), ("ZZZ", 0.2)]).unwrap();
        let result = risk_decomposition(&varied_history(), &portfolio).into_inner();

        let missing = &result.risk_contributions["ZZZ"];
        assert_eq!(missing.weight, 0.2);
        assert_eq!(missing.marginal_contribution, 0.0);
        assert_eq!(missing.total_contribution, 0.0);
        assert_eq!(missing.percentage_contribution, 0.0);

        // Effective weights renormalized over the present tickers.
        let a = &result.risk_contributions["A"];
        assert!((a.weight - 0.5 / 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_no_overlap_serves_placeholder_table() {
        let portfolio = Portfolio::from_weights([("ZZZ", 1.0)]).unwrap();
        let analysis = risk_decomposition(&varied_history(), &portfolio);
        assert!(analysis.is_insufficient());
        let result = analysis.into_inner();

        assert_eq!(result.portfolio_volatility, 0.15);
        let placeholder = &result.risk_contributions["ZZZ"];
        assert_eq!(placeholder.weight, 1.0);
        assert_eq!(placeholder.marginal_contribution, 0.1);
        assert_eq!(placeholder.total_contribution, 0.01);
        assert_eq!(placeholder.percentage_contribution, 10.0);
    }

    #[test]
    fn test_single_return_row_zeroes_contributions() {
        let prices = history(vec![("A", vec![100.0, 102.0])]);
        let portfolio = Portfolio::from_weights([("A", 1.0)]).unwrap();

        let analysis = risk_decomposition(&prices, &portfolio);
        assert!(analysis.is_insufficient());
        let result = analysis.into_inner();
        assert_eq!(result.portfolio_volatility, 0.15);
        assert_eq!(result.risk_contributions["A"].total_contribution, 0.0);
    }

    #[test]
    fn test_zero_weight_sum_zeroes_outputs() {
        let portfolio = Portfolio::from_weights([("A", 0.0), ("B", 0.0)]).unwrap();
        let analysis = risk_decomposition(&varied_history(), &portfolio);
        assert!(analysis.is_computed());
        let result = analysis.into_inner();

        assert_eq!(result.portfolio_volatility, 0.15);
        for contribution in result.risk_contributions.values() {
            assert_eq!(contribution.weight, 0.0);
            assert_eq!(contribution.marginal_contribution, 0.0);
            assert_eq!(contribution.percentage_contribution, 0.0);
        }
    }

    #[test]
    fn test_single_asset_decomposition() {
        let prices = history(vec![("A", vec![100.0, 102.0, 99.0, 104.0, 101.0])]);
        let portfolio = Portfolio::from_weights([("A", 1.0)]).unwrap();

        let result = risk_decomposition(&prices, &portfolio).into_inner();
        let a = &result.risk_contributions["A"];

        // One asset carries all the risk.
        assert!((a.percentage_contribution - 100.0).abs() < 1e-6);
        assert!((a.marginal_contribution - result.portfolio_volatility).abs() < 1e-9);
    }
}
