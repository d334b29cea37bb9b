//! Value-at-Risk estimation.

use crate::defaults::{self, ROLLING_VAR_MIN_WINDOW, ROLLING_VAR_WINDOW};
use crate::returns::{calculate_returns, portfolio_returns, PortfolioReturns};
use quantile_core::types::{ReturnsDistribution, VarAnalysis, VarPoint};
use quantile_core::{Analysis, ConfidenceLevel, Portfolio, PriceHistory};
use quantile_math::statistics::{
    excess_kurtosis, mean, normal_quantile, percentile, sample_std, skewness,
};
use std::collections::HashMap;
use tracing::warn;

/// Historical VaR: the negated empirical (1−c)-percentile of the return
/// series. 0 for an empty series.
///
/// `confidence` is a probability, e.g. 0.95.
#[must_use]
pub fn historical_var(returns: &[f64], confidence: f64) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }
    percentile(returns, (1.0 - confidence) * 100.0).map_or(0.0, |p| -p)
}

/// Parametric (variance-covariance) VaR: −(mean + z(1−c)·std) under a
/// normal assumption. 0 for an empty series or an undefined/zero std.
#[must_use]
pub fn parametric_var(returns: &[f64], confidence: f64) -> f64 {
    if returns.is_empty() {
        return 0.0;
    }
    let Some(m) = mean(returns) else {
        return 0.0;
    };
    let std = match sample_std(returns) {
        Some(s) if s.is_finite() && s != 0.0 => s,
        _ => return 0.0,
    };
    let Ok(z) = normal_quantile(1.0 - confidence) else {
        return 0.0;
    };
    -(m + z * std)
}

/// Full VaR analysis for a portfolio against a price history.
///
/// Reports historical and parametric VaR at 90/95/99%, the return
/// distribution's moments, and a rolling 95% VaR series over a trailing
/// window of min(252, n−1) observations (produced only when that window
/// exceeds 30). Returns the documented fallback when no portfolio return
/// series can be built.
#[must_use]
pub fn var_analysis(prices: &PriceHistory, portfolio: &Portfolio) -> Analysis<VarAnalysis> {
    let returns = calculate_returns(prices);
    if returns.is_empty() {
        warn!("var analysis: no return rows, serving fallback");
        return Analysis::Insufficient(defaults::fallback_var_analysis());
    }

    let series = portfolio_returns(&returns, portfolio);
    if series.is_empty() {
        warn!("var analysis: no portfolio tickers in data, serving fallback");
        return Analysis::Insufficient(defaults::fallback_var_analysis());
    }
    let values = series.values();

    let mut historical = HashMap::with_capacity(ConfidenceLevel::ALL.len());
    let mut parametric = HashMap::with_capacity(ConfidenceLevel::ALL.len());
    for confidence in ConfidenceLevel::ALL {
        let label = confidence.label().to_string();
        historical.insert(label.clone(), historical_var(values, confidence.level()));
        parametric.insert(label, parametric_var(values, confidence.level()));
    }

    Analysis::Computed(VarAnalysis {
        historical,
        parametric,
        returns_distribution: ReturnsDistribution {
            mean: mean(values).unwrap_or(0.0),
            std: sample_std(values).unwrap_or(0.0),
            skew: skewness(values).unwrap_or(0.0),
            kurtosis: excess_kurtosis(values).unwrap_or(0.0),
        },
        time_series: rolling_var(&series),
    })
}

/// Rolling historical VaR(95%) with a trailing window.
fn rolling_var(series: &PortfolioReturns) -> Vec<VarPoint> {
    let n = series.len();
    if n == 0 {
        return Vec::new();
    }

    let window = ROLLING_VAR_WINDOW.min(n - 1);
    if window <= ROLLING_VAR_MIN_WINDOW {
        return Vec::new();
    }

    let confidence = ConfidenceLevel::NinetyFive.level();
    (window..n)
        .map(|i| VarPoint {
            date: series.dates()[i],
            var_95: historical_var(&series.values()[i - window..i], confidence),
        })
        .collect()
}
