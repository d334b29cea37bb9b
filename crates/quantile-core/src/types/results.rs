//! Result value objects.
//!
//! Field names and shapes are the compatibility surface: the serving layer
//! forwards these verbatim to dashboard clients. Every type here is an
//! immutable value produced once per engine invocation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Distribution moments of the daily portfolio return series, as reported
/// inside [`AllMetrics`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnsStats {
    /// Mean daily return.
    pub daily_mean: f64,
    /// Sample standard deviation of daily returns.
    pub daily_std: f64,
    /// Mean daily return × 252.
    pub annual_return: f64,
    /// Bias-corrected sample skewness.
    pub skewness: f64,
    /// Bias-corrected excess kurtosis.
    pub kurtosis: f64,
}

/// The aggregate "all metrics" result backing the dashboard's headline
/// tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllMetrics {
    /// Historical VaR at 95% confidence.
    pub var_95_historical: f64,
    /// Historical VaR at 99% confidence.
    pub var_99_historical: f64,
    /// Parametric VaR at 95% confidence.
    pub var_95_parametric: f64,
    /// Parametric VaR at 99% confidence.
    pub var_99_parametric: f64,
    /// Annualized volatility (sample std × √252).
    pub volatility_annual: f64,
    /// Annualized Sharpe ratio.
    pub sharpe_ratio: f64,
    /// Maximum drawdown of the weighted portfolio price series (≤ 0).
    pub max_drawdown: f64,
    /// Distribution moments of the daily return series.
    pub returns_stats: ReturnsStats,
}

/// Distribution moments reported inside [`VarAnalysis`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnsDistribution {
    /// Mean daily return.
    pub mean: f64,
    /// Sample standard deviation.
    pub std: f64,
    /// Bias-corrected sample skewness (0 below 3 observations).
    pub skew: f64,
    /// Bias-corrected excess kurtosis (0 below 4 observations).
    pub kurtosis: f64,
}

/// One point of the rolling VaR time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarPoint {
    /// Date the trailing window ends at.
    pub date: NaiveDate,
    /// Historical VaR at 95% over the trailing window.
    pub var_95: f64,
}

/// Full VaR analysis: historical and parametric VaR at each confidence
/// level, distribution moments, and the rolling VaR series.
///
/// The `historical`/`parametric` maps are keyed by confidence label
/// (`"90%"`, `"95%"`, `"99%"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarAnalysis {
    /// Historical VaR per confidence label.
    pub historical: HashMap<String, f64>,
    /// Parametric VaR per confidence label.
    pub parametric: HashMap<String, f64>,
    /// Moments of the portfolio return distribution.
    pub returns_distribution: ReturnsDistribution,
    /// Rolling 95% historical VaR over a trailing window.
    pub time_series: Vec<VarPoint>,
}

/// One ranked pairwise correlation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPair {
    /// First ticker of the unordered pair (earlier column).
    pub asset1: String,
    /// Second ticker of the unordered pair (later column).
    pub asset2: String,
    /// Pearson correlation of the two return series.
    pub correlation: f64,
}

/// Correlation structure of the asset universe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationAnalysis {
    /// Full pairwise correlation matrix (undefined entries as 0).
    pub matrix: HashMap<String, HashMap<String, f64>>,
    /// Up to 5 pairs with the largest absolute correlation.
    pub highest_correlations: Vec<CorrelationPair>,
    /// Up to 5 pairs with the smallest absolute correlation.
    pub lowest_correlations: Vec<CorrelationPair>,
    /// Unweighted mean over all defined pairs.
    pub average_correlation: f64,
}

/// One asset's contribution to portfolio volatility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskContribution {
    /// Effective (renormalized) weight, or the nominal weight for tickers
    /// absent from the data.
    pub weight: f64,
    /// Marginal contribution: ∂σₚ/∂wᵢ = (Σw)ᵢ / σₚ.
    pub marginal_contribution: f64,
    /// Component contribution: wᵢ × marginal.
    pub total_contribution: f64,
    /// Component contribution as a percentage of portfolio volatility.
    pub percentage_contribution: f64,
}

/// Covariance-based decomposition of portfolio volatility by asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskDecomposition {
    /// Annualized portfolio volatility.
    pub portfolio_volatility: f64,
    /// Contribution breakdown per ticker.
    pub risk_contributions: HashMap<String, RiskContribution>,
}

/// The impact of one stress scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioImpact {
    /// Scenario name, passed through from the input.
    pub scenario_name: String,
    /// Historical VaR at 95% of the shocked portfolio returns.
    pub var_95: f64,
    /// Nominal portfolio value × var_95.
    pub expected_loss: f64,
    /// Qualitative probability label ("N/A" when the input had none).
    pub probability: String,
}

/// A full stress test run over a list of scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressTestReport {
    /// Per-scenario impacts, in input order.
    pub scenarios: Vec<ScenarioImpact>,
    /// Nominal portfolio value the losses are scaled against.
    pub current_value: f64,
}

/// The kind of a live risk alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// A single-day price move beyond the alert threshold.
    LargeMove,
}

/// Severity of a live risk alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Move beyond ±10%.
    High,
    /// Move beyond ±5%.
    Medium,
}

/// A risk alert derived from live quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAlert {
    /// Ticker that triggered the alert.
    pub ticker: String,
    /// Alert kind.
    #[serde(rename = "type")]
    pub kind: AlertKind,
    /// Human-readable description.
    pub message: String,
    /// Alert severity.
    pub severity: AlertSeverity,
}

/// Live metrics: the quote snapshot echoed back with derived alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveMetrics {
    /// Last price per ticker.
    pub prices: HashMap<String, f64>,
    /// Day-over-day percent change per ticker.
    pub changes: HashMap<String, f64>,
    /// Snapshot timestamp, RFC 3339.
    pub timestamp: String,
    /// Large-move alerts, sorted by ticker.
    pub alerts: Vec<RiskAlert>,
}

/// One position valued against live quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSnapshot {
    /// Nominal input weight.
    pub weight: f64,
    /// Shares held.
    pub shares: f64,
    /// Live price (100 when no quote is available).
    pub current_price: f64,
    /// current_price × shares.
    pub market_value: f64,
    /// Day-over-day percent change (0 when no quote is available).
    pub daily_change: f64,
    /// market_value / total portfolio value (0 when the total is 0).
    pub current_weight: f64,
}

/// The whole portfolio valued against live quotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Valued positions per ticker.
    pub portfolio: HashMap<String, PositionSnapshot>,
    /// Sum of position market values.
    pub total_value: f64,
    /// Quote snapshot timestamp, RFC 3339.
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_wire_shape() {
        let alert = RiskAlert {
            ticker: "NVDA".to_string(),
            kind: AlertKind::LargeMove,
            message: "NVDA moved -11.20% today".to_string(),
            severity: AlertSeverity::High,
        };
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json["type"], "large_move");
        assert_eq!(json["severity"], "high");
    }

    #[test]
    fn test_var_point_serializes_iso_date() {
        let point = VarPoint {
            date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            var_95: 0.021,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2025-06-15");
    }
}
