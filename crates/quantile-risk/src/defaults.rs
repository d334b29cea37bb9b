//! Documented fallback values and fixed engine parameters.
//!
//! These tables are part of the observable contract: whenever the input
//! data is insufficient, the engine answers with exactly these values so
//! the dashboard never shows a broken tile. Consumers test against them
//! bit-for-bit; change nothing here without versioning the API.

use once_cell::sync::Lazy;
use quantile_core::types::{
    AllMetrics, CorrelationAnalysis, CorrelationPair, ReturnsDistribution, ReturnsStats,
    RiskContribution, RiskDecomposition, ScenarioImpact, VarAnalysis,
};
use quantile_core::{ConfidenceLevel, Portfolio, StressScenario};
use std::collections::HashMap;

/// Trading days per year; volatility annualizes by √252, returns by ×252.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Annualized volatility reported when none can be estimated.
pub const DEFAULT_ANNUAL_VOLATILITY: f64 = 0.15;

/// Max drawdown reported when no weighted price series can be built.
pub const FALLBACK_MAX_DRAWDOWN: f64 = -0.08;

/// Rolling VaR trailing window (observations).
pub const ROLLING_VAR_WINDOW: usize = 252;

/// The rolling VaR series is only produced when the effective window
/// exceeds this many observations.
pub const ROLLING_VAR_MIN_WINDOW: usize = 30;

/// Per-scenario 95% VaR reported when stress inputs are empty.
pub const FALLBACK_SCENARIO_VAR_95: f64 = 0.05;

/// Per-scenario expected loss reported when stress inputs are empty.
pub const FALLBACK_SCENARIO_LOSS: f64 = 50_000.0;

/// Marginal contribution reported per ticker when no return data overlaps
/// the portfolio.
pub const FALLBACK_MARGINAL_CONTRIBUTION: f64 = 0.1;

/// Component contribution reported per ticker in the same fallback.
pub const FALLBACK_TOTAL_CONTRIBUTION: f64 = 0.01;

/// Percentage contribution reported per ticker in the same fallback.
pub const FALLBACK_PERCENTAGE_CONTRIBUTION: f64 = 10.0;

/// Substring marking a crypto-style symbol (currency-suffixed, e.g.
/// "BTC-USD") in the heuristic correlation table.
pub const CRYPTO_SUFFIX: &str = "USD";

/// Heuristic correlation for a pair of crypto-style symbols.
pub const CRYPTO_PAIR_CORRELATION: f64 = 0.8;

/// Heuristic correlation for a pair of large-cap tech symbols.
pub const TECH_PAIR_CORRELATION: f64 = 0.7;

/// Heuristic correlation for any other pair.
pub const DEFAULT_PAIR_CORRELATION: f64 = 0.3;

/// Average correlation reported with the heuristic table.
pub const FALLBACK_AVERAGE_CORRELATION: f64 = 0.4;

/// The large-cap tech set of the heuristic correlation table.
pub const LARGE_CAP_TECH: [&str; 3] = ["AAPL", "MSFT", "GOOGL"];

/// Price assumed for a position with no live quote.
pub const FALLBACK_QUOTE_PRICE: f64 = 100.0;

/// Absolute daily percent move that triggers a large-move alert.
pub const ALERT_MOVE_PCT: f64 = 5.0;

/// Absolute daily percent move that escalates the alert to high severity.
pub const ALERT_HIGH_SEVERITY_PCT: f64 = 10.0;

/// The fixed "all metrics" object returned when price or portfolio return
/// data is missing.
pub static FALLBACK_ALL_METRICS: Lazy<AllMetrics> = Lazy::new(|| AllMetrics {
    var_95_historical: 0.0234,
    var_99_historical: 0.0412,
    var_95_parametric: 0.0256,
    var_99_parametric: 0.0445,
    volatility_annual: 0.1856,
    sharpe_ratio: 1.24,
    max_drawdown: -0.0821,
    returns_stats: ReturnsStats {
        daily_mean: 0.0008,
        daily_std: 0.0117,
        annual_return: 0.2016,
        skewness: -0.234,
        kurtosis: 3.456,
    },
});

/// The fixed VaR analysis returned when price or portfolio return data is
/// missing.
#[must_use]
pub fn fallback_var_analysis() -> VarAnalysis {
    let levels = |v90: f64, v95: f64, v99: f64| {
        let mut map = HashMap::new();
        map.insert(ConfidenceLevel::Ninety.label().to_string(), v90);
        map.insert(ConfidenceLevel::NinetyFive.label().to_string(), v95);
        map.insert(ConfidenceLevel::NinetyNine.label().to_string(), v99);
        map
    };

    VarAnalysis {
        historical: levels(0.02, 0.03, 0.05),
        parametric: levels(0.02, 0.03, 0.05),
        returns_distribution: ReturnsDistribution {
            mean: 0.0008,
            std: 0.02,
            skew: -0.1,
            kurtosis: 3.0,
        },
        time_series: Vec::new(),
    }
}

/// Heuristic correlation for a ticker pair with no usable return data.
#[must_use]
pub fn heuristic_pair_correlation(a: &str, b: &str) -> f64 {
    if a.contains(CRYPTO_SUFFIX) && b.contains(CRYPTO_SUFFIX) {
        CRYPTO_PAIR_CORRELATION
    } else if LARGE_CAP_TECH.contains(&a) && LARGE_CAP_TECH.contains(&b) {
        TECH_PAIR_CORRELATION
    } else {
        DEFAULT_PAIR_CORRELATION
    }
}

/// The heuristic correlation table for the given universe, with the fixed
/// example rankings.
#[must_use]
pub fn fallback_correlations(tickers: &[String]) -> CorrelationAnalysis {
    let mut matrix = HashMap::with_capacity(tickers.len());
    for a in tickers {
        let mut row = HashMap::with_capacity(tickers.len());
        for b in tickers {
            let value = if a == b {
                1.0
            } else {
                heuristic_pair_correlation(a, b)
            };
            row.insert(b.clone(), value);
        }
        matrix.insert(a.clone(), row);
    }

    let pair = |a: &str, b: &str, correlation: f64| CorrelationPair {
        asset1: a.to_string(),
        asset2: b.to_string(),
        correlation,
    };

    CorrelationAnalysis {
        matrix,
        highest_correlations: vec![pair("AAPL", "MSFT", 0.7), pair("JPM", "GS", 0.8)],
        lowest_correlations: vec![pair("AAPL", "BTC-USD", 0.2), pair("JPM", "ETH-USD", 0.15)],
        average_correlation: FALLBACK_AVERAGE_CORRELATION,
    }
}

/// The fixed risk decomposition for a portfolio with no usable return
/// data: every ticker keeps its nominal weight with the placeholder
/// contributions.
#[must_use]
pub fn fallback_risk_decomposition(portfolio: &Portfolio) -> RiskDecomposition {
    let risk_contributions = portfolio
        .iter()
        .map(|(ticker, position)| {
            (
                ticker.to_string(),
                RiskContribution {
                    weight: position.weight,
                    marginal_contribution: FALLBACK_MARGINAL_CONTRIBUTION,
                    total_contribution: FALLBACK_TOTAL_CONTRIBUTION,
                    percentage_contribution: FALLBACK_PERCENTAGE_CONTRIBUTION,
                },
            )
        })
        .collect();

    RiskDecomposition {
        portfolio_volatility: DEFAULT_ANNUAL_VOLATILITY,
        risk_contributions,
    }
}

/// The fixed impact for one scenario when stress inputs are empty. Name
/// and probability still pass through.
#[must_use]
pub fn fallback_scenario_impact(scenario: &StressScenario) -> ScenarioImpact {
    ScenarioImpact {
        scenario_name: scenario.name.clone(),
        var_95: FALLBACK_SCENARIO_VAR_95,
        expected_loss: FALLBACK_SCENARIO_LOSS,
        probability: scenario
            .probability
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
    }
}
