//! The metrics facade: headline analytics, live metrics, and portfolio
//! valuation.

use crate::config::EngineConfig;
use crate::defaults::{
    ALERT_HIGH_SEVERITY_PCT, ALERT_MOVE_PCT, FALLBACK_ALL_METRICS, FALLBACK_MAX_DRAWDOWN,
    FALLBACK_QUOTE_PRICE, TRADING_DAYS_PER_YEAR,
};
use crate::distribution::{max_drawdown, sharpe_ratio, volatility};
use crate::returns::{calculate_returns, portfolio_returns, weighted_price_series};
use crate::var::{historical_var, parametric_var};
use quantile_core::types::{
    AlertKind, AlertSeverity, AllMetrics, LiveMetrics, PortfolioSnapshot, PositionSnapshot,
    ReturnsStats, RiskAlert,
};
use quantile_core::{Analysis, ConfidenceLevel, LiveQuotes, Portfolio, PriceHistory};
use quantile_math::statistics::{excess_kurtosis, mean, sample_std, skewness};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Computes the aggregate metrics object backing the dashboard's headline
/// tiles.
///
/// The return matrix is derived once; VaR, volatility, Sharpe, and the
/// distribution moments come from the portfolio return series, while the
/// max drawdown runs on the weighted *price* series. Either missing-data
/// branch (no return rows, no portfolio overlap) short-circuits to the
/// fixed default object in [`crate::defaults`].
#[must_use]
pub fn all_metrics(
    prices: &PriceHistory,
    portfolio: &Portfolio,
    config: &EngineConfig,
) -> Analysis<AllMetrics> {
    let returns = calculate_returns(prices);
    if returns.is_empty() {
        warn!("all metrics: no return rows, serving fallback");
        return Analysis::Insufficient(FALLBACK_ALL_METRICS.clone());
    }

    let series = portfolio_returns(&returns, portfolio);
    if series.is_empty() {
        warn!("all metrics: no portfolio tickers in data, serving fallback");
        return Analysis::Insufficient(FALLBACK_ALL_METRICS.clone());
    }
    let values = series.values();
    debug!(observations = values.len(), "all metrics: computing");

    let price_series = weighted_price_series(prices, portfolio);
    let max_drawdown = if price_series.is_empty() {
        FALLBACK_MAX_DRAWDOWN
    } else {
        max_drawdown(&price_series)
    };

    let fallback_stats = &FALLBACK_ALL_METRICS.returns_stats;
    let daily_mean = mean(values).unwrap_or(fallback_stats.daily_mean);
    let daily_std = sample_std(values).unwrap_or(fallback_stats.daily_std);

    Analysis::Computed(AllMetrics {
        var_95_historical: historical_var(values, ConfidenceLevel::NinetyFive.level()),
        var_99_historical: historical_var(values, ConfidenceLevel::NinetyNine.level()),
        var_95_parametric: parametric_var(values, ConfidenceLevel::NinetyFive.level()),
        var_99_parametric: parametric_var(values, ConfidenceLevel::NinetyNine.level()),
        volatility_annual: volatility(values, true),
        sharpe_ratio: sharpe_ratio(values, config.risk_free_rate),
        max_drawdown,
        returns_stats: ReturnsStats {
            daily_mean,
            daily_std,
            annual_return: daily_mean * TRADING_DAYS_PER_YEAR,
            skewness: skewness(values).unwrap_or(fallback_stats.skewness),
            kurtosis: excess_kurtosis(values).unwrap_or(fallback_stats.kurtosis),
        },
    })
}

/// Echoes a live quote snapshot with derived large-move alerts.
///
/// Any ticker whose daily change exceeds ±5% raises a `large_move` alert;
/// beyond ±10% the severity escalates to high. Alerts are sorted by ticker
/// for stable output.
#[must_use]
pub fn live_metrics(quotes: &LiveQuotes) -> LiveMetrics {
    let mut alerts: Vec<RiskAlert> = quotes
        .changes
        .iter()
        .filter(|(_, change)| change.abs() > ALERT_MOVE_PCT)
        .map(|(ticker, change)| RiskAlert {
            ticker: ticker.clone(),
            kind: AlertKind::LargeMove,
            message: format!("{ticker} moved {change:.2}% today"),
            severity: if change.abs() > ALERT_HIGH_SEVERITY_PCT {
                AlertSeverity::High
            } else {
                AlertSeverity::Medium
            },
        })
        .collect();
    alerts.sort_by(|a, b| a.ticker.cmp(&b.ticker));

    LiveMetrics {
        prices: quotes.prices.clone(),
        changes: quotes.changes.clone(),
        timestamp: quotes.timestamp.clone(),
        alerts,
    }
}

/// Values a portfolio against live quotes.
///
/// Positions without a quote fall back to a price of 100 and a change of
/// 0; current weights renormalize over the live market values (0 when the
/// total is 0).
#[must_use]
pub fn portfolio_snapshot(portfolio: &Portfolio, quotes: &LiveQuotes) -> PortfolioSnapshot {
    let mut snapshots: HashMap<String, PositionSnapshot> =
        HashMap::with_capacity(portfolio.len());
    let mut total_value = 0.0;

    for (ticker, position) in portfolio.iter() {
        let current_price = quotes
            .prices
            .get(ticker)
            .copied()
            .unwrap_or(FALLBACK_QUOTE_PRICE);
        let market_value = current_price * position.shares;
        total_value += market_value;

        snapshots.insert(
            ticker.to_string(),
            PositionSnapshot {
                weight: position.weight,
                shares: position.shares,
                current_price,
                market_value,
                daily_change: quotes.changes.get(ticker).copied().unwrap_or(0.0),
                current_weight: 0.0,
            },
        );
    }

    if total_value > 0.0 {
        for snapshot in snapshots.values_mut() {
            snapshot.current_weight = snapshot.market_value / total_value;
        }
    }

    PortfolioSnapshot {
        portfolio: snapshots,
        total_value,
        timestamp: quotes.timestamp.clone(),
    }
}
