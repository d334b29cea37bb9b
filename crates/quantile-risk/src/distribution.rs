//! Volatility, Sharpe ratio, and drawdown analytics.

use crate::defaults::{DEFAULT_ANNUAL_VOLATILITY, TRADING_DAYS_PER_YEAR};
use quantile_math::statistics::{mean, sample_std};

/// Volatility of a return series: sample std, × √252 when annualized.
///
/// Falls back to 0.15 for an empty series or an undefined std.
#[must_use]
pub fn volatility(returns: &[f64], annualize: bool) -> f64 {
    match sample_std(returns) {
        Some(std) if std.is_finite() => {
            if annualize {
                std * TRADING_DAYS_PER_YEAR.sqrt()
            } else {
                std
            }
        }
        _ => DEFAULT_ANNUAL_VOLATILITY,
    }
}

/// Annualized Sharpe ratio: √252 × mean(excess returns) / std(returns).
///
/// The annual risk-free rate converts to a daily rate by /252. 0 for an
/// empty series or a zero/undefined std.
#[must_use]
pub fn sharpe_ratio(returns: &[f64], risk_free_rate: f64) -> f64 {
    let Some(m) = mean(returns) else {
        return 0.0;
    };
    let std = match sample_std(returns) {
        Some(s) if s.is_finite() && s != 0.0 => s,
        _ => return 0.0,
    };

    let daily_risk_free = risk_free_rate / TRADING_DAYS_PER_YEAR;
    TRADING_DAYS_PER_YEAR.sqrt() * (m - daily_risk_free) / std
}

/// Maximum drawdown of a price series: the most negative value of
/// (cumulative − running_max) / running_max over the cumulative product of
/// (1 + return). 0 for series shorter than 2.
#[must_use]
pub fn max_drawdown(prices: &[f64]) -> f64 {
    if prices.len() < 2 {
        return 0.0;
    }

    let returns: Vec<f64> = prices
        .windows(2)
        .filter_map(|w| {
            let (prev, current) = (w[0], w[1]);
            (prev != 0.0 && prev.is_finite() && current.is_finite())
                .then(|| (current - prev) / prev)
        })
        .collect();
    if returns.is_empty() {
        return 0.0;
    }

    let mut cumulative = 1.0;
    let mut running_max = f64::MIN;
    let mut worst = 0.0_f64;
    for r in returns {
        cumulative *= 1.0 + r;
        running_max = running_max.max(cumulative);
        worst = worst.min((cumulative - running_max) / running_max);
    }
    worst
}
