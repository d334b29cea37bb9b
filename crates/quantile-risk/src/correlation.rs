//! Pairwise correlation structure of the asset universe.

use crate::defaults;
use crate::returns::calculate_returns;
use quantile_core::types::{CorrelationAnalysis, CorrelationPair};
use quantile_core::{Analysis, PriceHistory};
use quantile_math::statistics::correlation_matrix;
use std::collections::HashMap;
use tracing::warn;

/// Computes the Pearson correlation matrix of the universe plus the five
/// highest and five lowest pairs by absolute correlation and the
/// unweighted average over all pairs.
///
/// Below 2 valid return rows, or when no pair has a defined correlation,
/// the documented heuristic table stands in.
#[must_use]
pub fn correlations(prices: &PriceHistory) -> Analysis<CorrelationAnalysis> {
    let returns = calculate_returns(prices);
    if returns.len() < 2 {
        warn!("correlations: fewer than 2 return rows, serving heuristic table");
        return Analysis::Insufficient(defaults::fallback_correlations(prices.tickers()));
    }

    let Ok(corr) = correlation_matrix(returns.values()) else {
        warn!("correlations: matrix unavailable, serving heuristic table");
        return Analysis::Insufficient(defaults::fallback_correlations(prices.tickers()));
    };
    let tickers = returns.tickers();
    let k = tickers.len();

    let mut pairs = Vec::new();
    for i in 0..k {
        for j in (i + 1)..k {
            let r = corr[(i, j)];
            if !r.is_nan() {
                pairs.push(CorrelationPair {
                    asset1: tickers[i].clone(),
                    asset2: tickers[j].clone(),
                    correlation: r,
                });
            }
        }
    }
    if pairs.is_empty() {
        warn!("correlations: no defined pairs, serving heuristic table");
        return Analysis::Insufficient(defaults::fallback_correlations(prices.tickers()));
    }

    // Stable sort: ties keep original column order.
    pairs.sort_by(|a, b| {
        b.correlation
            .abs()
            .partial_cmp(&a.correlation.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let highest_correlations: Vec<CorrelationPair> = pairs.iter().take(5).cloned().collect();
    let lowest_correlations: Vec<CorrelationPair> = if pairs.len() >= 5 {
        pairs[pairs.len() - 5..].to_vec()
    } else {
        pairs.clone()
    };
    let average_correlation =
        pairs.iter().map(|p| p.correlation).sum::<f64>() / pairs.len() as f64;

    let mut matrix = HashMap::with_capacity(k);
    for (i, a) in tickers.iter().enumerate() {
        let mut row = HashMap::with_capacity(k);
        for (j, b) in tickers.iter().enumerate() {
            let value = corr[(i, j)];
            row.insert(b.clone(), if value.is_nan() { 0.0 } else { value });
        }
        matrix.insert(a.clone(), row);
    }

    Analysis::Computed(CorrelationAnalysis {
        matrix,
        highest_correlations,
        lowest_correlations,
        average_correlation,
    })
}
