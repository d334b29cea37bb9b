//! Synthetic market data: the guaranteed last resort of a provider chain.

use crate::error::DataResult;
use crate::provider::PriceProvider;
use chrono::Days;
use quantile_core::types::PricePoint;
use quantile_core::{LiveQuotes, PriceHistory};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use std::collections::HashMap;

/// Daily drift of the synthetic log-return process.
const DAILY_DRIFT: f64 = 0.0005;

/// Daily volatility of the synthetic log-return process.
const DAILY_VOLATILITY: f64 = 0.02;

/// Generates plausible price paths when no real provider can.
///
/// Each ticker gets an initial price uniform in [50, 500) and a
/// geometric random walk: price_t = initial × exp(Σ returns), with daily
/// log returns N(0.0005, 0.02²), on consecutive calendar dates ending
/// today. A seeded instance is fully reproducible; an unseeded one draws
/// fresh entropy per construction.
pub struct SyntheticPriceProvider {
    seed: Option<u64>,
}

impl SyntheticPriceProvider {
    /// Creates an unseeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Creates a reproducible generator.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generates synthetic live quotes: prices uniform in [50, 500),
    /// day-over-day changes uniform in [−5, 5) percent.
    #[must_use]
    pub fn live_quotes(&self, tickers: &[String]) -> LiveQuotes {
        let mut rng = self.rng();
        let mut prices = HashMap::with_capacity(tickers.len());
        let mut changes = HashMap::with_capacity(tickers.len());

        for ticker in dedup(tickers) {
            prices.insert(ticker.clone(), rng.gen_range(50.0..500.0));
            changes.insert(ticker.clone(), rng.gen_range(-5.0..5.0));
        }

        LiveQuotes::new(prices, changes, chrono::Local::now().to_rfc3339())
    }
}

impl Default for SyntheticPriceProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceProvider for SyntheticPriceProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch_history(&self, tickers: &[String], days: usize) -> DataResult<PriceHistory> {
        let mut rng = self.rng();
        let tickers = dedup(tickers);

        let today = chrono::Local::now().date_naive();
        let dates: Vec<chrono::NaiveDate> = (0..days)
            .filter_map(|i| today.checked_sub_days(Days::new((days - 1 - i) as u64)))
            .collect();

        let columns: Vec<(String, Vec<f64>)> = tickers
            .iter()
            .map(|ticker| {
                let initial = rng.gen_range(50.0..500.0);
                let mut log_sum = 0.0;
                let values = dates
                    .iter()
                    .map(|_| {
                        let z: f64 = StandardNormal.sample(&mut rng);
                        log_sum += DAILY_DRIFT + DAILY_VOLATILITY * z;
                        initial * log_sum.exp()
                    })
                    .collect();
                (ticker.clone(), values)
            })
            .collect();

        let observations = dates
            .iter()
            .enumerate()
            .map(|(row, &date)| {
                let prices = columns
                    .iter()
                    .map(|(ticker, values)| (ticker.clone(), values[row]))
                    .collect();
                PricePoint::new(date, prices)
            })
            .collect();

        Ok(PriceHistory::new(tickers, observations)?)
    }
}

/// Deduplicates tickers preserving first-seen order.
fn dedup(tickers: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(tickers.len());
    for ticker in tickers {
        if !seen.contains(ticker) {
            seen.push(ticker.clone());
        }
    }
    seen
}
