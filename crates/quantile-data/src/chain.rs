//! The ordered provider chain.

use crate::provider::PriceProvider;
use crate::synthetic::SyntheticPriceProvider;
use quantile_core::PriceHistory;
use tracing::{debug, warn};

/// An ordered chain of price providers with a synthetic terminal fallback.
///
/// Providers are tried front to back; one that is unconfigured, errors, or
/// returns no observations is skipped. The chain always ends in a
/// [`SyntheticPriceProvider`], so [`ProviderChain::fetch_history`] is
/// infallible: the dashboard is never left without a price matrix, at
/// worst a synthetic one.
pub struct ProviderChain {
    providers: Vec<Box<dyn PriceProvider>>,
    fallback: SyntheticPriceProvider,
}

impl ProviderChain {
    /// Creates a chain containing only the synthetic fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            fallback: SyntheticPriceProvider::new(),
        }
    }

    /// Appends a provider ahead of the synthetic fallback.
    #[must_use]
    pub fn with_provider(mut self, provider: impl PriceProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Seeds the synthetic fallback for reproducible output.
    #[must_use]
    pub fn with_seeded_fallback(mut self, seed: u64) -> Self {
        self.fallback = SyntheticPriceProvider::seeded(seed);
        self
    }

    /// Fetches up to `days` observations for the requested tickers from
    /// the first provider that can serve them, falling back to synthetic
    /// data.
    #[must_use]
    pub fn fetch_history(&self, tickers: &[String], days: usize) -> PriceHistory {
        for provider in &self.providers {
            if !provider.is_configured() {
                debug!(provider = provider.name(), "skipping unconfigured provider");
                continue;
            }
            match provider.fetch_history(tickers, days) {
                Ok(history) if !history.is_empty() => {
                    debug!(
                        provider = provider.name(),
                        observations = history.len(),
                        "serving provider data"
                    );
                    return history;
                }
                Ok(_) => {
                    warn!(provider = provider.name(), "provider returned no data");
                }
                Err(error) => {
                    warn!(provider = provider.name(), %error, "provider failed");
                }
            }
        }

        warn!("all providers exhausted, generating synthetic data");
        self.fallback
            .fetch_history(tickers, days)
            .unwrap_or_default()
    }
}

impl Default for ProviderChain {
    fn default() -> Self {
        Self::new()
    }
}
