//! The price provider abstraction.

use crate::error::DataResult;
use quantile_core::PriceHistory;

/// A source of historical prices.
///
/// Implementations are synchronous: the surrounding refresh task owns any
/// scheduling concerns, and the engine downstream is pure. A provider that
/// is not configured (missing file, absent credentials) reports so via
/// [`PriceProvider::is_configured`] and is skipped by the chain without
/// being called.
pub trait PriceProvider: Send + Sync {
    /// A short name for logs and error messages.
    fn name(&self) -> &str;

    /// Returns true if the provider is ready to serve requests.
    fn is_configured(&self) -> bool {
        true
    }

    /// Fetches up to `days` observations for the requested tickers,
    /// ascending by date. Tickers the provider does not cover are simply
    /// absent from the result's columns.
    fn fetch_history(&self, tickers: &[String], days: usize) -> DataResult<PriceHistory>;
}
