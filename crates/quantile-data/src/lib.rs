//! # Quantile Data
//!
//! Market data providers for the Quantile portfolio risk analytics
//! library.
//!
//! The engine itself is pure and takes a fully materialized
//! [`PriceHistory`](quantile_core::PriceHistory); this crate is the
//! collaborator that produces one. Providers form an ordered
//! chain-of-responsibility: each is tried in sequence and skipped when
//! unconfigured or failing, and the chain terminates in a synthetic
//! generator that always succeeds.
//!
//! - [`CsvPriceProvider`] - wide CSV files (date column + one column per
//!   ticker), for EOD loads and tests
//! - [`SyntheticPriceProvider`] - seedable random-walk price paths and
//!   live quotes, the guaranteed last resort
//! - [`ProviderChain`] - the ordered chain with skip-on-failure semantics
//!
//! ## Example
//!
//! ```rust
//! use quantile_data::{CsvPriceProvider, ProviderChain};
//!
//! let tickers = vec!["AAPL".to_string(), "MSFT".to_string()];
//! let chain = ProviderChain::new()
//!     .with_provider(CsvPriceProvider::new("/var/data/eod.csv"))
//!     .with_seeded_fallback(42);
//!
//! // Succeeds even when the CSV is absent: the synthetic generator steps in.
//! let history = chain.fetch_history(&tickers, 30);
//! assert_eq!(history.len(), 30);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

mod chain;
mod error;
mod file;
mod provider;
mod synthetic;

pub use chain::ProviderChain;
pub use error::{DataError, DataResult};
pub use file::CsvPriceProvider;
pub use provider::PriceProvider;
pub use synthetic::SyntheticPriceProvider;
