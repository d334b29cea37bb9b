//! # Quantile Risk
//!
//! Portfolio risk analytics engine: the pure computation that turns a
//! price history and a weight vector into Value-at-Risk, volatility,
//! correlation structure, marginal risk decomposition, and stress impact.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every operation reads only its arguments and
//!   returns a new result with no shared state and no I/O, safe to call from
//!   concurrent refresh tasks and request handlers without locking
//! - **Always answer**: data-quality problems (empty input, zero variance,
//!   undefined statistics) resolve to documented fallback values instead
//!   of errors or NaN, so a dashboard tile is never broken
//! - **Visible provenance**: facade operations return
//!   [`Analysis`](quantile_core::Analysis), distinguishing computed
//!   analytics from fallback placeholders without changing the wire shape
//!
//! ## Pipeline
//!
//! Data flows strictly downward:
//!
//! ```text
//! PriceHistory → ReturnsMatrix → PortfolioReturns → VaR
//!                              ↘ covariance       → decomposition
//!                              ↘ correlation matrix
//!                              ↘ shocked returns  → stress impact
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use quantile_risk::prelude::*;
//!
//! let prices = PriceHistory::from_columns(
//!     (0..5u32)
//!         .map(|i| NaiveDate::from_ymd_opt(2025, 3, 3 + i).unwrap())
//!         .collect(),
//!     vec![("AAPL".to_string(), vec![100.0, 102.0, 101.0, 105.0, 98.0])],
//! )
//! .unwrap();
//! let portfolio = Portfolio::from_weights([("AAPL", 1.0)]).unwrap();
//! let config = EngineConfig::default();
//!
//! let metrics = all_metrics(&prices, &portfolio, &config);
//! assert!(metrics.is_computed());
//! assert!(metrics.value().var_95_historical > 0.0);
//! ```
//!
//! ## Module Overview
//!
//! - [`returns`] - Return matrices, effective weights, portfolio series
//! - [`var`] - Historical/parametric VaR and the rolling VaR analysis
//! - [`distribution`] - Volatility, Sharpe ratio, max drawdown
//! - [`correlation`] - Pairwise correlation structure
//! - [`decomposition`] - Marginal/component risk contributions
//! - [`stress`] - Scenario shocks and impact
//! - [`metrics`] - The facade: all-metrics, live metrics, valuation
//! - [`defaults`] - The documented fallback tables and fixed parameters
//! - [`config`] - Policy constants (risk-free rate, nominal value)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod correlation;
pub mod decomposition;
pub mod defaults;
pub mod distribution;
pub mod metrics;
pub mod returns;
pub mod stress;
pub mod var;

// Re-export the engine surface at crate root
pub use config::EngineConfig;
pub use correlation::correlations;
pub use decomposition::risk_decomposition;
pub use distribution::{max_drawdown, sharpe_ratio, volatility};
pub use metrics::{all_metrics, live_metrics, portfolio_snapshot};
pub use returns::{
    calculate_returns, effective_weights, portfolio_returns, weighted_price_series,
    EffectiveWeights, PortfolioReturns, ReturnsMatrix,
};
pub use stress::run_stress_tests;
pub use var::{historical_var, parametric_var, var_analysis};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use quantile_risk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::EngineConfig;
    pub use crate::correlation::correlations;
    pub use crate::decomposition::risk_decomposition;
    pub use crate::distribution::{max_drawdown, sharpe_ratio, volatility};
    pub use crate::metrics::{all_metrics, live_metrics, portfolio_snapshot};
    pub use crate::returns::{
        calculate_returns, effective_weights, portfolio_returns, EffectiveWeights,
        PortfolioReturns, ReturnsMatrix,
    };
    pub use crate::stress::run_stress_tests;
    pub use crate::var::{historical_var, parametric_var, var_analysis};

    // Re-export commonly used types from quantile-core
    pub use quantile_core::prelude::*;
}
