//! # Quantile Core
//!
//! Core types for the Quantile portfolio risk analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Quantile:
//!
//! - **Market data types**: `PriceHistory`, `PricePoint`, `LiveQuotes`
//! - **Portfolio types**: `Portfolio`, `Position`, `PortfolioBuilder`
//! - **Analysis inputs**: `ConfidenceLevel`, `StressScenario`
//! - **Result objects**: the serialized shapes consumed by the dashboard
//!   (`AllMetrics`, `VarAnalysis`, `CorrelationAnalysis`, ...)
//! - **Provenance**: `Analysis<T>`, distinguishing computed analytics from
//!   documented fallback placeholders
//!
//! ## Design Philosophy
//!
//! - **Pure data**: every type here is plain, immutable data with no I/O
//! - **Validated construction**: constructors return typed errors instead of
//!   accepting malformed inputs
//! - **Stable wire shape**: result objects serialize to the exact field
//!   names the serving layer forwards to clients

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

pub mod analysis;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::Analysis;
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        AllMetrics, ConfidenceLevel, CorrelationAnalysis, CorrelationPair, LiveMetrics,
        LiveQuotes, Portfolio, PortfolioBuilder, PortfolioSnapshot, Position, PriceHistory,
        PricePoint, ReturnsDistribution, ReturnsStats, RiskAlert, RiskContribution,
        RiskDecomposition, ScenarioImpact, StressScenario, StressTestReport, VarAnalysis,
        VarPoint,
    };
}

// Re-export commonly used types at crate root
pub use analysis::Analysis;
pub use error::{CoreError, CoreResult};
pub use types::{
    AllMetrics, ConfidenceLevel, LiveQuotes, Portfolio, PriceHistory, StressScenario,
};
