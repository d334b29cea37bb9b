//! Core domain types.

mod confidence;
mod portfolio;
mod price;
mod results;
mod scenario;

pub use confidence::ConfidenceLevel;
pub use portfolio::{Portfolio, PortfolioBuilder, Position};
pub use price::{LiveQuotes, PriceHistory, PricePoint};
pub use results::{
    AlertKind, AlertSeverity, AllMetrics, CorrelationAnalysis, CorrelationPair, LiveMetrics,
    PortfolioSnapshot, PositionSnapshot, ReturnsDistribution, ReturnsStats, RiskAlert,
    RiskContribution, RiskDecomposition, ScenarioImpact, StressTestReport, VarAnalysis, VarPoint,
};
pub use scenario::StressScenario;
