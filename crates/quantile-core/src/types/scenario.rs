//! Stress scenario definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_scenario_name() -> String {
    "Custom Scenario".to_string()
}

/// A stress scenario: a market-wide shock and/or per-asset shocks applied
/// multiplicatively to historical returns.
///
/// Shocks are decimal fractions: a `market_shock` of -0.20 scales every
/// return by 0.8. `probability` is a free-form qualitative label passed
/// through to the report ("N/A" when absent).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressScenario {
    /// Scenario name; defaults to "Custom Scenario" when absent from input.
    #[serde(default = "default_scenario_name")]
    pub name: String,

    /// Shock applied to every return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_shock: Option<f64>,

    /// Shocks applied to individual tickers' returns.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub asset_shocks: HashMap<String, f64>,

    /// Qualitative probability label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<String>,
}

impl StressScenario {
    /// Creates a new scenario with no shocks.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            market_shock: None,
            asset_shocks: HashMap::new(),
            probability: None,
        }
    }

    /// Sets the market-wide shock.
    #[must_use]
    pub fn with_market_shock(mut self, shock: f64) -> Self {
        self.market_shock = Some(shock);
        self
    }

    /// Adds a per-asset shock.
    #[must_use]
    pub fn with_asset_shock(mut self, ticker: impl Into<String>, shock: f64) -> Self {
        self.asset_shocks.insert(ticker.into(), shock);
        self
    }

    /// Sets the qualitative probability label.
    #[must_use]
    pub fn with_probability(mut self, probability: impl Into<String>) -> Self {
        self.probability = Some(probability.into());
        self
    }

    /// Returns true if this scenario shocks anything at all.
    #[must_use]
    pub fn has_shocks(&self) -> bool {
        self.market_shock.is_some() || !self.asset_shocks.is_empty()
    }
}

/// Standard stress scenarios commonly shown on the dashboard.
pub mod standard {
    use super::StressScenario;

    /// Broad -20% market crash.
    #[must_use]
    pub fn market_crash() -> StressScenario {
        StressScenario::new("Market Crash")
            .with_market_shock(-0.20)
            .with_probability("Low")
    }

    /// Broad -10% correction.
    #[must_use]
    pub fn market_correction() -> StressScenario {
        StressScenario::new("Market Correction")
            .with_market_shock(-0.10)
            .with_probability("Medium")
    }

    /// Large-cap tech drawdown.
    #[must_use]
    pub fn tech_selloff() -> StressScenario {
        StressScenario::new("Tech Selloff")
            .with_asset_shock("AAPL", -0.15)
            .with_asset_shock("MSFT", -0.15)
            .with_asset_shock("GOOGL", -0.15)
            .with_asset_shock("NVDA", -0.25)
            .with_probability("Medium")
    }

    /// Crypto repricing.
    #[must_use]
    pub fn crypto_winter() -> StressScenario {
        StressScenario::new("Crypto Winter")
            .with_asset_shock("BTC-USD", -0.50)
            .with_asset_shock("ETH-USD", -0.55)
            .with_probability("Medium")
    }

    /// Returns all standard scenarios.
    #[must_use]
    pub fn all() -> Vec<StressScenario> {
        vec![
            market_crash(),
            market_correction(),
            tech_selloff(),
            crypto_winter(),
        ]
    }
}
