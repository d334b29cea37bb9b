//! Configuration for the risk engine.

use serde::{Deserialize, Serialize};

/// Policy constants the engine's dollar- and rate-denominated outputs are
/// scaled against.
///
/// The defaults reproduce the dashboard's historical behavior; annualization
/// factors, rolling-window sizes, and fallback tables are part of the
/// output contract and deliberately not configurable (see
/// [`crate::defaults`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Annual risk-free rate used for excess returns (decimal).
    pub risk_free_rate: f64,

    /// Nominal portfolio value stress losses are scaled against.
    pub nominal_value: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.045,
            nominal_value: 1_000_000.0,
        }
    }
}

impl EngineConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annual risk-free rate.
    #[must_use]
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Sets the nominal portfolio value.
    #[must_use]
    pub fn with_nominal_value(mut self, value: f64) -> Self {
        self.nominal_value = value;
        self
    }
}
