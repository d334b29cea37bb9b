//! Stress testing: shock application and scenario impact.

use crate::config::EngineConfig;
use crate::defaults;
use crate::returns::{calculate_returns, portfolio_returns, ReturnsMatrix};
use crate::var::historical_var;
use quantile_core::types::{ScenarioImpact, StressTestReport};
use quantile_core::{ConfidenceLevel, Portfolio, PriceHistory, StressScenario};
use tracing::warn;

/// Runs a list of stress scenarios against a portfolio.
///
/// Each scenario's shocks scale the historical returns (market-wide shock
/// first, then per-asset shocks on matching columns); the shocked matrix
/// collapses to portfolio returns and the 95% historical VaR prices the
/// expected loss against the nominal portfolio value. An empty return
/// matrix, or a scenario whose shocked series has no portfolio overlap,
/// produces the documented per-scenario fallback.
#[must_use]
pub fn run_stress_tests(
    prices: &PriceHistory,
    portfolio: &Portfolio,
    scenarios: &[StressScenario],
    config: &EngineConfig,
) -> StressTestReport {
    let returns = calculate_returns(prices);
    if returns.is_empty() {
        warn!("stress tests: no return rows, serving per-scenario fallbacks");
        return StressTestReport {
            scenarios: scenarios
                .iter()
                .map(defaults::fallback_scenario_impact)
                .collect(),
            current_value: config.nominal_value,
        };
    }

    let confidence = ConfidenceLevel::NinetyFive.level();
    let impacts = scenarios
        .iter()
        .map(|scenario| {
            let shocked = apply_shocks(&returns, scenario);
            let series = portfolio_returns(&shocked, portfolio);
            if series.is_empty() {
                return defaults::fallback_scenario_impact(scenario);
            }

            let var_95 = historical_var(series.values(), confidence);
            ScenarioImpact {
                scenario_name: scenario.name.clone(),
                var_95,
                expected_loss: config.nominal_value * var_95,
                probability: scenario
                    .probability
                    .clone()
                    .unwrap_or_else(|| "N/A".to_string()),
            }
        })
        .collect();

    StressTestReport {
        scenarios: impacts,
        current_value: config.nominal_value,
    }
}

/// Applies a scenario's shocks to a return matrix.
fn apply_shocks(returns: &ReturnsMatrix, scenario: &StressScenario) -> ReturnsMatrix {
    let mut values = returns.values().clone();

    if let Some(shock) = scenario.market_shock {
        values *= 1.0 + shock;
    }
    for (ticker, shock) in &scenario.asset_shocks {
        if let Some(index) = returns.ticker_index(ticker) {
            values.column_mut(index).scale_mut(1.0 + shock);
        }
    }

    ReturnsMatrix::from_parts(
        returns.tickers().to_vec(),
        returns.dates().to_vec(),
        values,
    )
}
