//! End-to-end tests of the engine surface against the documented contract.

use chrono::NaiveDate;
use quantile_core::prelude::*;
use quantile_risk::prelude::*;

fn dates(n: usize) -> Vec<NaiveDate> {
    (0..n as u64)
        .map(|i| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i))
        .collect()
}

fn single_asset_history() -> PriceHistory {
    PriceHistory::from_columns(
        dates(5),
        vec![("AAPL".to_string(), vec![100.0, 102.0, 101.0, 105.0, 98.0])],
    )
    .unwrap()
}

// =============================================================================
// CONCRETE CONTRACT SCENARIOS
// =============================================================================

#[test]
fn single_asset_returns_and_var() {
    let prices = single_asset_history();
    let portfolio = Portfolio::from_weights([("AAPL", 1.0)]).unwrap();

    let returns = calculate_returns(&prices);
    assert_eq!(returns.len(), 4);

    let expected = [
        0.02,
        (101.0 - 102.0) / 102.0,
        (105.0 - 101.0) / 101.0,
        (98.0 - 105.0) / 105.0,
    ];
    for (i, e) in expected.iter().enumerate() {
        assert!((returns.values()[(i, 0)] - e).abs() < 1e-12);
    }

    // Historical VaR(95%) is the negated 5th percentile of the 4-point
    // series: interpolating 15% of the way from the lowest to the
    // second-lowest value.
    let series = portfolio_returns(&returns, &portfolio);
    let var_95 = historical_var(series.values(), 0.95);

    let mut sorted = expected;
    sorted.sort_by(f64::total_cmp);
    let expected_var = -(sorted[0] + 0.15 * (sorted[1] - sorted[0]));
    assert!((var_95 - expected_var).abs() < 1e-12);
}

#[test]
fn empty_history_yields_exact_fallback_metrics() {
    let prices = PriceHistory::from_columns(Vec::new(), Vec::new()).unwrap();
    let portfolio = Portfolio::from_weights([("AAPL", 0.5), ("MSFT", 0.5)]).unwrap();

    let analysis = all_metrics(&prices, &portfolio, &EngineConfig::default());
    assert!(analysis.is_insufficient());
    let metrics = analysis.into_inner();

    assert_eq!(metrics.sharpe_ratio, 1.24);
    assert_eq!(metrics.max_drawdown, -0.0821);
    assert_eq!(metrics.var_95_historical, 0.0234);
    assert_eq!(metrics.var_99_historical, 0.0412);
    assert_eq!(metrics.var_95_parametric, 0.0256);
    assert_eq!(metrics.var_99_parametric, 0.0445);
    assert_eq!(metrics.volatility_annual, 0.1856);
    assert_eq!(metrics.returns_stats.daily_mean, 0.0008);
    assert_eq!(metrics.returns_stats.daily_std, 0.0117);
    assert_eq!(metrics.returns_stats.annual_return, 0.2016);
    assert_eq!(metrics.returns_stats.skewness, -0.234);
    assert_eq!(metrics.returns_stats.kurtosis, 3.456);
}

#[test]
fn identical_return_series_correlate_exactly_one() {
    // B is A scaled by a constant factor: identical return series.
    let prices = PriceHistory::from_columns(
        dates(5),
        vec![
            ("A".to_string(), vec![100.0, 102.0, 101.0, 105.0, 98.0]),
            ("B".to_string(), vec![200.0, 204.0, 202.0, 210.0, 196.0]),
        ],
    )
    .unwrap();

    let result = correlations(&prices);
    assert!(result.is_computed());
    assert_eq!(result.value().matrix["A"]["B"], 1.0);
}

#[test]
fn unnormalized_weights_renormalize() {
    let prices = PriceHistory::from_columns(
        dates(3),
        vec![
            ("A".to_string(), vec![100.0, 101.0, 102.0]),
            ("B".to_string(), vec![50.0, 50.5, 51.0]),
        ],
    )
    .unwrap();
    let portfolio = Portfolio::from_weights([("A", 0.6), ("B", 0.6)]).unwrap();

    let returns = calculate_returns(&prices);
    let effective = effective_weights(&returns, &portfolio);

    assert_eq!(effective.tickers.len(), 2);
    for w in &effective.weights {
        assert!((w - 0.5).abs() < 1e-9);
    }
}

#[test]
fn zero_shock_scenario_reproduces_baseline_var() {
    let prices = single_asset_history();
    let portfolio = Portfolio::from_weights([("AAPL", 1.0)]).unwrap();
    let config = EngineConfig::default();

    let returns = calculate_returns(&prices);
    let baseline = historical_var(portfolio_returns(&returns, &portfolio).values(), 0.95);

    let scenarios = [StressScenario::new("No-op").with_market_shock(0.0)];
    let report = run_stress_tests(&prices, &portfolio, &scenarios, &config);

    assert_eq!(report.scenarios[0].var_95, baseline);
    assert_eq!(report.current_value, 1_000_000.0);
}

// =============================================================================
// CROSS-COMPONENT CONSISTENCY
// =============================================================================

#[test]
fn var_analysis_headline_matches_all_metrics() {
    let prices = PriceHistory::from_columns(
        dates(6),
        vec![
            ("A".to_string(), vec![100.0, 102.0, 99.0, 104.0, 101.0, 106.0]),
            ("B".to_string(), vec![50.0, 49.5, 51.0, 50.2, 52.0, 51.5]),
        ],
    )
    .unwrap();
    let portfolio = Portfolio::from_weights([("A", 0.7), ("B", 0.3)]).unwrap();
    let config = EngineConfig::default();

    let var = var_analysis(&prices, &portfolio).into_inner();
    let metrics = all_metrics(&prices, &portfolio, &config).into_inner();

    assert_eq!(var.historical["95%"], metrics.var_95_historical);
    assert_eq!(var.historical["99%"], metrics.var_99_historical);
    assert_eq!(var.parametric["95%"], metrics.var_95_parametric);
    assert_eq!(var.returns_distribution.mean, metrics.returns_stats.daily_mean);
    assert_eq!(var.returns_distribution.std, metrics.returns_stats.daily_std);
}

#[test]
fn decomposition_single_asset_vol_matches_annualized_volatility() {
    let prices = single_asset_history();
    let portfolio = Portfolio::from_weights([("AAPL", 1.0)]).unwrap();
    let config = EngineConfig::default();

    let decomp = risk_decomposition(&prices, &portfolio).into_inner();
    let metrics = all_metrics(&prices, &portfolio, &config).into_inner();

    // One asset: portfolio volatility is the asset's annualized volatility.
    assert!((decomp.portfolio_volatility - metrics.volatility_annual).abs() < 1e-9);
}

// =============================================================================
// WIRE SHAPE
// =============================================================================

#[test]
fn all_metrics_wire_shape() {
    let prices = single_asset_history();
    let portfolio = Portfolio::from_weights([("AAPL", 1.0)]).unwrap();

    let metrics = all_metrics(&prices, &portfolio, &EngineConfig::default());
    let json = serde_json::to_value(&metrics).unwrap();

    for field in [
        "var_95_historical",
        "var_99_historical",
        "var_95_parametric",
        "var_99_parametric",
        "volatility_annual",
        "sharpe_ratio",
        "max_drawdown",
        "returns_stats",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
    let stats = &json["returns_stats"];
    for field in ["daily_mean", "daily_std", "annual_return", "skewness", "kurtosis"] {
        assert!(stats.get(field).is_some(), "missing field {field}");
    }
}

#[test]
fn var_analysis_wire_shape() {
    let prices = single_asset_history();
    let portfolio = Portfolio::from_weights([("AAPL", 1.0)]).unwrap();

    let json = serde_json::to_value(var_analysis(&prices, &portfolio)).unwrap();
    assert!(json["historical"].get("90%").is_some());
    assert!(json["historical"].get("95%").is_some());
    assert!(json["historical"].get("99%").is_some());
    assert!(json["parametric"].get("95%").is_some());
    assert!(json["returns_distribution"].get("skew").is_some());
    assert!(json["time_series"].is_array());
}

#[test]
fn stress_report_wire_shape() {
    let prices = single_asset_history();
    let portfolio = Portfolio::from_weights([("AAPL", 1.0)]).unwrap();
    let scenarios = [StressScenario::new("Crash")
        .with_market_shock(-0.2)
        .with_probability("Low")];

    let report = run_stress_tests(&prices, &portfolio, &scenarios, &EngineConfig::default());
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["current_value"], 1_000_000.0);
    let scenario = &json["scenarios"][0];
    assert_eq!(scenario["scenario_name"], "Crash");
    assert_eq!(scenario["probability"], "Low");
    assert!(scenario.get("var_95").is_some());
    assert!(scenario.get("expected_loss").is_some());
}

#[test]
fn decomposition_wire_shape() {
    let prices = single_asset_history();
    let portfolio = Portfolio::from_weights([("AAPL", 1.0)]).unwrap();

    let json = serde_json::to_value(risk_decomposition(&prices, &portfolio)).unwrap();
    assert!(json.get("portfolio_volatility").is_some());
    let contribution = &json["risk_contributions"]["AAPL"];
    for field in [
        "weight",
        "marginal_contribution",
        "total_contribution",
        "percentage_contribution",
    ] {
        assert!(contribution.get(field).is_some(), "missing field {field}");
    }
}

#[test]
fn correlation_wire_shape() {
    let prices = PriceHistory::from_columns(
        dates(4),
        vec![
            ("A".to_string(), vec![100.0, 102.0, 99.0, 104.0]),
            ("B".to_string(), vec![50.0, 49.5, 51.0, 50.2]),
        ],
    )
    .unwrap();

    let json = serde_json::to_value(correlations(&prices)).unwrap();
    assert!(json["matrix"]["A"].get("B").is_some());
    assert!(json["highest_correlations"].is_array());
    assert!(json["lowest_correlations"].is_array());
    assert!(json.get("average_correlation").is_some());
}
