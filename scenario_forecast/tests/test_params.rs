//! Tests for parameter parsing, defaults and validation

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

use scenario_forecast::params::{
    DemandForecastParams, FuelPriceParams, OptimizationProfile, RouteOptimizationParams,
    WarehouseExpansionParams, DEFAULT_FUEL_INCREASE_PERCENT, DEFAULT_TIME_HORIZON_MONTHS,
};

#[test]
fn test_fuel_params_defaults() {
    let params: FuelPriceParams = serde_json::from_value(json!({})).unwrap();
    assert_eq!(params, FuelPriceParams::default());
    assert_eq!(params.fuel_increase_percent, DEFAULT_FUEL_INCREASE_PERCENT);
    assert_eq!(params.time_horizon_months, DEFAULT_TIME_HORIZON_MONTHS);
    assert_eq!(params.fuel_cost_ratio, 30.0);
    assert!(params.use_model);
}

#[test]
fn test_fuel_params_partial_payload_keeps_other_defaults() {
    let params: FuelPriceParams = serde_json::from_value(json!({
        "fuel_increase_percent": 25.0,
        "time_horizon_months": 6,
    }))
    .unwrap();
    assert_eq!(params.fuel_increase_percent, 25.0);
    assert_eq!(params.time_horizon_months, 6);
    assert_eq!(params.fuel_cost_ratio, 30.0);
}

#[test]
fn test_fuel_params_accepts_wire_alias_for_model_switch() {
    let params: FuelPriceParams =
        serde_json::from_value(json!({ "use_ml_predictions": false })).unwrap();
    assert!(!params.use_model);
}

#[rstest]
#[case(json!({"time_horizon_months": 0}))]
#[case(json!({"fuel_cost_ratio": 150.0}))]
#[case(json!({"fuel_cost_ratio": -5.0}))]
fn test_fuel_params_validation_rejects(#[case] payload: serde_json::Value) {
    let params: FuelPriceParams = serde_json::from_value(payload).unwrap();
    assert!(params.validate().is_err());
}

#[test]
fn test_fuel_params_rejects_non_finite_percent() {
    let params = FuelPriceParams {
        fuel_increase_percent: f64::INFINITY,
        ..FuelPriceParams::default()
    };
    assert!(params.validate().is_err());
}

#[rstest]
#[case(-20.0)]
#[case(0.0)]
#[case(10.0)]
#[case(100.0)]
fn test_fuel_params_accepts_any_finite_percent(#[case] percent: f64) {
    let params = FuelPriceParams {
        fuel_increase_percent: percent,
        ..FuelPriceParams::default()
    };
    assert!(params.validate().is_ok());
}

#[test]
fn test_demand_params_defaults() {
    let params: DemandForecastParams = serde_json::from_value(json!({})).unwrap();
    assert_eq!(params.demand_increase_percent, 15.0);
    assert_eq!(params.time_horizon_months, 12);
    assert!(params.use_model);
}

#[test]
fn test_demand_params_validation() {
    let ok = DemandForecastParams::default();
    assert!(ok.validate().is_ok());

    let bad = DemandForecastParams {
        time_horizon_months: 0,
        ..DemandForecastParams::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn test_warehouse_params_defaults() {
    let params: WarehouseExpansionParams = serde_json::from_value(json!({})).unwrap();
    assert_eq!(params.location, "Toronto");
    assert_eq!(params.investment_cost, 2_000_000.0);
    assert!(params.validate().is_ok());
}

#[rstest]
#[case(json!({"investment_cost": 0.0}))]
#[case(json!({"investment_cost": -100.0}))]
#[case(json!({"location": "  "}))]
fn test_warehouse_params_validation_rejects(#[case] payload: serde_json::Value) {
    let params: WarehouseExpansionParams = serde_json::from_value(payload).unwrap();
    assert!(params.validate().is_err());
}

#[rstest]
#[case("fuel_efficiency", OptimizationProfile::FuelEfficiency)]
#[case("time_efficiency", OptimizationProfile::TimeEfficiency)]
#[case("balanced", OptimizationProfile::Balanced)]
#[case("something_else", OptimizationProfile::Balanced)]
fn test_optimization_profile_wire_values(
    #[case] wire: &str,
    #[case] expected: OptimizationProfile,
) {
    let params: RouteOptimizationParams =
        serde_json::from_value(json!({ "type": wire })).unwrap();
    assert_eq!(params.profile, expected);
}

#[test]
fn test_optimization_profile_default_favors_fuel() {
    let params: RouteOptimizationParams = serde_json::from_value(json!({})).unwrap();
    assert_eq!(params.profile, OptimizationProfile::FuelEfficiency);
}

#[test]
fn test_params_echo_back_to_json() {
    let value = serde_json::to_value(FuelPriceParams::default()).unwrap();
    assert_eq!(value["fuel_increase_percent"], 10.0);
    assert_eq!(value["fuel_cost_ratio"], 30.0);
    assert_eq!(value["use_model"], true);

    let profile = serde_json::to_value(OptimizationProfile::TimeEfficiency).unwrap();
    assert_eq!(profile, "time_efficiency");
}
