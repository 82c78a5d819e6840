//! Scenario dispatch
//!
//! Maps the dashboard's `{"type": ..., "parameters": {...}}` request
//! shape onto the concrete scenarios and runs them against a dataset
//! bundle. Free-text questions from the query box route here too.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::baseline::{self, LogisticsSnapshot, SalesSnapshot};
use crate::dataset::Datasets;
use crate::demand;
use crate::error::{Result, ScenarioError};
use crate::fuel_price;
use crate::params::{
    DemandForecastParams, FuelPriceParams, RouteOptimizationParams, WarehouseExpansionParams,
};
use crate::route::{self, CurrentRouteMetrics};
use crate::warehouse::{self, RegionalActivity};

/// The what-if scenarios the dashboard can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    FuelPrice,
    DemandForecast,
    WarehouseExpansion,
    RouteOptimization,
}

/// Every scenario the engine knows, in dispatch order.
pub const SCENARIO_KINDS: [ScenarioKind; 4] = [
    ScenarioKind::FuelPrice,
    ScenarioKind::DemandForecast,
    ScenarioKind::WarehouseExpansion,
    ScenarioKind::RouteOptimization,
];

impl ScenarioKind {
    /// Wire name used in request payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioKind::FuelPrice => "fuel_price",
            ScenarioKind::DemandForecast => "demand_forecast",
            ScenarioKind::WarehouseExpansion => "warehouse_expansion",
            ScenarioKind::RouteOptimization => "route_optimization",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScenarioKind {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self> {
        SCENARIO_KINDS
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = SCENARIO_KINDS.iter().map(|k| k.as_str()).collect();
                ScenarioError::UnknownScenario(format!(
                    "{} (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// A simulation request as posted by the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRequest {
    /// Wire name of the scenario to run.
    #[serde(rename = "type")]
    pub kind: String,
    /// Scenario parameters; omitted fields take their defaults.
    #[serde(default)]
    pub parameters: serde_json::Value,
}

/// Run `request` against `data`, returning the dashboard payload.
///
/// The fuel and demand scenarios honor the request's model switch:
/// with the model turned off they answer from aggregate snapshots
/// instead of fitting trends.
pub fn run_scenario(request: &ScenarioRequest, data: &Datasets) -> Result<serde_json::Value> {
    match ScenarioKind::from_str(&request.kind)? {
        ScenarioKind::FuelPrice => {
            let params: FuelPriceParams = scenario_params(&request.parameters)?;
            if params.use_model {
                to_payload(fuel_price::project(&params, &data.logistics)?)
            } else {
                let snapshot = LogisticsSnapshot::from_records(&data.logistics);
                to_payload(baseline::fuel_price_baseline(&params, &snapshot)?)
            }
        }
        ScenarioKind::DemandForecast => {
            let params: DemandForecastParams = scenario_params(&request.parameters)?;
            if params.use_model {
                to_payload(demand::project(&params, &data.sales)?)
            } else {
                let snapshot = SalesSnapshot::from_records(&data.sales);
                to_payload(baseline::demand_baseline(&params, &snapshot)?)
            }
        }
        ScenarioKind::WarehouseExpansion => {
            let params: WarehouseExpansionParams = scenario_params(&request.parameters)?;
            let activity = RegionalActivity::from_records(&data.logistics, &params.location);
            to_payload(warehouse::project(&params, &activity)?)
        }
        ScenarioKind::RouteOptimization => {
            let params: RouteOptimizationParams = scenario_params(&request.parameters)?;
            let metrics = CurrentRouteMetrics::from_records(&data.logistics);
            to_payload(route::project(&params, &metrics))
        }
    }
}

/// Route a free-text dashboard question to a scenario kind.
///
/// Keyword matching, case-insensitive. Questions that fit no scenario
/// return `None` so the caller can fall back to generic analytics.
pub fn route_query(query: &str) -> Option<ScenarioKind> {
    let q = query.to_lowercase();
    if q.contains("fuel price") && q.contains("increase") {
        Some(ScenarioKind::FuelPrice)
    } else if q.contains("warehouse") && q.contains("new") {
        Some(ScenarioKind::WarehouseExpansion)
    } else if q.contains("demand") && q.contains("increase") {
        Some(ScenarioKind::DemandForecast)
    } else {
        None
    }
}

fn scenario_params<T: DeserializeOwned + Default>(value: &serde_json::Value) -> Result<T> {
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value.clone())?)
}

fn to_payload<T: Serialize>(outcome: T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(outcome)?)
}
