//! Simulation parameter structs
//!
//! Each scenario accepts a `parameters` mapping from the dashboard.
//! These structs give that mapping named fields, documented defaults
//! and one validation pass at the boundary, so the projection code can
//! assume clean inputs. Percentages arrive in percent units (10 means
//! a 10% change) and may be negative where a decrease is a meaningful
//! what-if.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScenarioError};

/// Default fuel price increase, percent.
pub const DEFAULT_FUEL_INCREASE_PERCENT: f64 = 10.0;

/// Default demand increase, percent.
pub const DEFAULT_DEMAND_INCREASE_PERCENT: f64 = 15.0;

/// Default projection horizon, months.
pub const DEFAULT_TIME_HORIZON_MONTHS: usize = 12;

/// Default share of shipment cost attributed to fuel, percent.
pub const DEFAULT_FUEL_COST_RATIO_PERCENT: f64 = 30.0;

/// Default warehouse location.
pub const DEFAULT_WAREHOUSE_LOCATION: &str = "Toronto";

/// Default warehouse investment cost.
pub const DEFAULT_WAREHOUSE_INVESTMENT: f64 = 2_000_000.0;

/// Parameters for the fuel-price impact scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuelPriceParams {
    /// Assumed fuel price change, percent.
    pub fuel_increase_percent: f64,
    /// Projection horizon in months.
    pub time_horizon_months: usize,
    /// Share of shipment cost attributed to fuel, percent.
    pub fuel_cost_ratio: f64,
    /// Fit the trend and seasonality model; when false the scenario
    /// falls back to the baseline estimate from aggregates.
    #[serde(alias = "use_ml_predictions")]
    pub use_model: bool,
}

impl Default for FuelPriceParams {
    fn default() -> Self {
        FuelPriceParams {
            fuel_increase_percent: DEFAULT_FUEL_INCREASE_PERCENT,
            time_horizon_months: DEFAULT_TIME_HORIZON_MONTHS,
            fuel_cost_ratio: DEFAULT_FUEL_COST_RATIO_PERCENT,
            use_model: true,
        }
    }
}

impl FuelPriceParams {
    /// Check ranges once at the boundary. The price change must be
    /// finite (negative is fine), the horizon must cover at least one
    /// month and the cost ratio must stay within 0-100 percent.
    pub fn validate(&self) -> Result<()> {
        if !self.fuel_increase_percent.is_finite() {
            return Err(ScenarioError::InvalidParameter(
                "fuel_increase_percent must be a finite number".to_string(),
            ));
        }
        if self.time_horizon_months == 0 {
            return Err(ScenarioError::InvalidParameter(
                "time_horizon_months must be at least 1".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.fuel_cost_ratio) {
            return Err(ScenarioError::InvalidParameter(
                "fuel_cost_ratio must be between 0 and 100 percent".to_string(),
            ));
        }
        Ok(())
    }

    /// Fuel cost ratio as a fraction of total shipment cost.
    pub fn fuel_cost_fraction(&self) -> f64 {
        self.fuel_cost_ratio / 100.0
    }
}

/// Parameters for the demand forecast scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandForecastParams {
    /// Assumed demand change, percent.
    pub demand_increase_percent: f64,
    /// Projection horizon in months.
    pub time_horizon_months: usize,
    /// Fit the trend and seasonality model; when false the scenario
    /// falls back to the baseline estimate from aggregates.
    #[serde(alias = "use_ml_predictions")]
    pub use_model: bool,
}

impl Default for DemandForecastParams {
    fn default() -> Self {
        DemandForecastParams {
            demand_increase_percent: DEFAULT_DEMAND_INCREASE_PERCENT,
            time_horizon_months: DEFAULT_TIME_HORIZON_MONTHS,
            use_model: true,
        }
    }
}

impl DemandForecastParams {
    /// Check ranges once at the boundary.
    pub fn validate(&self) -> Result<()> {
        if !self.demand_increase_percent.is_finite() {
            return Err(ScenarioError::InvalidParameter(
                "demand_increase_percent must be a finite number".to_string(),
            ));
        }
        if self.time_horizon_months == 0 {
            return Err(ScenarioError::InvalidParameter(
                "time_horizon_months must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for the warehouse expansion scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehouseExpansionParams {
    /// Region the new warehouse would serve.
    pub location: String,
    /// Upfront investment cost.
    pub investment_cost: f64,
}

impl Default for WarehouseExpansionParams {
    fn default() -> Self {
        WarehouseExpansionParams {
            location: DEFAULT_WAREHOUSE_LOCATION.to_string(),
            investment_cost: DEFAULT_WAREHOUSE_INVESTMENT,
        }
    }
}

impl WarehouseExpansionParams {
    /// Check ranges once at the boundary.
    pub fn validate(&self) -> Result<()> {
        if !self.investment_cost.is_finite() || self.investment_cost <= 0.0 {
            return Err(ScenarioError::InvalidParameter(
                "investment_cost must be a positive number".to_string(),
            ));
        }
        if self.location.trim().is_empty() {
            return Err(ScenarioError::InvalidParameter(
                "location must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Optimization profile for the route scenario.
///
/// Unrecognized wire values fall back to `Balanced` rather than
/// failing the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum OptimizationProfile {
    #[default]
    FuelEfficiency,
    TimeEfficiency,
    Balanced,
}

impl From<String> for OptimizationProfile {
    fn from(value: String) -> Self {
        match value.as_str() {
            "fuel_efficiency" => OptimizationProfile::FuelEfficiency,
            "time_efficiency" => OptimizationProfile::TimeEfficiency,
            _ => OptimizationProfile::Balanced,
        }
    }
}

/// Parameters for the route optimization scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptimizationParams {
    /// What the optimizer should favor.
    #[serde(rename = "type")]
    pub profile: OptimizationProfile,
}
