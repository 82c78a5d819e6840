//! Baseline estimates from pre-aggregated figures
//!
//! The dashboard's quick simulations run against one averaged rollup
//! row instead of the full record sets. They apply the percentage
//! parameters to the averages and attach static guidance; no model is
//! fit. The dispatch layer selects these when a request turns the
//! model off.

use serde::Serialize;

use insight_data::{LogisticsRecord, SalesRecord};
use insight_math::descriptive;

use crate::error::Result;
use crate::params::{DemandForecastParams, FuelPriceParams};

/// Averaged logistics rollup, one row per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogisticsSnapshot {
    /// Average shipment fuel cost across all records.
    pub avg_shipment_cost: f64,
    /// Number of shipment records.
    pub shipment_count: usize,
    /// Average fuel unit price across all records.
    pub avg_fuel_price: f64,
}

impl LogisticsSnapshot {
    /// Aggregate a record set the way the rollup query would.
    pub fn from_records(records: &[LogisticsRecord]) -> Self {
        let costs: Vec<f64> = records.iter().map(LogisticsRecord::fuel_cost).collect();
        let prices: Vec<f64> = records.iter().map(|r| r.fuel_price_per_l).collect();
        LogisticsSnapshot {
            avg_shipment_cost: descriptive::mean(&costs),
            shipment_count: records.len(),
            avg_fuel_price: descriptive::mean(&prices),
        }
    }
}

/// Averaged sales rollup, one row per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalesSnapshot {
    /// Average order revenue across all records.
    pub avg_order_revenue: f64,
    /// Number of order records.
    pub order_count: usize,
}

impl SalesSnapshot {
    /// Aggregate a record set the way the rollup query would.
    pub fn from_records(records: &[SalesRecord]) -> Self {
        let revenues: Vec<f64> = records.iter().map(|r| r.revenue).collect();
        SalesSnapshot {
            avg_order_revenue: descriptive::mean(&revenues),
            order_count: records.len(),
        }
    }
}

/// Baseline fuel-price estimate, headline figures only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelBaseline {
    pub scenario: String,
    pub fuel_increase_percent: f64,
    pub time_horizon_months: usize,
    pub current_monthly_cost: f64,
    pub projected_cost_increase: f64,
    pub total_cost_impact: f64,
    pub recommendations: Vec<String>,
}

/// Estimate the fuel-price impact from an aggregate snapshot.
pub fn fuel_price_baseline(
    params: &FuelPriceParams,
    snapshot: &LogisticsSnapshot,
) -> Result<FuelBaseline> {
    params.validate()?;

    let current_monthly_cost = snapshot.avg_shipment_cost * snapshot.shipment_count as f64;
    let monthly_impact =
        current_monthly_cost * params.fuel_cost_fraction() * (params.fuel_increase_percent / 100.0);

    Ok(FuelBaseline {
        scenario: "Fuel Price Increase".to_string(),
        fuel_increase_percent: params.fuel_increase_percent,
        time_horizon_months: params.time_horizon_months,
        current_monthly_cost,
        projected_cost_increase: monthly_impact,
        total_cost_impact: monthly_impact * params.time_horizon_months as f64,
        recommendations: vec![
            format!(
                "Consider shifting {}% of shipments to rail transport",
                (params.fuel_increase_percent * 0.5) as i64
            ),
            "Negotiate bulk fuel contracts for better rates".to_string(),
            "Optimize routes to reduce fuel consumption".to_string(),
        ],
    })
}

/// Baseline demand estimate, headline figures only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandBaseline {
    pub scenario: String,
    pub demand_increase_percent: f64,
    pub time_horizon_months: usize,
    pub current_monthly_revenue: f64,
    pub projected_revenue_increase: f64,
    pub total_revenue_increase: f64,
    pub capacity_requirements: Vec<String>,
}

/// Estimate the demand impact from an aggregate snapshot.
pub fn demand_baseline(
    params: &DemandForecastParams,
    snapshot: &SalesSnapshot,
) -> Result<DemandBaseline> {
    params.validate()?;

    let current_monthly_revenue = snapshot.avg_order_revenue * snapshot.order_count as f64;
    let monthly_increase = current_monthly_revenue * (params.demand_increase_percent / 100.0);
    let hires = ((params.demand_increase_percent / 10.0) as i64).max(1);

    Ok(DemandBaseline {
        scenario: "Demand Forecast".to_string(),
        demand_increase_percent: params.demand_increase_percent,
        time_horizon_months: params.time_horizon_months,
        current_monthly_revenue,
        projected_revenue_increase: monthly_increase,
        total_revenue_increase: monthly_increase * params.time_horizon_months as f64,
        capacity_requirements: vec![
            format!("Increase inventory by {}%", params.demand_increase_percent),
            format!("Consider hiring {} additional staff", hires),
            "Plan for warehouse expansion if growth exceeds 25%".to_string(),
        ],
    })
}
