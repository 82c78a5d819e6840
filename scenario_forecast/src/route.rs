//! Route optimization scenario
//!
//! Applies fixed improvement factors for the chosen optimization
//! profile to the fleet's current averages. The factors are planning
//! assumptions, not fitted values.

use serde::Serialize;

use insight_data::LogisticsRecord;
use insight_math::descriptive;

use crate::outcome::round2;
use crate::params::{OptimizationProfile, RouteOptimizationParams};

/// Shipments per month assumed when projecting savings.
const ASSUMED_MONTHLY_SHIPMENTS: f64 = 1000.0;

impl OptimizationProfile {
    /// Improvement factors `(cost reduction, delivery-time change)` as
    /// fractions. A negative time change is a faster delivery.
    pub fn improvement_factors(&self) -> (f64, f64) {
        match self {
            OptimizationProfile::FuelEfficiency => (0.15, 0.05),
            OptimizationProfile::TimeEfficiency => (0.05, -0.20),
            OptimizationProfile::Balanced => (0.10, -0.10),
        }
    }
}

/// Current fleet averages the optimization is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurrentRouteMetrics {
    /// Average fuel cost per shipment.
    pub avg_cost: f64,
    /// Average delivery delay, hours.
    pub avg_delay_hr: f64,
    /// Average fuel unit price.
    pub avg_fuel_price: f64,
}

impl CurrentRouteMetrics {
    /// Aggregate fleet-wide averages from the record set.
    pub fn from_records(records: &[LogisticsRecord]) -> Self {
        let costs: Vec<f64> = records.iter().map(LogisticsRecord::fuel_cost).collect();
        let delays: Vec<f64> = records.iter().map(|r| r.delay_hr).collect();
        let prices: Vec<f64> = records.iter().map(|r| r.fuel_price_per_l).collect();
        CurrentRouteMetrics {
            avg_cost: descriptive::mean(&costs),
            avg_delay_hr: descriptive::mean(&delays),
            avg_fuel_price: descriptive::mean(&prices),
        }
    }
}

/// Projected effect of the chosen optimization profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RouteImprovements {
    /// Shipment cost reduction, percent.
    pub cost_reduction_percent: f64,
    /// Magnitude of the delivery-time change, percent.
    pub time_change_percent: f64,
    /// Estimated monthly savings at the assumed shipment volume.
    pub monthly_savings: f64,
}

/// Outcome of the route optimization scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOptimization {
    pub scenario: String,
    /// Profile the projection assumed.
    pub optimization_type: OptimizationProfile,
    /// Fleet averages before optimization.
    pub current_metrics: CurrentRouteMetrics,
    pub projected_improvements: RouteImprovements,
}

/// Project the effect of route optimization on the fleet averages.
pub fn project(
    params: &RouteOptimizationParams,
    metrics: &CurrentRouteMetrics,
) -> RouteOptimization {
    let (cost_reduction, time_change) = params.profile.improvement_factors();

    RouteOptimization {
        scenario: "Route Optimization".to_string(),
        optimization_type: params.profile,
        current_metrics: *metrics,
        projected_improvements: RouteImprovements {
            cost_reduction_percent: cost_reduction * 100.0,
            time_change_percent: time_change.abs() * 100.0,
            monthly_savings: round2(metrics.avg_cost * ASSUMED_MONTHLY_SHIPMENTS * cost_reduction),
        },
    }
}
