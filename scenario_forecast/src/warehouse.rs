//! Warehouse expansion scenario
//!
//! Estimates what a new warehouse in a region would save: an in-region
//! site is assumed to remove a fixed share of that region's shipping
//! cost, and the savings are weighed against the investment.

use serde::Serialize;

use insight_data::LogisticsRecord;
use insight_math::descriptive;

use crate::error::Result;
use crate::outcome::round2;
use crate::params::WarehouseExpansionParams;

/// Share of regional shipping cost a local warehouse removes.
const REGIONAL_COST_REDUCTION: f64 = 0.25;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Shipping activity observed in one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionalActivity {
    /// Average fuel cost of the region's shipments.
    pub avg_shipment_cost: f64,
    /// Monthly shipment count for the region.
    pub shipment_count: usize,
}

impl RegionalActivity {
    /// Aggregate the records whose region matches `region`.
    pub fn from_records(records: &[LogisticsRecord], region: &str) -> Self {
        let costs: Vec<f64> = records
            .iter()
            .filter(|r| r.region == region)
            .map(LogisticsRecord::fuel_cost)
            .collect();
        RegionalActivity {
            avg_shipment_cost: descriptive::mean(&costs),
            shipment_count: costs.len(),
        }
    }
}

/// Outcome of the warehouse expansion scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarehouseExpansion {
    pub scenario: String,
    /// Region evaluated.
    pub location: String,
    /// Echoed investment cost.
    pub investment_cost: f64,
    /// Estimated yearly shipping savings from the new site.
    pub annual_savings: f64,
    /// Years to recoup the investment. `None` when the region shows no
    /// shipping activity to save on.
    pub payback_period_years: Option<f64>,
    /// Yearly return on the investment, percent. `None` alongside the
    /// payback period.
    pub roi_percent: Option<f64>,
    pub recommendations: Vec<String>,
}

/// Evaluate a warehouse expansion against the region's activity.
pub fn project(
    params: &WarehouseExpansionParams,
    activity: &RegionalActivity,
) -> Result<WarehouseExpansion> {
    params.validate()?;

    let annual_savings = activity.avg_shipment_cost
        * activity.shipment_count as f64
        * MONTHS_PER_YEAR
        * REGIONAL_COST_REDUCTION;

    let (payback_period_years, roi_percent, recommendations) = if annual_savings > 0.0 {
        let payback = round2(params.investment_cost / annual_savings);
        let roi = round2(annual_savings / params.investment_cost * 100.0);
        let recommendations = vec![
            format!("Payback period: {:.1} years", payback),
            format!("ROI of {:.1}% annually", roi),
            "Consider hiring 3 additional staff for operations".to_string(),
        ];
        (Some(payback), Some(roi), recommendations)
    } else {
        let recommendations = vec![format!(
            "No recorded shipping activity in {}; savings cannot be estimated",
            params.location
        )];
        (None, None, recommendations)
    };

    Ok(WarehouseExpansion {
        scenario: "Warehouse Expansion".to_string(),
        location: params.location.clone(),
        investment_cost: params.investment_cost,
        annual_savings: round2(annual_savings),
        payback_period_years,
        roi_percent,
        recommendations,
    })
}
