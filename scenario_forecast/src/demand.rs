//! Demand forecast projection
//!
//! The dashboard's "what if demand rises X%?" scenario. Historical
//! order revenues feed the same trend and seasonality fits as the fuel
//! scenario, but the demand change ramps in linearly across the
//! horizon rather than landing all at once: month t carries t/horizon
//! of the full change, so the final month reflects the whole shift.

use insight_data::{series, SalesRecord};
use insight_math::descriptive;
use insight_math::seasonality::{SeasonalCycle, SeasonalitySignal};
use insight_math::trend::TrendFit;

use crate::error::Result;
use crate::outcome::{
    round2, DemandMonth, DemandProjection, ModelDiagnostics, ProjectionBasis,
    MIN_MODEL_OBSERVATIONS,
};
use crate::params::DemandForecastParams;

/// Average revenue assumed when no usable history exists at all.
const FALLBACK_AVG_REVENUE: f64 = 10_000.0;

/// Weight of the seasonal wave in the monthly adjustment. Demand is
/// damped harder than fuel because revenue swings propagate into the
/// capacity notes.
const SEASONAL_WEIGHT: f64 = 0.3;

/// One extra hire per this many percent of demand increase.
const DEMAND_PERCENT_PER_HIRE: f64 = 10.0;

/// Project revenue under a demand change across the horizon.
///
/// Pure function of its inputs. Thin history (fewer than two usable
/// revenues) selects the flat fallback projection instead of failing;
/// only invalid parameters produce an error.
pub fn project(
    params: &DemandForecastParams,
    records: &[SalesRecord],
) -> Result<DemandProjection> {
    params.validate()?;

    let revenues = series::revenues(records);
    if revenues.len() < MIN_MODEL_OBSERVATIONS {
        return Ok(insufficient(params, records.len(), &revenues));
    }
    Ok(modeled(params, records.len(), &revenues))
}

fn modeled(
    params: &DemandForecastParams,
    record_count: usize,
    revenues: &[f64],
) -> DemandProjection {
    let trend = TrendFit::fit(revenues);
    let seasonality = SeasonalitySignal::detect(revenues);
    let cycle = SeasonalCycle::annual();

    let avg_revenue = descriptive::mean(revenues);
    let current_monthly_revenue = avg_revenue * record_count as f64;
    let change = params.demand_increase_percent / 100.0;
    let base_increase = current_monthly_revenue * change;
    let horizon = params.time_horizon_months;

    let mut breakdown = Vec::with_capacity(horizon);
    let mut total_revenue_increase = 0.0;
    for month in 1..=horizon {
        let ramp = month as f64 / horizon as f64;
        let mut projected = current_monthly_revenue + base_increase * ramp;
        if trend.is_significant() {
            projected += trend.slope * month as f64;
        }
        if seasonality.detected {
            projected += projected * seasonality.variation * cycle.wave(month) * SEASONAL_WEIGHT;
        }
        let increase = projected - current_monthly_revenue;
        total_revenue_increase += increase;

        breakdown.push(DemandMonth {
            month: format!("Month {month}"),
            current_revenue: round2(current_monthly_revenue),
            projected_revenue: round2(projected),
            revenue_increase: round2(increase),
        });
    }

    let capacity = capacity_requirements(params, &trend, &seasonality);
    let diagnostics = ModelDiagnostics {
        trend_detected: trend.is_significant(),
        seasonality_detected: seasonality.detected,
        confidence: (trend.r_squared * 100.0).round() as u32,
        data_points: revenues.len(),
        trend_direction: None,
        seasonal_variation: None,
    };

    DemandProjection {
        scenario: "Demand Forecast".to_string(),
        model_type: "Trend Analysis + Seasonality Detection".to_string(),
        demand_increase_percent: params.demand_increase_percent,
        time_horizon_months: horizon,
        current_monthly_revenue,
        projected_monthly_revenue: current_monthly_revenue + base_increase,
        projected_revenue_increase: base_increase,
        total_revenue_increase,
        monthly_breakdown: breakdown,
        basis: ProjectionBasis::Modeled(diagnostics),
        capacity_requirements: capacity,
    }
}

fn insufficient(
    params: &DemandForecastParams,
    record_count: usize,
    revenues: &[f64],
) -> DemandProjection {
    let avg_revenue = if revenues.is_empty() {
        FALLBACK_AVG_REVENUE
    } else {
        descriptive::mean(revenues)
    };
    let current_monthly_revenue = avg_revenue * record_count as f64;
    let monthly_increase = current_monthly_revenue * (params.demand_increase_percent / 100.0);
    let projected_monthly_revenue = current_monthly_revenue + monthly_increase;

    let breakdown = (1..=params.time_horizon_months)
        .map(|month| DemandMonth {
            month: format!("Month {month}"),
            current_revenue: round2(current_monthly_revenue),
            projected_revenue: round2(projected_monthly_revenue),
            revenue_increase: round2(monthly_increase),
        })
        .collect();

    DemandProjection {
        scenario: "Demand Forecast (Insufficient Data)".to_string(),
        model_type: "Flat Baseline".to_string(),
        demand_increase_percent: params.demand_increase_percent,
        time_horizon_months: params.time_horizon_months,
        current_monthly_revenue,
        projected_monthly_revenue,
        projected_revenue_increase: monthly_increase,
        total_revenue_increase: monthly_increase * params.time_horizon_months as f64,
        monthly_breakdown: breakdown,
        basis: ProjectionBasis::Insufficient {
            note: "Not enough usable revenue history to fit a trend model".to_string(),
        },
        capacity_requirements: vec![
            "Insufficient historical data for capacity planning".to_string(),
        ],
    }
}

fn capacity_requirements(
    params: &DemandForecastParams,
    trend: &TrendFit,
    seasonality: &SeasonalitySignal,
) -> Vec<String> {
    let hires = ((params.demand_increase_percent / DEMAND_PERCENT_PER_HIRE) as i64).max(1);
    let mut capacity = vec![
        format!("Increase inventory by {}%", params.demand_increase_percent),
        format!("Consider hiring {} additional staff", hires),
    ];

    if seasonality.detected {
        capacity.push(format!(
            "Plan for {:.0}% seasonal fluctuations in demand",
            seasonality.variation * 100.0
        ));
    }
    if trend.slope > 0.0 && trend.is_strong() {
        capacity.push(
            "Historical growth trend detected - plan for sustained expansion".to_string(),
        );
    }

    capacity
}
