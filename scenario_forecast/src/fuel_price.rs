//! Fuel-price impact projection
//!
//! The dashboard's "what if fuel prices rise X%?" scenario. Historical
//! per-shipment fuel costs feed a linear trend fit and a seasonality
//! signal; the projection then spreads the price change over the
//! requested horizon, bending each month by the fitted trend and the
//! seasonal wave and bracketing it with a confidence band.

use insight_data::{series, LogisticsRecord};
use insight_math::descriptive;
use insight_math::seasonality::{SeasonalCycle, SeasonalitySignal};
use insight_math::trend::TrendFit;

use crate::error::Result;
use crate::outcome::{
    round1, round2, FuelMonth, FuelPriceProjection, ModelDiagnostics, ProjectionBasis,
    Recommendation, Severity, MIN_MODEL_OBSERVATIONS,
};
use crate::params::FuelPriceParams;

/// Average cost assumed when no usable history exists at all.
const FALLBACK_AVG_COST: f64 = 1000.0;

/// Half-width of the confidence band, as a fraction of the projected
/// value.
const CONFIDENCE_BAND: f64 = 0.20;

/// Weight of the seasonal wave in the monthly adjustment.
const SEASONAL_WEIGHT: f64 = 0.5;

/// Price changes above this many percent count as high impact in the
/// recommendations.
const HIGH_IMPACT_PERCENT: f64 = 15.0;

/// Project the cost impact of a fuel price change across the horizon.
///
/// Pure function of its inputs. Thin history (fewer than two usable
/// fuel costs) selects the flat fallback projection instead of
/// failing; only invalid parameters produce an error.
pub fn project(
    params: &FuelPriceParams,
    records: &[LogisticsRecord],
) -> Result<FuelPriceProjection> {
    params.validate()?;

    let costs = series::fuel_costs(records);
    if costs.len() < MIN_MODEL_OBSERVATIONS {
        return Ok(insufficient(params, records.len(), &costs));
    }
    Ok(modeled(params, records.len(), &costs))
}

fn modeled(params: &FuelPriceParams, record_count: usize, costs: &[f64]) -> FuelPriceProjection {
    let trend = TrendFit::fit(costs);
    let seasonality = SeasonalitySignal::detect(costs);
    let cycle = SeasonalCycle::annual();

    let avg_cost = descriptive::mean(costs);
    let current_monthly_cost = avg_cost * record_count as f64;
    let ratio = params.fuel_cost_fraction();
    let change = params.fuel_increase_percent / 100.0;
    let base_impact = current_monthly_cost * ratio * change;

    let mut breakdown = Vec::with_capacity(params.time_horizon_months);
    let mut cumulative = 0.0;
    for month in 1..=params.time_horizon_months {
        let mut impact = base_impact;
        if trend.is_significant() {
            impact += trend.slope * month as f64 * ratio * change;
        }
        if seasonality.detected {
            impact += impact * seasonality.variation * cycle.wave(month) * SEASONAL_WEIGHT;
        }
        cumulative += impact;

        breakdown.push(FuelMonth {
            month: format!("Month {month}"),
            monthly_cost_increase: round2(impact),
            cumulative_cost_increase: round2(cumulative),
            optimistic_scenario: Some(round2((impact * (1.0 - CONFIDENCE_BAND)).max(0.0))),
            pessimistic_scenario: Some(round2(impact * (1.0 + CONFIDENCE_BAND))),
        });
    }
    let total_cost_impact = cumulative;

    let recommendations = recommendations(params, &trend, &seasonality, total_cost_impact);
    let diagnostics = ModelDiagnostics {
        trend_detected: trend.is_significant(),
        seasonality_detected: seasonality.detected,
        confidence: (trend.r_squared * 100.0).round() as u32,
        data_points: costs.len(),
        trend_direction: Some(trend.direction(avg_cost)),
        seasonal_variation: Some(round1(seasonality.variation * 100.0)),
    };

    FuelPriceProjection {
        scenario: "Fuel Price Increase".to_string(),
        model_type: "Linear Regression + Seasonality Detection".to_string(),
        fuel_increase_percent: params.fuel_increase_percent,
        time_horizon_months: params.time_horizon_months,
        current_monthly_cost,
        projected_cost_increase: base_impact,
        total_cost_impact,
        monthly_breakdown: breakdown,
        basis: ProjectionBasis::Modeled(diagnostics),
        recommendations,
    }
}

fn insufficient(
    params: &FuelPriceParams,
    record_count: usize,
    costs: &[f64],
) -> FuelPriceProjection {
    let avg_cost = if costs.is_empty() {
        FALLBACK_AVG_COST
    } else {
        descriptive::mean(costs)
    };
    let current_monthly_cost = avg_cost * record_count as f64;
    let monthly_impact =
        current_monthly_cost * params.fuel_cost_fraction() * (params.fuel_increase_percent / 100.0);

    let breakdown = (1..=params.time_horizon_months)
        .map(|month| FuelMonth {
            month: format!("Month {month}"),
            monthly_cost_increase: round2(monthly_impact),
            cumulative_cost_increase: round2(monthly_impact * month as f64),
            optimistic_scenario: None,
            pessimistic_scenario: None,
        })
        .collect();

    FuelPriceProjection {
        scenario: "Fuel Price Increase (Insufficient Data)".to_string(),
        model_type: "Flat Baseline".to_string(),
        fuel_increase_percent: params.fuel_increase_percent,
        time_horizon_months: params.time_horizon_months,
        current_monthly_cost,
        projected_cost_increase: monthly_impact,
        total_cost_impact: monthly_impact * params.time_horizon_months as f64,
        monthly_breakdown: breakdown,
        basis: ProjectionBasis::Insufficient {
            note: "Not enough usable fuel cost history to fit a trend model".to_string(),
        },
        recommendations: vec![Recommendation {
            severity: Severity::Info,
            title: "Insufficient Historical Data".to_string(),
            description: "Projection uses a flat average because fewer than two usable fuel costs were found".to_string(),
            action: "Collect more shipment history to enable trend-based projections".to_string(),
        }],
    }
}

fn recommendations(
    params: &FuelPriceParams,
    trend: &TrendFit,
    seasonality: &SeasonalitySignal,
    total_cost_impact: f64,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if trend.slope > 0.0 && trend.is_strong() {
        out.push(Recommendation {
            severity: Severity::Warning,
            title: "Upward Cost Trend Detected".to_string(),
            description: format!(
                "Historical data shows costs rising by ${:.2} per period",
                trend.slope
            ),
            action: "Lock in fuel contracts now before prices increase further".to_string(),
        });
    } else if trend.slope < 0.0 {
        out.push(Recommendation {
            severity: Severity::Info,
            title: "Favorable Cost Trend".to_string(),
            description: "Costs have been declining historically".to_string(),
            action: "Consider short-term contracts to benefit from potential further decreases"
                .to_string(),
        });
    }

    if seasonality.detected {
        out.push(Recommendation {
            severity: Severity::Info,
            title: "Seasonal Pattern Detected".to_string(),
            description: format!(
                "Costs vary by {:.1}% seasonally",
                seasonality.variation * 100.0
            ),
            action: "Consider bulk purchasing during low-cost periods".to_string(),
        });
    }

    if params.fuel_increase_percent > HIGH_IMPACT_PERCENT {
        out.push(Recommendation {
            severity: Severity::Warning,
            title: "High Impact Scenario".to_string(),
            description: format!(
                "${:.0} total impact over {} months",
                total_cost_impact, params.time_horizon_months
            ),
            action: format!(
                "Explore alternative fuel sources or shift {}% of shipments to rail",
                (params.fuel_increase_percent * 0.5) as i64
            ),
        });
    } else {
        out.push(Recommendation {
            severity: Severity::Action,
            title: "Moderate Impact".to_string(),
            description: "Impact is manageable with operational optimization".to_string(),
            action: "Focus on route optimization and fuel efficiency improvements".to_string(),
        });
    }

    out
}
