//! Common output schema for scenario projections
//!
//! Both monthly projections serialize to the payload shape the
//! dashboard charts read: echoed parameters, headline figures, a
//! `monthly_breakdown` array and a `model_info` block. Whether the
//! figures came from a fitted model or from the thin-history fallback
//! is carried as a tagged basis rather than two separate payload
//! shapes.

use std::fmt;

use serde::Serialize;

use insight_math::trend::TrendDirection;

/// Fewest usable observations the model needs before it fits anything.
pub const MIN_MODEL_OBSERVATIONS: usize = 2;

/// Severity of a recommendation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
    Action,
}

/// One qualitative recommendation attached to a projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Severity bucket the dashboard uses to style the card.
    #[serde(rename = "type")]
    pub severity: Severity,
    /// Short headline.
    pub title: String,
    /// One-sentence explanation.
    pub description: String,
    /// Suggested next step.
    pub action: String,
}

/// Diagnostics describing the fitted model behind a projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelDiagnostics {
    /// True when the trend fit cleared the significance threshold.
    pub trend_detected: bool,
    /// True when the dispersion signal flagged seasonality.
    pub seasonality_detected: bool,
    /// R² of the trend fit as a 0-100 score.
    pub confidence: u32,
    /// Usable historical observations behind the fit.
    pub data_points: usize,
    /// Direction label for the fitted trend, where the scenario
    /// reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend_direction: Option<TrendDirection>,
    /// Seasonal variation as a percentage rounded to one decimal,
    /// where the scenario reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonal_variation: Option<f64>,
}

/// What produced a projection's figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "basis", rename_all = "snake_case")]
pub enum ProjectionBasis {
    /// Too little usable history to fit a model; figures are the flat
    /// fallback.
    Insufficient {
        /// Why the model was not fit.
        note: String,
    },
    /// Trend and seasonality fits drove the figures.
    Modeled(ModelDiagnostics),
}

impl ProjectionBasis {
    /// Whether the projection came from a fitted model.
    pub fn is_modeled(&self) -> bool {
        matches!(self, ProjectionBasis::Modeled(_))
    }
}

/// One month of the fuel-price projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelMonth {
    /// "Month {t}" label, t starting at 1.
    pub month: String,
    /// Projected extra cost for the month.
    pub monthly_cost_increase: f64,
    /// Running sum of the monthly increases.
    pub cumulative_cost_increase: f64,
    /// Lower band, 20% under the projection, floored at zero. Absent
    /// on fallback projections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimistic_scenario: Option<f64>,
    /// Upper band, 20% over the projection. Absent on fallback
    /// projections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pessimistic_scenario: Option<f64>,
}

/// Fuel-price scenario projection over a monthly horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelPriceProjection {
    /// Scenario label for the dashboard card.
    pub scenario: String,
    /// Label of the estimator behind the figures.
    pub model_type: String,
    /// Echoed price change, percent.
    pub fuel_increase_percent: f64,
    /// Echoed horizon, months.
    pub time_horizon_months: usize,
    /// Current average monthly fuel-linked cost.
    pub current_monthly_cost: f64,
    /// First-order monthly cost increase before adjustments.
    pub projected_cost_increase: f64,
    /// Sum of the projected increases over the horizon.
    pub total_cost_impact: f64,
    /// Per-month projection rows, one per horizon month.
    pub monthly_breakdown: Vec<FuelMonth>,
    /// What produced the figures.
    #[serde(rename = "model_info")]
    pub basis: ProjectionBasis,
    /// Qualitative guidance derived from the model signals.
    pub recommendations: Vec<Recommendation>,
}

impl fmt::Display for FuelPriceProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.scenario)?;
        writeln!(
            f,
            "  fuel change: {:+.1}% over {} months",
            self.fuel_increase_percent, self.time_horizon_months
        )?;
        writeln!(
            f,
            "  current monthly cost: ${:.2}",
            self.current_monthly_cost
        )?;
        writeln!(
            f,
            "  projected monthly increase: ${:.2}",
            self.projected_cost_increase
        )?;
        write!(f, "  total impact: ${:.2}", self.total_cost_impact)
    }
}

/// One month of the demand projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandMonth {
    /// "Month {t}" label, t starting at 1.
    pub month: String,
    /// Current monthly revenue, repeated for chart baselines.
    pub current_revenue: f64,
    /// Projected revenue for the month.
    pub projected_revenue: f64,
    /// Projected revenue minus current revenue.
    pub revenue_increase: f64,
}

/// Demand forecast projection over a monthly horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemandProjection {
    /// Scenario label for the dashboard card.
    pub scenario: String,
    /// Label of the estimator behind the figures.
    pub model_type: String,
    /// Echoed demand change, percent.
    pub demand_increase_percent: f64,
    /// Echoed horizon, months.
    pub time_horizon_months: usize,
    /// Current average monthly revenue.
    pub current_monthly_revenue: f64,
    /// Revenue level once the full demand change has ramped in.
    pub projected_monthly_revenue: f64,
    /// First-order monthly revenue increase before adjustments.
    pub projected_revenue_increase: f64,
    /// Sum of the projected increases over the horizon.
    pub total_revenue_increase: f64,
    /// Per-month projection rows, one per horizon month.
    pub monthly_breakdown: Vec<DemandMonth>,
    /// What produced the figures.
    #[serde(rename = "model_info")]
    pub basis: ProjectionBasis,
    /// Operational notes: inventory, staffing and planning guidance.
    pub capacity_requirements: Vec<String>,
}

impl fmt::Display for DemandProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.scenario)?;
        writeln!(
            f,
            "  demand change: {:+.1}% over {} months",
            self.demand_increase_percent, self.time_horizon_months
        )?;
        writeln!(
            f,
            "  monthly revenue: ${:.2} -> ${:.2}",
            self.current_monthly_revenue, self.projected_monthly_revenue
        )?;
        write!(
            f,
            "  total revenue increase: ${:.2}",
            self.total_revenue_increase
        )
    }
}

/// Round to two decimals for money figures in breakdown rows.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal for percentage diagnostics.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
