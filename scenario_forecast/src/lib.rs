//! # Scenario Forecast
//!
//! What-if business scenario projections and dashboard analytics for
//! InsightsGrid. Historical logistics, sales and finance records feed
//! trend and seasonality estimators from `insight_math`, and the
//! scenarios turn a question like "what if fuel prices rise 10%?" into
//! monthly figures, confidence bands and recommendations the dashboard
//! can chart.
//!
//! Projections are deliberately forgiving: thin or messy history
//! produces a flagged flat fallback, never an error. Errors are
//! reserved for invalid parameters and malformed requests.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use insight_data::synthetic;
//! use scenario_forecast::fuel_price;
//! use scenario_forecast::params::FuelPriceParams;
//!
//! # fn main() -> scenario_forecast::Result<()> {
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let shipments = synthetic::logistics_fixture(7, start, 120);
//!
//! let params = FuelPriceParams {
//!     fuel_increase_percent: 12.0,
//!     ..FuelPriceParams::default()
//! };
//! let projection = fuel_price::project(&params, &shipments)?;
//!
//! assert_eq!(projection.monthly_breakdown.len(), 12);
//! assert!(projection.basis.is_modeled());
//! # Ok(())
//! # }
//! ```
//!
//! ## Dispatch
//!
//! Dashboard requests arrive as `{"type": ..., "parameters": {...}}`
//! payloads; [`dispatch::run_scenario`] parses, validates and runs
//! them against a [`Datasets`] bundle and returns the JSON the charts
//! read.

pub mod analytics;
pub mod baseline;
pub mod dataset;
pub mod demand;
pub mod dispatch;
pub mod error;
pub mod fuel_price;
pub mod outcome;
pub mod params;
pub mod route;
pub mod warehouse;

pub use dataset::Datasets;
pub use dispatch::{route_query, run_scenario, ScenarioKind, ScenarioRequest};
pub use error::{Result, ScenarioError};
pub use outcome::{
    DemandProjection, FuelPriceProjection, ModelDiagnostics, ProjectionBasis, Recommendation,
    Severity,
};
pub use params::{
    DemandForecastParams, FuelPriceParams, OptimizationProfile, RouteOptimizationParams,
    WarehouseExpansionParams,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
