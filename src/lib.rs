//! # InsightsGrid Workspace
//!
//! Umbrella crate re-exporting the InsightsGrid engine crates:
//!
//! - [`insight_math`]: descriptive statistics, least-squares trend
//!   fitting and the dispersion-based seasonality signal.
//! - [`insight_data`]: typed logistics, sales and finance records with
//!   CSV ingestion and synthetic fixtures.
//! - [`scenario_forecast`]: the what-if scenario projections and
//!   dashboard analytics built on the other two.
//!
//! ## Example
//!
//! ```
//! use insights_grid_workspace::insight_math::trend::TrendFit;
//!
//! let fit = TrendFit::fit(&[100.0, 110.0, 120.0, 130.0]);
//! assert!(fit.is_significant());
//! assert!((fit.slope - 10.0).abs() < 1e-9);
//! ```

pub use insight_data;
pub use insight_math;
pub use scenario_forecast;
