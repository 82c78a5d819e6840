//! # Insight Math
//!
//! Numeric building blocks for the InsightsGrid scenario engine:
//! descriptive statistics, least-squares trend fitting and a
//! dispersion-based seasonality signal.
//!
//! The estimators here are deliberately total: degenerate inputs
//! (empty series, constant series, too few observations) produce
//! documented fallback values instead of errors, so a dashboard
//! request never fails just because history is thin. Fallible
//! operations are limited to genuine caller mistakes, such as a
//! zero-length growth window.
//!
//! ## Example
//!
//! ```
//! use insight_math::trend::TrendFit;
//! use insight_math::seasonality::SeasonalitySignal;
//!
//! let costs = [100.0, 110.0, 120.0, 130.0, 140.0];
//!
//! let fit = TrendFit::fit(&costs);
//! assert!((fit.slope - 10.0).abs() < 1e-9);
//! assert!(fit.is_significant());
//!
//! let signal = SeasonalitySignal::detect(&costs);
//! assert!(!signal.detected);
//! ```

use thiserror::Error;

pub mod descriptive;
pub mod seasonality;
pub mod trend;

/// Errors that can occur in analytical calculations
#[derive(Error, Debug)]
pub enum MathError {
    /// A caller-supplied argument was outside the valid range
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for math operations
pub type Result<T> = std::result::Result<T, MathError>;
