//! Descriptive statistics over observation series
//!
//! Thin wrappers around `statrs` that pin down the degenerate cases
//! the raw trait leaves as `NaN`: empty series, single observations
//! and zero means all yield the documented fallback values.

use statrs::statistics::Statistics;

use crate::{MathError, Result};

/// Keep only finite values, preserving order.
pub fn finite_values(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Arithmetic mean. 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    Statistics::mean(values)
}

/// Sample standard deviation (Bessel's correction). 0.0 when fewer
/// than two values are present.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    Statistics::std_dev(values)
}

/// Coefficient of variation, `std_dev / mean`. 0.0 when the mean is
/// zero or fewer than two values are present.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let avg = mean(values);
    if avg == 0.0 {
        return 0.0;
    }
    sample_std_dev(values) / avg
}

/// Percentage growth of the newest `window` entries of a series
/// against the `window` entries before them.
///
/// `series` is ordered newest first, the way per-date aggregates come
/// off the dashboard queries. When the series holds at least one full
/// window but not two, the remainder is prorated up to a full window
/// for comparison. Growth is 0.0 whenever a comparison base is missing
/// or zero; a zero-length window is a caller error.
pub fn window_growth_percent(series: &[f64], window: usize) -> Result<f64> {
    if window == 0 {
        return Err(MathError::InvalidInput(
            "growth window must cover at least one period".to_string(),
        ));
    }

    if series.len() >= window * 2 {
        let current: f64 = series[..window].iter().sum();
        let previous: f64 = series[window..window * 2].iter().sum();
        if previous > 0.0 {
            return Ok((current - previous) / previous * 100.0);
        }
        return Ok(0.0);
    }

    if series.len() >= window {
        let current: f64 = series[..window].iter().sum();
        let total: f64 = series.iter().sum();
        if total > current && current > 0.0 {
            let remainder = (series.len() - window).max(1);
            let previous = (total - current) / remainder as f64 * window as f64;
            if previous > 0.0 {
                return Ok((current - previous) / previous * 100.0);
            }
        }
    }

    Ok(0.0)
}
