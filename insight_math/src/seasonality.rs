//! Seasonality detection via relative dispersion
//!
//! The dashboard's history is too short and too irregular for a real
//! spectral decomposition, so seasonality is proxied by the
//! coefficient of variation: a series that swings widely around its
//! mean is treated as seasonal. The signal feeds a fixed-length
//! sinusoidal cycle that projections use to shape monthly figures.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::descriptive;
use crate::{MathError, Result};

/// Coefficient-of-variation level above which a series counts as
/// seasonal.
pub const SEASONALITY_VARIATION_THRESHOLD: f64 = 0.15;

/// Periods in the annual cycle the projections assume.
pub const ANNUAL_CYCLE_PERIODS: usize = 12;

/// Weight applied to the variation when deriving the informational
/// adjustment factor.
const ADJUSTMENT_FACTOR_WEIGHT: f64 = 0.5;

/// Finite observations needed before dispersion says anything about
/// seasonality.
const MIN_OBSERVATIONS: usize = 3;

/// Dispersion-based seasonality signal for an observation series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonalitySignal {
    /// True when the relative dispersion crosses the threshold.
    pub detected: bool,
    /// Coefficient of variation of the series.
    pub variation: f64,
    /// Informational adjustment factor, 1 + variation / 2.
    pub factor: f64,
}

impl SeasonalitySignal {
    /// Measure the seasonality proxy for `series`.
    ///
    /// Fewer than three finite values, or a zero mean, yield the quiet
    /// signal (not detected, zero variation, unit factor). Never an
    /// error: thin history means "no seasonality evidence", not a
    /// failure.
    pub fn detect(series: &[f64]) -> Self {
        let values = descriptive::finite_values(series);
        if values.len() < MIN_OBSERVATIONS {
            return SeasonalitySignal::quiet();
        }

        let variation = descriptive::coefficient_of_variation(&values);
        SeasonalitySignal {
            detected: variation > SEASONALITY_VARIATION_THRESHOLD,
            variation,
            factor: 1.0 + variation * ADJUSTMENT_FACTOR_WEIGHT,
        }
    }

    fn quiet() -> Self {
        SeasonalitySignal {
            detected: false,
            variation: 0.0,
            factor: 1.0,
        }
    }
}

/// Fixed-length cycle that places a sinusoidal weight on each
/// projected period.
///
/// Projections assume an annual rhythm regardless of how densely the
/// history was sampled; callers with other periodicities can build
/// their own cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalCycle {
    periods: usize,
}

impl SeasonalCycle {
    /// Create a cycle of `periods` length. A cycle needs at least two
    /// periods to oscillate.
    pub fn new(periods: usize) -> Result<Self> {
        if periods < 2 {
            return Err(MathError::InvalidInput(
                "seasonal cycle needs at least two periods".to_string(),
            ));
        }
        Ok(SeasonalCycle { periods })
    }

    /// The annual cycle of twelve monthly periods.
    pub fn annual() -> Self {
        SeasonalCycle {
            periods: ANNUAL_CYCLE_PERIODS,
        }
    }

    /// Sinusoidal position of `period` within the cycle, in [-1, 1].
    pub fn wave(&self, period: usize) -> f64 {
        (2.0 * PI * period as f64 / self.periods as f64).sin()
    }

    /// Cycle length in periods.
    pub fn periods(&self) -> usize {
        self.periods
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_detect_high_variation() {
        // mean 110, sample std sqrt(300): variation just over 0.15
        let signal = SeasonalitySignal::detect(&[100.0, 100.0, 130.0]);
        assert!(signal.detected);
        assert_relative_eq!(signal.variation, 300.0f64.sqrt() / 110.0, epsilon = 1e-12);
        assert_relative_eq!(signal.factor, 1.0 + signal.variation * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_detect_low_variation() {
        let signal = SeasonalitySignal::detect(&[100.0, 105.0, 95.0]);
        assert!(!signal.detected);
        assert_relative_eq!(signal.variation, 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_detect_needs_three_observations() {
        let signal = SeasonalitySignal::detect(&[100.0, 200.0]);
        assert!(!signal.detected);
        assert_eq!(signal.variation, 0.0);
        assert_eq!(signal.factor, 1.0);
    }

    #[test]
    fn test_detect_zero_mean_is_quiet() {
        let signal = SeasonalitySignal::detect(&[-10.0, 0.0, 10.0]);
        assert!(!signal.detected);
        assert_eq!(signal.variation, 0.0);
        assert_eq!(signal.factor, 1.0);
    }

    #[test]
    fn test_detect_ignores_non_finite_values() {
        let noisy = [100.0, f64::NAN, 100.0, f64::INFINITY, 130.0];
        let clean = [100.0, 100.0, 130.0];
        assert_eq!(
            SeasonalitySignal::detect(&noisy),
            SeasonalitySignal::detect(&clean)
        );
    }

    #[test]
    fn test_variation_non_negative_for_observation_series() {
        let cases: [&[f64]; 4] = [
            &[1.0, 2.0, 3.0],
            &[0.0, 0.0, 5.0],
            &[100.0, 100.0, 100.0],
            &[3.5, 0.1, 9.9, 2.2],
        ];
        for series in cases {
            assert!(SeasonalitySignal::detect(series).variation >= 0.0);
        }
    }

    #[test]
    fn test_cycle_rejects_degenerate_length() {
        assert!(SeasonalCycle::new(0).is_err());
        assert!(SeasonalCycle::new(1).is_err());
        assert!(SeasonalCycle::new(2).is_ok());
    }

    #[test]
    fn test_annual_cycle_wave() {
        let cycle = SeasonalCycle::annual();
        assert_eq!(cycle.periods(), 12);
        // quarter cycle peaks, half cycle crosses zero
        assert_abs_diff_eq!(cycle.wave(3), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cycle.wave(6), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cycle.wave(9), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cycle.wave(12), 0.0, epsilon = 1e-12);
    }
}
