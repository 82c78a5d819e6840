//! Linear trend fitting via least squares
//!
//! A series is treated as observations at x = 0, 1, 2, ... and fitted
//! with an ordinary least-squares line. The fit never fails: series
//! that cannot support a regression fall back to a zero slope so
//! downstream projections can run unconditionally.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum coefficient of determination before a fitted trend is
/// treated as significant by downstream projections.
pub const TREND_SIGNIFICANCE_R2: f64 = 0.3;

/// R² level above which a trend is strong enough to drive planning
/// recommendations.
pub const STRONG_TREND_R2: f64 = 0.5;

/// Fraction of the series mean the slope must exceed per period before
/// the direction is labelled rising or falling.
pub const DIRECTION_SLOPE_RATIO: f64 = 0.01;

/// Result of fitting a straight line to an observation series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendFit {
    /// Change in the observed quantity per period.
    pub slope: f64,
    /// Fitted value at period zero.
    pub intercept: f64,
    /// Coefficient of determination, clamped to [0, 1].
    pub r_squared: f64,
}

impl TrendFit {
    /// Fit a least-squares line to `series`.
    ///
    /// Non-finite values are dropped while their neighbours keep their
    /// original x positions, so gaps do not compress the timeline.
    /// Degenerate inputs never fail: with fewer than two usable values
    /// the fit reports a zero slope, the first usable value (or zero)
    /// as intercept, and an R² of zero. A constant series fits exactly
    /// but explains no variance, so its R² is also zero.
    pub fn fit(series: &[f64]) -> Self {
        let points: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .filter(|(_, y)| y.is_finite())
            .map(|(x, &y)| (x as f64, y))
            .collect();

        if points.len() < 2 {
            return TrendFit {
                slope: 0.0,
                intercept: points.first().map(|&(_, y)| y).unwrap_or(0.0),
                r_squared: 0.0,
            };
        }

        let n = points.len() as f64;
        let sum_x: f64 = points.iter().map(|&(x, _)| x).sum();
        let sum_y: f64 = points.iter().map(|&(_, y)| y).sum();
        let sum_xy: f64 = points.iter().map(|&(x, y)| x * y).sum();
        let sum_x2: f64 = points.iter().map(|&(x, _)| x * x).sum();

        // Zero only if every usable point shares one x, which distinct
        // indices rule out. Guarded all the same.
        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator == 0.0 {
            return TrendFit {
                slope: 0.0,
                intercept: sum_y / n,
                r_squared: 0.0,
            };
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        let y_mean = sum_y / n;
        let ss_total: f64 = points.iter().map(|&(_, y)| (y - y_mean).powi(2)).sum();
        let ss_residual: f64 = points
            .iter()
            .map(|&(x, y)| (y - (slope * x + intercept)).powi(2))
            .sum();

        let r_squared = if ss_total > 0.0 {
            (1.0 - ss_residual / ss_total).clamp(0.0, 1.0)
        } else {
            0.0
        };

        TrendFit {
            slope,
            intercept,
            r_squared,
        }
    }

    /// Fitted value at period `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Whether the fit explains enough variance to act on.
    pub fn is_significant(&self) -> bool {
        self.r_squared > TREND_SIGNIFICANCE_R2
    }

    /// Whether the fit is strong evidence of a sustained trend.
    pub fn is_strong(&self) -> bool {
        self.r_squared > STRONG_TREND_R2
    }

    /// Classify the trend direction relative to the magnitude of the
    /// series, where `reference_mean` is the mean of the fitted
    /// observations. Fits below the significance threshold are always
    /// `Stable`, as are slopes within ±1% of the mean per period.
    pub fn direction(&self, reference_mean: f64) -> TrendDirection {
        if !self.is_significant() {
            return TrendDirection::Stable;
        }
        let threshold = reference_mean.abs() * DIRECTION_SLOPE_RATIO;
        if self.slope > threshold {
            TrendDirection::Rising
        } else if self.slope < -threshold {
            TrendDirection::Falling
        } else {
            TrendDirection::Stable
        }
    }
}

/// Direction of a fitted trend relative to the size of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendDirection::Rising => "rising",
            TrendDirection::Falling => "falling",
            TrendDirection::Stable => "stable",
        };
        write!(f, "{}", label)
    }
}
