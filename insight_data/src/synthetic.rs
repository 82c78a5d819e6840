//! Deterministic synthetic datasets
//!
//! Seeded generators producing plausible logistics, sales and finance
//! fixtures so examples and tests run without real dashboard exports.
//! The same seed always yields the same records.

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::records::{FinanceRecord, LogisticsRecord, SalesRecord};

const REGIONS: [&str; 4] = ["Toronto", "Vancouver", "Montreal", "Calgary"];
const CATEGORIES: [&str; 4] = ["fuel", "maintenance", "wages", "warehousing"];

/// Generate `count` daily logistics shipments starting at `start`.
///
/// Fuel use drifts gently upward over time so trend fits have
/// something to find, and the unit price follows a mild annual swing.
pub fn logistics_fixture(seed: u64, start: NaiveDate, count: usize) -> Vec<LogisticsRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let fuel_noise = normal(0.0, 25.0);
    let price_noise = normal(0.0, 0.05);
    let delay_noise = normal(2.0, 1.2);
    let volume_noise = normal(18.0, 4.0);

    (0..count)
        .map(|day| {
            let drift = day as f64 * 0.4;
            let seasonal_price =
                0.12 * (2.0 * std::f64::consts::PI * day as f64 / 365.0).sin();
            LogisticsRecord {
                date: start + Duration::days(day as i64),
                region: REGIONS[rng.gen_range(0..REGIONS.len())].to_string(),
                route_id: format!("R-{:03}", rng.gen_range(1..=20)),
                fuel_used_l: (380.0 + drift + fuel_noise.sample(&mut rng)).max(50.0),
                fuel_price_per_l: (1.55 + seasonal_price + price_noise.sample(&mut rng))
                    .max(0.80),
                delay_hr: delay_noise.sample(&mut rng).max(0.0),
                shipment_volume_tons: volume_noise.sample(&mut rng).max(1.0),
            }
        })
        .collect()
}

/// Generate `count` sales orders starting at `start`, one per day.
pub fn sales_fixture(seed: u64, start: NaiveDate, count: usize) -> Vec<SalesRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let price_noise = normal(55.0, 18.0);

    (0..count)
        .map(|day| {
            let units = rng.gen_range(1..=40) as f64;
            let unit_price = price_noise.sample(&mut rng).max(5.0);
            SalesRecord {
                date: start + Duration::days(day as i64),
                order_id: format!("ORD-{:05}", day + 1),
                product_id: format!("P-{:02}", rng.gen_range(1..=8)),
                region: REGIONS[rng.gen_range(0..REGIONS.len())].to_string(),
                units_sold: units,
                unit_price,
                revenue: units * unit_price,
            }
        })
        .collect()
}

/// Generate `count` finance ledger entries starting at `start`.
pub fn finance_fixture(seed: u64, start: NaiveDate, count: usize) -> Vec<FinanceRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let amount_noise = normal(5200.0, 900.0);

    (0..count)
        .map(|day| FinanceRecord {
            date: start + Duration::days(day as i64),
            category: Some(CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string()),
            amount: amount_noise.sample(&mut rng).max(100.0),
        })
        .collect()
}

// Parameters are compile-time constants with positive deviations, so
// construction cannot fail.
fn normal(mean: f64, std_dev: f64) -> Normal<f64> {
    Normal::new(mean, std_dev).expect("standard deviation is positive")
}
