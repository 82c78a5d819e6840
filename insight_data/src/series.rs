//! Observation-series extraction
//!
//! Simulation inputs are plain `f64` series derived from raw records.
//! Extraction keeps record-supply order and drops entries that are not
//! finite and strictly positive, which is the estimator's input
//! contract: a zero fuel cost or revenue row carries no signal.

use crate::records::{LogisticsRecord, SalesRecord};

/// Per-record fuel costs, `fuel_used_l` times `fuel_price_per_l`.
pub fn fuel_costs(records: &[LogisticsRecord]) -> Vec<f64> {
    records
        .iter()
        .map(LogisticsRecord::fuel_cost)
        .filter(|cost| usable(*cost))
        .collect()
}

/// Per-record order revenues.
pub fn revenues(records: &[SalesRecord]) -> Vec<f64> {
    records
        .iter()
        .map(|record| record.revenue)
        .filter(|revenue| usable(*revenue))
        .collect()
}

fn usable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn shipment(fuel_used_l: f64, fuel_price_per_l: f64) -> LogisticsRecord {
        LogisticsRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            region: "Toronto".to_string(),
            route_id: "R-001".to_string(),
            fuel_used_l,
            fuel_price_per_l,
            delay_hr: 0.0,
            shipment_volume_tons: 10.0,
        }
    }

    fn sale(revenue: f64) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            order_id: "ORD-00001".to_string(),
            product_id: "P-01".to_string(),
            region: "Toronto".to_string(),
            units_sold: 1.0,
            unit_price: revenue,
            revenue,
        }
    }

    #[test]
    fn test_fuel_costs_keep_order_and_drop_unusable() {
        let records = vec![
            shipment(100.0, 1.5),     // 150
            shipment(0.0, 1.5),       // zero, dropped
            shipment(200.0, 1.5),     // 300
            shipment(50.0, -1.0),     // negative, dropped
            shipment(f64::NAN, 1.5),  // non-finite, dropped
        ];
        assert_eq!(fuel_costs(&records), vec![150.0, 300.0]);
    }

    #[test]
    fn test_fuel_cost_is_litres_times_unit_price() {
        let costs = fuel_costs(&[shipment(133.7, 1.43)]);
        assert_eq!(costs.len(), 1);
        assert_relative_eq!(costs[0], 191.191, epsilon = 1e-9);
    }

    #[test]
    fn test_revenues_drop_non_positive() {
        let records = vec![sale(100.0), sale(0.0), sale(-25.0), sale(75.5)];
        assert_eq!(revenues(&records), vec![100.0, 75.5]);
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        assert!(fuel_costs(&[]).is_empty());
        assert!(revenues(&[]).is_empty());
    }
}
