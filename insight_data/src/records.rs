//! Record types for the dashboard's three datasets
//!
//! Field names match the source CSV headers so the exports deserialize
//! directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logistics shipment row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticsRecord {
    /// Shipment date.
    pub date: NaiveDate,
    /// Operating region.
    pub region: String,
    /// Route identifier within the region.
    pub route_id: String,
    /// Fuel burned on the shipment, litres.
    pub fuel_used_l: f64,
    /// Fuel unit price at shipment time.
    pub fuel_price_per_l: f64,
    /// Delivery delay, hours.
    pub delay_hr: f64,
    /// Shipment volume, tonnes.
    pub shipment_volume_tons: f64,
}

impl LogisticsRecord {
    /// Fuel cost of the shipment, litres times unit price.
    pub fn fuel_cost(&self) -> f64 {
        self.fuel_used_l * self.fuel_price_per_l
    }
}

/// One sales order row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Order date.
    pub date: NaiveDate,
    /// Order identifier; repeated rows share one order.
    pub order_id: String,
    /// Product sold.
    pub product_id: String,
    /// Region the order shipped to.
    pub region: String,
    /// Units on the order line.
    pub units_sold: f64,
    /// Price per unit.
    pub unit_price: f64,
    /// Line revenue.
    pub revenue: f64,
}

/// One finance ledger row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceRecord {
    /// Posting date.
    pub date: NaiveDate,
    /// Ledger category, when the export provides one.
    #[serde(default)]
    pub category: Option<String>,
    /// Posted amount; costs are positive.
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fuel_cost() {
        let record = LogisticsRecord {
            date: date(2024, 3, 15),
            region: "Toronto".to_string(),
            route_id: "R-001".to_string(),
            fuel_used_l: 400.0,
            fuel_price_per_l: 1.5,
            delay_hr: 2.0,
            shipment_volume_tons: 18.0,
        };
        assert_eq!(record.fuel_cost(), 600.0);
    }

    #[test]
    fn test_sales_record_json_round_trip() {
        let record = SalesRecord {
            date: date(2024, 3, 15),
            order_id: "ORD-00042".to_string(),
            product_id: "P-07".to_string(),
            region: "Vancouver".to_string(),
            units_sold: 3.0,
            unit_price: 49.99,
            revenue: 149.97,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: SalesRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn test_finance_record_category_is_optional() {
        let json = r#"{"date": "2024-03-15", "amount": 5200.0}"#;
        let record: FinanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, None);
        assert_eq!(record.amount, 5200.0);
        assert_eq!(record.date, date(2024, 3, 15));
    }
}
