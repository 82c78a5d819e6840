//! Integration tests for the demand forecast projection

use approx::assert_relative_eq;
use chrono::NaiveDate;

use insight_data::SalesRecord;
use scenario_forecast::demand;
use scenario_forecast::outcome::ProjectionBasis;
use scenario_forecast::params::DemandForecastParams;
use scenario_forecast::ScenarioError;

fn sale(day: u32, revenue: f64) -> SalesRecord {
    SalesRecord {
        date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        order_id: format!("ORD-{:05}", day),
        product_id: "P-01".to_string(),
        region: "Toronto".to_string(),
        units_sold: 1.0,
        unit_price: revenue,
        revenue,
    }
}

fn constant_sales(count: u32, revenue: f64) -> Vec<SalesRecord> {
    (1..=count).map(|day| sale(day, revenue)).collect()
}

#[test]
fn test_flat_history_ramps_linearly() {
    // six identical orders: no trend, no seasonality, pure ramp
    let records = constant_sales(6, 1000.0);
    let params = DemandForecastParams {
        demand_increase_percent: 15.0,
        time_horizon_months: 12,
        use_model: true,
    };
    let projection = demand::project(&params, &records).unwrap();

    assert_relative_eq!(projection.current_monthly_revenue, 6000.0, epsilon = 1e-9);
    assert_relative_eq!(projection.projected_monthly_revenue, 6900.0, epsilon = 1e-9);
    assert_relative_eq!(projection.projected_revenue_increase, 900.0, epsilon = 1e-9);

    // month t carries t/12 of the 900 increase: 75 per month
    let rows = &projection.monthly_breakdown;
    assert_eq!(rows.len(), 12);
    for (i, row) in rows.iter().enumerate() {
        let t = (i + 1) as f64;
        assert_eq!(row.month, format!("Month {}", i + 1));
        assert_relative_eq!(row.current_revenue, 6000.0, epsilon = 1e-9);
        assert_relative_eq!(row.projected_revenue, 6000.0 + 75.0 * t, epsilon = 1e-9);
        assert_relative_eq!(row.revenue_increase, 75.0 * t, epsilon = 1e-9);
    }

    // the final month carries the full demand change
    assert_relative_eq!(
        rows[11].projected_revenue,
        projection.projected_monthly_revenue,
        epsilon = 1e-9
    );

    // sum of 75 * (1 + 2 + ... + 12)
    assert_relative_eq!(projection.total_revenue_increase, 5850.0, epsilon = 1e-9);

    match &projection.basis {
        ProjectionBasis::Modeled(diagnostics) => {
            assert!(!diagnostics.trend_detected);
            assert!(!diagnostics.seasonality_detected);
            assert_eq!(diagnostics.confidence, 0);
            assert_eq!(diagnostics.data_points, 6);
            assert!(diagnostics.trend_direction.is_none());
            assert!(diagnostics.seasonal_variation.is_none());
        }
        ProjectionBasis::Insufficient { .. } => panic!("expected a modeled projection"),
    }
}

#[test]
fn test_growing_history_adds_trend() {
    // revenues 100..140: slope 10 with a perfect fit
    let records: Vec<SalesRecord> = (0..5)
        .map(|i| sale(i as u32 + 1, 100.0 + 10.0 * i as f64))
        .collect();
    let params = DemandForecastParams {
        demand_increase_percent: 10.0,
        time_horizon_months: 5,
        use_model: true,
    };
    let projection = demand::project(&params, &records).unwrap();

    // current 600, ramp 12 per month, trend 10 per month
    assert_relative_eq!(projection.current_monthly_revenue, 600.0, epsilon = 1e-9);
    let rows = &projection.monthly_breakdown;
    for (i, row) in rows.iter().enumerate() {
        let t = (i + 1) as f64;
        assert_relative_eq!(row.projected_revenue, 600.0 + 22.0 * t, epsilon = 1e-9);
        assert_relative_eq!(row.revenue_increase, 22.0 * t, epsilon = 1e-9);
    }
    assert_relative_eq!(projection.total_revenue_increase, 330.0, epsilon = 1e-9);
}

#[test]
fn test_capacity_requirements_for_plain_increase() {
    let records = constant_sales(6, 1000.0);
    let params = DemandForecastParams {
        demand_increase_percent: 15.0,
        time_horizon_months: 12,
        use_model: true,
    };
    let projection = demand::project(&params, &records).unwrap();

    assert_eq!(
        projection.capacity_requirements,
        vec![
            "Increase inventory by 15%".to_string(),
            "Consider hiring 1 additional staff".to_string(),
        ]
    );
}

#[test]
fn test_capacity_scales_staff_with_demand() {
    let records = constant_sales(6, 1000.0);
    let params = DemandForecastParams {
        demand_increase_percent: 40.0,
        time_horizon_months: 12,
        use_model: true,
    };
    let projection = demand::project(&params, &records).unwrap();

    assert!(projection
        .capacity_requirements
        .contains(&"Consider hiring 4 additional staff".to_string()));
}

#[test]
fn test_capacity_notes_seasonality_and_growth() {
    // seasonal swing plus a strong upward trend
    let revenues = [100.0, 140.0, 120.0, 160.0, 150.0, 190.0];
    let records: Vec<SalesRecord> = revenues
        .iter()
        .enumerate()
        .map(|(i, &r)| sale(i as u32 + 1, r))
        .collect();
    let params = DemandForecastParams::default();
    let projection = demand::project(&params, &records).unwrap();

    match &projection.basis {
        ProjectionBasis::Modeled(diagnostics) => {
            assert!(diagnostics.seasonality_detected);
            assert!(diagnostics.trend_detected);
        }
        ProjectionBasis::Insufficient { .. } => panic!("expected a modeled projection"),
    }
    assert!(projection
        .capacity_requirements
        .iter()
        .any(|c| c.contains("seasonal fluctuations")));
    assert!(projection
        .capacity_requirements
        .iter()
        .any(|c| c.contains("sustained expansion")));
}

#[test]
fn test_empty_sales_history() {
    let params = DemandForecastParams {
        demand_increase_percent: 15.0,
        time_horizon_months: 6,
        use_model: true,
    };
    let projection = demand::project(&params, &[]).unwrap();

    assert!(matches!(
        projection.basis,
        ProjectionBasis::Insufficient { .. }
    ));
    assert_eq!(projection.scenario, "Demand Forecast (Insufficient Data)");
    assert_eq!(projection.current_monthly_revenue, 0.0);
    assert_eq!(projection.total_revenue_increase, 0.0);

    // breakdown still covers the horizon, flat
    assert_eq!(projection.monthly_breakdown.len(), 6);
    assert!(projection
        .monthly_breakdown
        .iter()
        .all(|row| row.revenue_increase == 0.0));

    assert_eq!(
        projection.capacity_requirements,
        vec!["Insufficient historical data for capacity planning".to_string()]
    );
}

#[test]
fn test_single_record_uses_its_revenue() {
    let params = DemandForecastParams {
        demand_increase_percent: 20.0,
        time_horizon_months: 3,
        use_model: true,
    };
    let projection = demand::project(&params, &constant_sales(1, 2500.0)).unwrap();

    assert!(matches!(
        projection.basis,
        ProjectionBasis::Insufficient { .. }
    ));
    assert_relative_eq!(projection.current_monthly_revenue, 2500.0, epsilon = 1e-9);
    assert_relative_eq!(projection.projected_revenue_increase, 500.0, epsilon = 1e-9);
    assert_relative_eq!(projection.projected_monthly_revenue, 3000.0, epsilon = 1e-9);
    assert_eq!(projection.monthly_breakdown.len(), 3);
}

#[test]
fn test_invalid_parameters_are_rejected() {
    let zero_horizon = DemandForecastParams {
        time_horizon_months: 0,
        ..DemandForecastParams::default()
    };
    assert!(matches!(
        demand::project(&zero_horizon, &constant_sales(6, 1000.0)),
        Err(ScenarioError::InvalidParameter(_))
    ));

    let bad_percent = DemandForecastParams {
        demand_increase_percent: f64::NAN,
        ..DemandForecastParams::default()
    };
    assert!(demand::project(&bad_percent, &constant_sales(6, 1000.0)).is_err());
}
