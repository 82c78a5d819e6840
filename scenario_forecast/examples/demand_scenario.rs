use chrono::NaiveDate;
use insight_data::synthetic;
use scenario_forecast::demand;
use scenario_forecast::params::DemandForecastParams;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Scenario Forecast: Demand Forecast Example");
    println!("==========================================\n");

    // Create sample sales history
    println!("Creating sample data...");
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let sales = synthetic::sales_fixture(11, start, 180);
    println!("Sample data created: {} sales records\n", sales.len());

    // Default question: revenue under a 15% demand increase over a year
    let params = DemandForecastParams::default();
    let projection = demand::project(&params, &sales)?;
    println!("{}\n", projection);

    println!("Monthly ramp:");
    for row in &projection.monthly_breakdown {
        println!(
            "  {}: ${:.2} (+${:.2})",
            row.month, row.projected_revenue, row.revenue_increase
        );
    }

    println!("\nCapacity planning:");
    for note in &projection.capacity_requirements {
        println!("  - {}", note);
    }

    // Compare a contraction scenario over two quarters
    let downturn = DemandForecastParams {
        demand_increase_percent: -20.0,
        time_horizon_months: 6,
        ..DemandForecastParams::default()
    };
    let contraction = demand::project(&downturn, &sales)?;
    println!("\n20% contraction over 6 months:");
    println!(
        "  monthly revenue: ${:.2} -> ${:.2}",
        contraction.current_monthly_revenue, contraction.projected_monthly_revenue
    );
    println!(
        "  total revenue change: ${:.2}",
        contraction.total_revenue_increase
    );

    // The full payload the dashboard receives
    println!("\nSerialized payload:");
    println!("{}", serde_json::to_string_pretty(&projection)?);

    Ok(())
}
