use chrono::NaiveDate;
use insight_data::synthetic;
use scenario_forecast::fuel_price;
use scenario_forecast::outcome::ProjectionBasis;
use scenario_forecast::params::FuelPriceParams;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Scenario Forecast: Fuel Price Example");
    println!("=====================================\n");

    // Create sample shipment history
    println!("Creating sample data...");
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let shipments = synthetic::logistics_fixture(7, start, 180);
    println!("Sample data created: {} shipment records\n", shipments.len());

    // Default question: what does a 10% fuel price increase cost us over 12 months?
    let params = FuelPriceParams::default();
    let projection = fuel_price::project(&params, &shipments)?;
    println!("{}\n", projection);

    match &projection.basis {
        ProjectionBasis::Modeled(diagnostics) => {
            println!("Model diagnostics:");
            println!("  trend detected:       {}", diagnostics.trend_detected);
            println!("  seasonality detected: {}", diagnostics.seasonality_detected);
            println!("  confidence:           {}/100", diagnostics.confidence);
            println!("  data points:          {}", diagnostics.data_points);
            if let Some(direction) = diagnostics.trend_direction {
                println!("  trend direction:      {}", direction);
            }
        }
        ProjectionBasis::Insufficient { note } => {
            println!("Fallback projection: {}", note);
        }
    }

    println!("\nFirst quarter of the breakdown:");
    for row in projection.monthly_breakdown.iter().take(3) {
        println!(
            "  {}: +${:.2} (cumulative ${:.2})",
            row.month, row.monthly_cost_increase, row.cumulative_cost_increase
        );
    }

    println!("\nRecommendations:");
    for recommendation in &projection.recommendations {
        println!("  [{:?}] {}", recommendation.severity, recommendation.title);
        println!("        {}", recommendation.action);
    }

    // A sharper shock over a shorter horizon
    let sharp = FuelPriceParams {
        fuel_increase_percent: 25.0,
        time_horizon_months: 6,
        ..FuelPriceParams::default()
    };
    let shock = fuel_price::project(&sharp, &shipments)?;
    println!("\n25% shock over 6 months:");
    println!("  total impact: ${:.2}", shock.total_cost_impact);
    println!(
        "  final month:  ${:.2}",
        shock
            .monthly_breakdown
            .last()
            .map(|row| row.monthly_cost_increase)
            .unwrap_or(0.0)
    );

    Ok(())
}
