use chrono::NaiveDate;
use scenario_forecast::dispatch::{route_query, run_scenario, ScenarioRequest};
use scenario_forecast::{analytics, Datasets};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Scenario Forecast: Dashboard Report Example");
    println!("===========================================\n");

    // Ninety days of synthetic history across all three datasets
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let data = Datasets::synthetic(3, start, 90);
    println!(
        "Datasets: {} shipments, {} sales, {} ledger entries\n",
        data.logistics.len(),
        data.sales.len(),
        data.finance.len()
    );

    // Overview cards
    let overview = analytics::overview(&data.sales, &data.finance, &data.logistics);
    println!("Overview");
    println!("  total revenue:    ${:.2}", overview.total_revenue);
    println!("  total costs:      ${:.2}", overview.total_costs);
    println!("  active shipments: {}", overview.active_shipments);
    println!("  total orders:     {}", overview.total_orders);

    // KPIs over the newest 30 days against the 30 before them
    let kpis = analytics::dashboard_kpis(&data.sales, &data.logistics, 30)?;
    println!("\nKPIs (30-day window)");
    println!("  revenue growth:  {:+.2}%", kpis.revenue_growth);
    println!("  avg order value: ${:.2}", kpis.avg_order_value);
    println!("  order volume:    {}", kpis.order_volume);
    println!("  delivery time:   {:.2} h", kpis.delivery_time);

    // The last week of the trends chart
    println!("\nDaily trends (last 7 days)");
    for row in analytics::daily_trends(&data.sales, &data.finance, &data.logistics, 7) {
        println!(
            "  {}: revenue ${:.2}, costs ${:.2}, profit ${:.2}, {} shipments",
            row.date, row.revenue, row.costs, row.profit, row.shipment_count
        );
    }

    // Most expensive routes
    println!("\nTop routes by average cost");
    for row in analytics::cost_analysis(&data.logistics, 5) {
        println!(
            "  {}: avg ${:.2} over {} shipments, avg delay {:.2} h",
            row.route, row.avg_cost, row.shipment_count, row.avg_delay
        );
    }

    // Best-selling products
    println!("\nTop products by revenue");
    for row in analytics::product_performance(&data.sales, 5) {
        println!(
            "  {}: ${:.2} from {} units",
            row.product_id, row.total_revenue, row.total_units
        );
    }

    // Revenue by region
    println!("\nRegional performance");
    for row in analytics::regional_performance(&data.sales) {
        println!(
            "  {}: ${:.2} across {} orders",
            row.region, row.total_revenue, row.order_count
        );
    }

    // A free-text question routed to a scenario and run
    let question = "What if fuel prices increase by 15%?";
    println!("\nQuestion: {:?}", question);
    if let Some(kind) = route_query(question) {
        println!("Routed to scenario: {}", kind);
        let request = ScenarioRequest {
            kind: kind.to_string(),
            parameters: json!({ "fuel_increase_percent": 15.0, "time_horizon_months": 6 }),
        };
        let payload = run_scenario(&request, &data)?;
        println!("Payload:\n{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}
