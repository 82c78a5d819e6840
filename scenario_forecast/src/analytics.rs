//! Dashboard analytics over the raw datasets
//!
//! Pure reductions of the record collections the query layer hands
//! over: headline totals for the overview cards, merged per-date rows
//! for the trends chart, windowed KPIs, and the cost, product and
//! region groupings behind the dashboard tables.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::NaiveDate;
use serde::Serialize;

use insight_data::{FinanceRecord, LogisticsRecord, SalesRecord};
use insight_math::descriptive;

use crate::error::Result;
use crate::outcome::round2;

/// Headline totals for the overview cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    /// Sum of all order revenues.
    pub total_revenue: f64,
    /// Sum of all ledger amounts.
    pub total_costs: f64,
    /// Count of shipment records.
    pub active_shipments: usize,
    /// Count of distinct order ids.
    pub total_orders: usize,
}

/// Headline totals across the three datasets.
pub fn overview(
    sales: &[SalesRecord],
    finance: &[FinanceRecord],
    logistics: &[LogisticsRecord],
) -> Overview {
    let distinct_orders: HashSet<&str> = sales.iter().map(|r| r.order_id.as_str()).collect();
    Overview {
        total_revenue: sales.iter().map(|r| r.revenue).sum(),
        total_costs: finance.iter().map(|r| r.amount).sum(),
        active_shipments: logistics.len(),
        total_orders: distinct_orders.len(),
    }
}

/// One merged per-date row for the trends chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTrend {
    pub date: NaiveDate,
    pub revenue: f64,
    pub costs: f64,
    pub profit: f64,
    pub avg_fuel_price: f64,
    pub shipment_count: usize,
}

/// Merge revenue, cost and logistics aggregates by date, newest first,
/// capped at `limit` rows.
///
/// Revenue dates drive the merge: a date with sales but no matching
/// costs or shipments fills with zeros, and dates without sales do not
/// appear at all. The shipment count is distinct routes per date.
pub fn daily_trends(
    sales: &[SalesRecord],
    finance: &[FinanceRecord],
    logistics: &[LogisticsRecord],
    limit: usize,
) -> Vec<DailyTrend> {
    let mut revenue_by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in sales {
        *revenue_by_date.entry(record.date).or_insert(0.0) += record.revenue;
    }

    let mut costs_by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in finance {
        *costs_by_date.entry(record.date).or_insert(0.0) += record.amount;
    }

    // per-date fuel price sum, row count, distinct routes
    let mut shipping_by_date: BTreeMap<NaiveDate, (f64, usize, HashSet<&str>)> = BTreeMap::new();
    for record in logistics {
        let entry = shipping_by_date
            .entry(record.date)
            .or_insert_with(|| (0.0, 0, HashSet::new()));
        entry.0 += record.fuel_price_per_l;
        entry.1 += 1;
        entry.2.insert(record.route_id.as_str());
    }

    revenue_by_date
        .iter()
        .rev()
        .take(limit)
        .map(|(&date, &revenue)| {
            let costs = costs_by_date.get(&date).copied().unwrap_or(0.0);
            let (price_sum, rows, shipment_count) = shipping_by_date
                .get(&date)
                .map(|(sum, rows, routes)| (*sum, *rows, routes.len()))
                .unwrap_or((0.0, 0, 0));
            let avg_fuel_price = if rows > 0 {
                price_sum / rows as f64
            } else {
                0.0
            };
            DailyTrend {
                date,
                revenue: round2(revenue),
                costs: round2(costs),
                profit: round2(revenue - costs),
                avg_fuel_price: round2(avg_fuel_price),
                shipment_count,
            }
        })
        .collect()
}

/// Windowed key performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardKpis {
    /// Revenue growth of the newest window against the one before it,
    /// percent.
    pub revenue_growth: f64,
    /// Average order revenue over the window.
    pub avg_order_value: f64,
    /// Distinct orders in the window.
    pub order_volume: usize,
    /// Average delivery delay over the window, hours.
    pub delivery_time: f64,
}

/// KPIs over the newest `days` distinct dates of each dataset.
///
/// Sales and logistics windows are independent: each covers the newest
/// `days` dates present in its own dataset. A zero-day window is a
/// caller error.
pub fn dashboard_kpis(
    sales: &[SalesRecord],
    logistics: &[LogisticsRecord],
    days: usize,
) -> Result<DashboardKpis> {
    let mut revenue_by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in sales {
        *revenue_by_date.entry(record.date).or_insert(0.0) += record.revenue;
    }
    let daily_newest_first: Vec<f64> = revenue_by_date.values().rev().copied().collect();
    let revenue_growth = descriptive::window_growth_percent(&daily_newest_first, days)?;

    let sales_dates = newest_dates(sales.iter().map(|r| r.date), days);
    let windowed_revenues: Vec<f64> = sales
        .iter()
        .filter(|r| sales_dates.contains(&r.date))
        .map(|r| r.revenue)
        .collect();
    let windowed_orders: HashSet<&str> = sales
        .iter()
        .filter(|r| sales_dates.contains(&r.date))
        .map(|r| r.order_id.as_str())
        .collect();

    let logistics_dates = newest_dates(logistics.iter().map(|r| r.date), days);
    let windowed_delays: Vec<f64> = logistics
        .iter()
        .filter(|r| logistics_dates.contains(&r.date))
        .map(|r| r.delay_hr)
        .collect();

    Ok(DashboardKpis {
        revenue_growth: round2(revenue_growth),
        avg_order_value: round2(descriptive::mean(&windowed_revenues)),
        order_volume: windowed_orders.len(),
        delivery_time: round2(descriptive::mean(&windowed_delays)),
    })
}

fn newest_dates<I: Iterator<Item = NaiveDate>>(dates: I, days: usize) -> BTreeSet<NaiveDate> {
    let distinct: BTreeSet<NaiveDate> = dates.collect();
    let older = distinct.len().saturating_sub(days);
    distinct.into_iter().skip(older).collect()
}

/// Average metrics for one route, keyed by region and route id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteCost {
    /// "{region} - {route_id}" label used by the dashboard table.
    pub route: String,
    pub avg_cost: f64,
    pub avg_delay: f64,
    pub avg_fuel_price: f64,
    pub shipment_count: usize,
}

/// Per-route averages, most expensive first, capped at `limit` rows.
pub fn cost_analysis(logistics: &[LogisticsRecord], limit: usize) -> Vec<RouteCost> {
    // cost sum, delay sum, price sum, count
    let mut groups: BTreeMap<(&str, &str), (f64, f64, f64, usize)> = BTreeMap::new();
    for record in logistics {
        let entry = groups
            .entry((record.region.as_str(), record.route_id.as_str()))
            .or_insert((0.0, 0.0, 0.0, 0));
        entry.0 += record.fuel_cost();
        entry.1 += record.delay_hr;
        entry.2 += record.fuel_price_per_l;
        entry.3 += 1;
    }

    let mut rows: Vec<RouteCost> = groups
        .into_iter()
        .map(|((region, route_id), (cost, delay, price, count))| {
            let n = count as f64;
            RouteCost {
                route: format!("{} - {}", region, route_id),
                avg_cost: round2(cost / n),
                avg_delay: round2(delay / n),
                avg_fuel_price: round2(price / n),
                shipment_count: count,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.avg_cost.total_cmp(&a.avg_cost));
    rows.truncate(limit);
    rows
}

/// Sales totals for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPerformance {
    pub product_id: String,
    pub total_units: f64,
    pub total_revenue: f64,
    pub avg_price: f64,
}

/// Per-product totals, highest revenue first, capped at `limit` rows.
pub fn product_performance(sales: &[SalesRecord], limit: usize) -> Vec<ProductPerformance> {
    // units sum, revenue sum, price sum, count
    let mut groups: BTreeMap<&str, (f64, f64, f64, usize)> = BTreeMap::new();
    for record in sales {
        let entry = groups
            .entry(record.product_id.as_str())
            .or_insert((0.0, 0.0, 0.0, 0));
        entry.0 += record.units_sold;
        entry.1 += record.revenue;
        entry.2 += record.unit_price;
        entry.3 += 1;
    }

    let mut rows: Vec<ProductPerformance> = groups
        .into_iter()
        .map(|(product_id, (units, revenue, price, count))| ProductPerformance {
            product_id: product_id.to_string(),
            total_units: units,
            total_revenue: round2(revenue),
            avg_price: round2(price / count as f64),
        })
        .collect();

    rows.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    rows.truncate(limit);
    rows
}

/// Sales totals for one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalPerformance {
    pub region: String,
    pub order_count: usize,
    pub total_revenue: f64,
}

/// Per-region totals, highest revenue first.
pub fn regional_performance(sales: &[SalesRecord]) -> Vec<RegionalPerformance> {
    let mut groups: BTreeMap<&str, (HashSet<&str>, f64)> = BTreeMap::new();
    for record in sales {
        let entry = groups
            .entry(record.region.as_str())
            .or_insert_with(|| (HashSet::new(), 0.0));
        entry.0.insert(record.order_id.as_str());
        entry.1 += record.revenue;
    }

    let mut rows: Vec<RegionalPerformance> = groups
        .into_iter()
        .map(|(region, (orders, revenue))| RegionalPerformance {
            region: region.to_string(),
            order_count: orders.len(),
            total_revenue: round2(revenue),
        })
        .collect();

    rows.sort_by(|a, b| b.total_revenue.total_cmp(&a.total_revenue));
    rows
}
