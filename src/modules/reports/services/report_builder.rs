use crate::core::{ReportTimezone, Result};
use crate::modules::orders::models::Order;
use crate::modules::orders::services::OrderTotalCalculator;
use crate::modules::reports::models::{DateRange, OrderReport, OrderSummary, ReportTotals};

use super::aggregator::{sort_for_display, status_counts, total_items, total_revenue};
use super::date_filter::filter_by_range;

/// Settings every report is computed with
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub timezone: ReportTimezone,
    pub calculator: OrderTotalCalculator,
}

/// Build the sales report for `[start, end]`
///
/// Filters `all_orders` by date, sorts the survivors newest first and computes
/// revenue, item and per-status totals. Missing bounds report on every order.
pub fn build_report(
    all_orders: &[Order],
    start: Option<&str>,
    end: Option<&str>,
    options: &ReportOptions,
) -> Result<OrderReport> {
    let range = DateRange::from_bounds(start, end, &options.timezone)?;
    Ok(build_report_for_range(all_orders, range, options))
}

/// Same as [`build_report`] with an already parsed range
pub fn build_report_for_range(
    all_orders: &[Order],
    range: Option<DateRange>,
    options: &ReportOptions,
) -> OrderReport {
    let mut orders = filter_by_range(all_orders, range.as_ref(), &options.timezone);
    sort_for_display(&mut orders);

    let totals = ReportTotals {
        order_count: orders.len() as u64,
        total_revenue: total_revenue(&orders, &options.calculator),
        total_items: total_items(&orders),
        status_counts: status_counts(&orders),
    };

    let rows = orders
        .iter()
        .map(|order| OrderSummary::from_order(order, &options.calculator))
        .collect();

    OrderReport {
        range,
        orders,
        rows,
        totals,
    }
}
