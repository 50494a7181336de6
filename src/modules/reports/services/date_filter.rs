use tracing::{debug, warn};

use crate::core::{ReportTimezone, Result};
use crate::modules::orders::models::Order;
use crate::modules::reports::models::DateRange;

/// Keep the orders created inside `range`
///
/// `None` keeps everything. Input order is preserved and the input is not touched.
pub fn filter_by_range(
    orders: &[Order],
    range: Option<&DateRange>,
    timezone: &ReportTimezone,
) -> Vec<Order> {
    let Some(range) = range else {
        return orders.to_vec();
    };

    if range.is_inverted() {
        warn!(
            "Date range starts after it ends ({} > {}), no order can match",
            range.start_date, range.end_date
        );
    }

    let filtered: Vec<Order> = orders
        .iter()
        .filter(|order| range.contains(order.created_at, timezone))
        .cloned()
        .collect();

    debug!(
        "Date filter {}..={} kept {} of {} orders",
        range.start_date,
        range.end_date,
        filtered.len(),
        orders.len()
    );

    filtered
}

/// Filter by raw user bounds
///
/// Either bound absent or blank returns the input unchanged.
/// A malformed bound fails with `InvalidArgument`.
pub fn filter_by_date(
    orders: &[Order],
    start: Option<&str>,
    end: Option<&str>,
    timezone: &ReportTimezone,
) -> Result<Vec<Order>> {
    let range = DateRange::from_bounds(start, end, timezone)?;
    Ok(filter_by_range(orders, range.as_ref(), timezone))
}
