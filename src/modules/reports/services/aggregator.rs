// Reductions over an already filtered order set.
//
// All of them are order-independent. Cancelled orders never contribute to
// revenue or item totals but are still counted per status.

use rust_decimal::Decimal;

use crate::modules::orders::models::{Order, OrderStatus};
use crate::modules::orders::services::OrderTotalCalculator;
use crate::modules::reports::models::StatusCounts;

/// Sum of order totals, cancelled orders excluded
pub fn total_revenue(orders: &[Order], calculator: &OrderTotalCalculator) -> Decimal {
    orders
        .iter()
        .filter(|order| !order.is_cancelled())
        .map(|order| calculator.total(order))
        .sum()
}

/// Sum of item quantities, cancelled orders excluded
pub fn total_items(orders: &[Order]) -> u64 {
    orders
        .iter()
        .filter(|order| !order.is_cancelled())
        .map(Order::item_count)
        .sum()
}

/// Number of orders in exactly `status`
pub fn count_by_status(orders: &[Order], status: OrderStatus) -> u64 {
    orders.iter().filter(|order| order.status == status).count() as u64
}

/// Count for every status, zero included
pub fn status_counts(orders: &[Order]) -> StatusCounts {
    OrderStatus::ALL
        .iter()
        .map(|status| (*status, count_by_status(orders, *status)))
        .collect()
}

/// Most recent order (highest id) first; ties keep their relative order
pub fn sort_for_display(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.order_id.cmp(&a.order_id));
}
