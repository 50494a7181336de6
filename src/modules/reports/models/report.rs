use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::date_range::DateRange;
use crate::modules::orders::models::{Order, OrderStatus};
use crate::modules::orders::services::OrderTotalCalculator;

/// Order count per status; always holds all seven statuses
pub type StatusCounts = BTreeMap<OrderStatus, u64>;

/// Status map with every status present at zero
pub fn empty_status_counts() -> StatusCounts {
    OrderStatus::ALL.iter().map(|status| (*status, 0)).collect()
}

/// Sales report for a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReport {
    /// Range applied, `None` when the report covers every order
    pub range: Option<DateRange>,
    /// Orders in the range, highest id first
    pub orders: Vec<Order>,
    /// One row per entry of `orders`, same order
    pub rows: Vec<OrderSummary>,
    pub totals: ReportTotals,
}

impl OrderReport {
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn total_revenue(&self) -> Decimal {
        self.totals.total_revenue
    }

    pub fn total_items(&self) -> u64 {
        self.totals.total_items
    }

    pub fn count_for(&self, status: OrderStatus) -> u64 {
        self.totals.count_for(status)
    }
}

/// Aggregate figures of a report
///
/// Can also be built incrementally: `record` one order at a time and `merge`
/// partial results. Cancelled orders count towards `order_count` and
/// `status_counts` only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    pub order_count: u64,
    pub total_revenue: Decimal,
    pub total_items: u64,
    pub status_counts: StatusCounts,
}

impl Default for ReportTotals {
    fn default() -> Self {
        Self {
            order_count: 0,
            total_revenue: Decimal::ZERO,
            total_items: 0,
            status_counts: empty_status_counts(),
        }
    }
}

impl ReportTotals {
    pub fn record(&mut self, order: &Order, calculator: &OrderTotalCalculator) {
        self.order_count += 1;
        *self.status_counts.entry(order.status).or_insert(0) += 1;

        if !order.is_cancelled() {
            self.total_revenue += calculator.total(order);
            self.total_items += order.item_count();
        }
    }

    pub fn merge(mut self, other: ReportTotals) -> Self {
        self.order_count += other.order_count;
        self.total_revenue += other.total_revenue;
        self.total_items += other.total_items;
        for (status, count) in other.status_counts {
            *self.status_counts.entry(status).or_insert(0) += count;
        }
        self
    }

    pub fn from_orders<'a>(
        orders: impl IntoIterator<Item = &'a Order>,
        calculator: &OrderTotalCalculator,
    ) -> Self {
        orders.into_iter().fold(Self::default(), |mut totals, order| {
            totals.record(order, calculator);
            totals
        })
    }

    pub fn count_for(&self, status: OrderStatus) -> u64 {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }
}

/// One line of the order detail table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: i64,
    pub created_at: DateTime<Utc>,
    pub customer_name: String,
    pub customer_phone: String,
    pub item_count: u64,
    /// Total after discount
    pub total: Decimal,
    /// A coupon with a non-zero discount was applied
    pub has_coupon: bool,
    pub status: OrderStatus,
}

impl OrderSummary {
    pub fn from_order(order: &Order, calculator: &OrderTotalCalculator) -> Self {
        Self {
            order_id: order.order_id,
            created_at: order.created_at,
            customer_name: order.contact_info.name.clone(),
            customer_phone: order.contact_info.phone.clone(),
            item_count: order.item_count(),
            total: calculator.total(order),
            has_coupon: order.active_coupon().is_some(),
            status: order.status,
        }
    }
}
