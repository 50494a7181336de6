use std::sync::Arc;

use tracing::{info, warn};

use crate::core::{AccessPolicy, AppError, Result};
use crate::modules::orders::repositories::OrderRepository;
use crate::modules::reports::models::{DateRange, OrderReport};

use super::report_builder::{build_report_for_range, ReportOptions};

/// Service for generating sales reports
///
/// Checks access, pulls every order from the store and hands them to the
/// pure report builder.
pub struct ReportService {
    order_repo: Arc<dyn OrderRepository>,
    access: Arc<dyn AccessPolicy>,
    options: ReportOptions,
}

impl ReportService {
    /// Create a new report service
    pub fn new(
        order_repo: Arc<dyn OrderRepository>,
        access: Arc<dyn AccessPolicy>,
        options: ReportOptions,
    ) -> Self {
        Self {
            order_repo,
            access,
            options,
        }
    }

    /// Generate the sales report for the given bounds
    ///
    /// # Arguments
    /// * `start` - First day of the period (inclusive), `YYYY-MM-DD` or RFC 3339
    /// * `end` - Last day of the period (inclusive)
    ///
    /// Leaving either bound out reports on every order.
    ///
    /// # Errors
    /// `Unauthorized` without admin access (the store is not queried),
    /// `InvalidArgument` for malformed bounds, and any error raised by the store.
    pub async fn generate_report(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<OrderReport> {
        if !self.access.is_authorized() {
            warn!("Sales report requested without admin access");
            return Err(AppError::unauthorized("admin access required for sales reports"));
        }

        let range = DateRange::from_bounds(start, end, &self.options.timezone)?;

        info!(
            "Generating sales report: start={:?}, end={:?}",
            range.map(|r| r.start_date),
            range.map(|r| r.end_date)
        );

        let orders = self.order_repo.list_orders().await?;
        let report = build_report_for_range(&orders, range, &self.options);

        if report.is_empty() {
            warn!("Empty sales report generated for range {:?}", range);
        } else {
            info!(
                "Sales report generated: {} of {} orders, revenue {}, {} items",
                report.totals.order_count,
                orders.len(),
                report.totals.total_revenue,
                report.totals.total_items
            );
        }

        Ok(report)
    }
}
