pub mod aggregator;
pub mod date_filter;
pub mod report_builder;
pub mod report_service;

pub use aggregator::{count_by_status, sort_for_display, status_counts, total_items, total_revenue};
pub use date_filter::{filter_by_date, filter_by_range};
pub use report_builder::{build_report, build_report_for_range, ReportOptions};
pub use report_service::ReportService;
